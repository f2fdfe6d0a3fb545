//! Employee repository contract and stub implementation.
//!
//! # Responsibility
//! - Define the write contract for employee records.
//! - Provide the no-op stub used until a real storage backend lands.
//!
//! # Invariants
//! - The stub performs no observable data effect and never fails.
//! - Implementations receive the entity by reference and must not mutate it.

use crate::model::employee::Employee;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error surface for employee persistence operations.
///
/// No operation in this crate produces an error today; the variant exists so
/// a connection-backed implementation can report transport failures without
/// changing the contract.
#[derive(Debug)]
pub enum RepoError {
    Backend(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "repository backend failure: {message}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for employee write operations.
pub trait EmployeeRepository {
    /// Records one employee.
    fn add(&self, employee: &Employee) -> RepoResult<()>;
}

/// No-op employee repository.
///
/// Stands in for a storage-backed implementation; `add` accepts every record
/// and drops it.
#[derive(Debug, Default)]
pub struct StubEmployeeRepository;

impl StubEmployeeRepository {
    /// Creates the stub repository.
    ///
    /// A connection-backed implementation would acquire its connection string
    /// and open the backend here.
    pub fn new() -> Self {
        Self
    }
}

impl EmployeeRepository for StubEmployeeRepository {
    fn add(&self, employee: &Employee) -> RepoResult<()> {
        // No storage is wired up yet; the record is accepted and dropped.
        debug!(
            "event=employee_add module=repo status=ok backend=stub id={}",
            employee.id
        );
        Ok(())
    }
}
