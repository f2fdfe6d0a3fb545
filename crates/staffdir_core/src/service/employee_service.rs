//! Employee use-case service.
//!
//! # Responsibility
//! - Provide the `add` entry point for core callers.
//! - Delegate persistence to the injected repository implementation.
//!
//! # Invariants
//! - The repository binding is fixed at construction for the service lifetime.
//! - `add` delegates unconditionally and never mutates its argument.

use crate::model::employee::Employee;
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};

/// Use-case service for employee operations.
///
/// Generic over the repository contract; there is no default construction
/// path, so every service instance carries a caller-supplied repository.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records one employee through the injected repository.
    ///
    /// # Contract
    /// - Exactly one repository `add` call per invocation.
    /// - No pre-validation, transformation, or retry.
    pub fn add(&self, employee: &Employee) -> RepoResult<()> {
        self.repo.add(employee)
    }
}
