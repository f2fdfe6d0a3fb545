//! Core domain logic for StaffDir.
//! This crate owns the employee model and the repository/service seams.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId};
pub use repo::employee_repo::{EmployeeRepository, RepoError, RepoResult, StubEmployeeRepository};
pub use service::employee_service::EmployeeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
