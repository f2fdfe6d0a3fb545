//! Repository layer abstractions and the in-process stub implementation.
//!
//! # Responsibility
//! - Define the data access contract the service layer depends on.
//! - Keep future storage details out of service/business orchestration.
//!
//! # Invariants
//! - Services depend on the `EmployeeRepository` trait, never on a concrete
//!   implementation.

pub mod employee_repo;
