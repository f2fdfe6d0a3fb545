//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire the stub repository into the employee service end to end.
//! - Keep output deterministic for quick local sanity checks.

use staffdir_core::{Employee, EmployeeService, StubEmployeeRepository};

fn main() {
    let repository = StubEmployeeRepository::new();
    let service = EmployeeService::new(repository);

    let employee = Employee::new(1, "Jane", "Doe");

    println!("staffdir_core version={}", staffdir_core::core_version());
    println!("adding employee full_name={}", employee.full_name());
    match service.add(&employee) {
        Ok(()) => println!("add status=ok"),
        Err(err) => eprintln!("add status=error error={err}"),
    }
}
