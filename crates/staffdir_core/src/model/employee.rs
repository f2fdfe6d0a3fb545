//! Employee domain model.
//!
//! # Responsibility
//! - Define the employee record shared by repository and service layers.
//! - Provide the derived display-name accessor.
//!
//! # Invariants
//! - `full_name()` is recomputed from the current field values on every call.
//! - No field carries validation; identifiers are caller-assigned.

use serde::{Deserialize, Serialize};

/// Identifier for an employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Uniqueness is not enforced by this crate.
pub type EmployeeId = i64;

/// Plain employee record.
///
/// All fields are public and mutable; the entity is a value owned by whichever
/// caller holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Caller-assigned identifier.
    pub id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Employee {
    /// Creates an employee record from its field values.
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns the display name as `first_name`, one space, `last_name`.
    ///
    /// Derived on each call; mutating either name field changes the result.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
