//! Service layer providing the employee business rules on top of models.
//! - Separates business logic from data access through `EmployeeRepository`.
//! - Enforces the email uniqueness and existence checks.
//! - Reports failures as `ServiceError`, whose messages are shown to API callers verbatim.

pub mod errors;
pub mod employee;
#[cfg(test)]
pub mod test_support;

pub use employee::{Employee, EmployeeRepository, EmployeeService};
pub use errors::ServiceError;
