use thiserror::Error;

/// Failures reported by an `EmployeeRepository` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The store refused a write because `field` must be unique.
    #[error("{field} '{value}' is already taken")]
    Conflict { field: &'static str, value: String },
    /// An overwrite or delete targeted an id the store does not hold.
    #[error("no employee with id {0}")]
    Missing(i64),
    #[error("employee has no id")]
    Unsaved,
    #[error("backend failure: {0}")]
    Backend(String),
}
