use thiserror::Error;

use crate::employee::errors::RepositoryError;

pub const EMPLOYEE: &str = "Employee";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{entity} with {field} : '{value}' already exists")]
    AlreadyExists { entity: &'static str, field: &'static str, value: String },
    #[error("{entity} not found with {field} : '{value}'")]
    NotFound { entity: &'static str, field: &'static str, value: String },
    #[error("repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    pub fn already_exists(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::AlreadyExists { entity, field, value: value.into() }
    }

    pub fn not_found(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::NotFound { entity, field, value: value.into() }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::AlreadyExists { .. } => 1002,
            ServiceError::NotFound { .. } => 1003,
            ServiceError::Repository(_) => 1200,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Conflict { field, value } => ServiceError::already_exists(EMPLOYEE, field, value),
            RepositoryError::Missing(id) => ServiceError::not_found(EMPLOYEE, "id", id.to_string()),
            other => ServiceError::Repository(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_format() {
        let e = ServiceError::already_exists(EMPLOYEE, "email", "johnwillick@johnwillick.com");
        assert_eq!(e.to_string(), "Employee with email : 'johnwillick@johnwillick.com' already exists");

        let e = ServiceError::not_found(EMPLOYEE, "id", "999");
        assert_eq!(e.to_string(), "Employee not found with id : '999'");
    }

    #[test]
    fn repository_errors_map_to_domain_kinds() {
        let e: ServiceError = RepositoryError::Conflict { field: "email", value: "a@b.c".into() }.into();
        assert_eq!(e, ServiceError::already_exists(EMPLOYEE, "email", "a@b.c"));
        assert_eq!(e.code(), 1002);

        let e: ServiceError = RepositoryError::Missing(42).into();
        assert_eq!(e, ServiceError::not_found(EMPLOYEE, "id", "42"));

        let e: ServiceError = RepositoryError::Backend("connection reset".into()).into();
        assert_eq!(e.to_string(), "repository error: backend failure: connection reset");
        assert_eq!(e.code(), 1200);
    }
}
