use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(msg)) = e.sql_err() {
            return ModelError::UniqueViolation(msg);
        }
        match e {
            DbErr::RecordNotFound(msg) => ModelError::NotFound(msg),
            DbErr::RecordNotUpdated => ModelError::NotFound("no row matched the update".into()),
            other => ModelError::Db(other.to_string()),
        }
    }
}
