use sea_orm::DatabaseConnection;

use models::{employee, errors::ModelError};

use crate::employee::domain::Employee;
use crate::employee::errors::RepositoryError;
use crate::employee::repository::EmployeeRepository;

/// SeaORM-backed repository. Email uniqueness is enforced by the
/// `idx_employee_email_unique` index rather than by a prior lookup.
#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_write_err(e: ModelError, employee: &Employee) -> RepositoryError {
    match e {
        ModelError::UniqueViolation(_) => RepositoryError::Conflict { field: "email", value: employee.email.clone() },
        ModelError::NotFound(_) => match employee.id {
            Some(id) => RepositoryError::Missing(id),
            None => RepositoryError::Backend(e.to_string()),
        },
        other => RepositoryError::Backend(other.to_string()),
    }
}

fn map_read_err(e: ModelError) -> RepositoryError {
    RepositoryError::Backend(e.to_string())
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let saved = match employee.id {
            None => employee::insert(&self.db, &employee.first_name, &employee.second_name, &employee.email).await,
            Some(id) => employee::overwrite(&self.db, id, &employee.first_name, &employee.second_name, &employee.email).await,
        };
        saved.map(Employee::from).map_err(|e| map_write_err(e, &employee))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let rows = employee::find_all(&self.db).await.map_err(map_read_err)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        let row = employee::find_by_id(&self.db, id).await.map_err(map_read_err)?;
        Ok(row.map(Employee::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        let row = employee::find_by_email(&self.db, email).await.map_err(map_read_err)?;
        Ok(row.map(Employee::from))
    }

    async fn delete(&self, employee: &Employee) -> Result<(), RepositoryError> {
        let id = employee.id.ok_or(RepositoryError::Unsaved)?;
        if employee::delete_by_id(&self.db, id).await.map_err(map_read_err)? {
            Ok(())
        } else {
            Err(RepositoryError::Missing(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);

        let saved = repo.save(Employee::new("John", "Willick", "johnwillick@johnwillick.com")).await?;
        let id = saved.id.expect("id assigned");
        assert_eq!(repo.find_by_id(id).await?, Some(saved.clone()));
        assert_eq!(repo.find_by_email("johnwillick@johnwillick.com").await?, Some(saved.clone()));

        let replaced = repo.save(Employee::new("John", "Wick", "wick@continental.com").with_id(id)).await?;
        assert_eq!(replaced.id, Some(id));
        assert_eq!(repo.find_all().await?, vec![replaced.clone()]);

        repo.delete(&replaced).await?;
        assert!(repo.find_by_id(id).await?.is_none());
        assert_eq!(repo.delete(&replaced).await.unwrap_err(), RepositoryError::Missing(id));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_maps_unique_index_to_conflict() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        repo.save(Employee::new("A", "A", "dup@example.com")).await?;

        let err = repo.save(Employee::new("B", "B", "dup@example.com")).await.unwrap_err();
        assert_eq!(err, RepositoryError::Conflict { field: "email", value: "dup@example.com".into() });

        let b = repo.save(Employee::new("B", "B", "b@example.com")).await?;
        let b_id = b.id.unwrap();
        let err = repo.save(Employee::new("B", "B", "dup@example.com").with_id(b_id)).await.unwrap_err();
        assert_eq!(err, RepositoryError::Conflict { field: "email", value: "dup@example.com".into() });
        assert_eq!(repo.find_by_id(b_id).await?, Some(b));

        let err = repo.save(Employee::new("C", "C", "c@example.com").with_id(404)).await.unwrap_err();
        assert_eq!(err, RepositoryError::Missing(404));
        Ok(())
    }
}
