use async_trait::async_trait;

use super::domain::Employee;
use super::errors::RepositoryError;

/// Storage contract for employees.
///
/// Implementations must keep `email` unique across stored records and report a
/// violation as `RepositoryError::Conflict`.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert when `id` is `None` (the store assigns one), otherwise overwrite the record with that id.
    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError>;
    async fn delete(&self, employee: &Employee) -> Result<(), RepositoryError>;
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use std::collections::BTreeMap;

    use tokio::sync::RwLock;

    use super::*;

    #[derive(Default)]
    struct Rows {
        by_id: BTreeMap<i64, Employee>,
        last_id: i64,
    }

    /// Ids start at 1 and are never reused.
    #[derive(Default)]
    pub struct InMemoryEmployeeRepository {
        rows: RwLock<Rows>,
    }

    impl InMemoryEmployeeRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn len(&self) -> usize {
            self.rows.read().await.by_id.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn save(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
            let mut rows = self.rows.write().await;
            let taken = rows
                .by_id
                .values()
                .any(|e| e.email == employee.email && e.id != employee.id);
            if taken {
                return Err(RepositoryError::Conflict { field: "email", value: employee.email });
            }
            let id = match employee.id {
                Some(id) if rows.by_id.contains_key(&id) => id,
                Some(id) => return Err(RepositoryError::Missing(id)),
                None => {
                    rows.last_id += 1;
                    rows.last_id
                }
            };
            employee.id = Some(id);
            rows.by_id.insert(id, employee.clone());
            Ok(employee)
        }

        async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
            Ok(self.rows.read().await.by_id.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
            Ok(self.rows.read().await.by_id.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
            let rows = self.rows.read().await;
            Ok(rows.by_id.values().find(|e| e.email == email).cloned())
        }

        async fn delete(&self, employee: &Employee) -> Result<(), RepositoryError> {
            let id = employee.id.ok_or(RepositoryError::Unsaved)?;
            match self.rows.write().await.by_id.remove(&id) {
                Some(_) => Ok(()),
                None => Err(RepositoryError::Missing(id)),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn assigns_increasing_ids_and_never_reuses_them() -> Result<(), anyhow::Error> {
            let repo = InMemoryEmployeeRepository::new();
            let a = repo.save(Employee::new("A", "A", "a@example.com")).await?;
            let b = repo.save(Employee::new("B", "B", "b@example.com")).await?;
            assert_eq!((a.id, b.id), (Some(1), Some(2)));

            repo.delete(&b).await?;
            let c = repo.save(Employee::new("C", "C", "c@example.com")).await?;
            assert_eq!(c.id, Some(3));
            assert_eq!(repo.len().await, 2);
            Ok(())
        }

        #[tokio::test]
        async fn enforces_unique_email_on_insert_and_overwrite() -> Result<(), anyhow::Error> {
            let repo = InMemoryEmployeeRepository::new();
            let a = repo.save(Employee::new("A", "A", "a@example.com")).await?;
            let b = repo.save(Employee::new("B", "B", "b@example.com")).await?;

            let err = repo.save(Employee::new("X", "X", "a@example.com")).await.unwrap_err();
            assert_eq!(err, RepositoryError::Conflict { field: "email", value: "a@example.com".into() });

            let err = repo.save(Employee::new("B", "B", "a@example.com").with_id(b.id.unwrap())).await.unwrap_err();
            assert!(matches!(err, RepositoryError::Conflict { .. }));

            // Keeping its own email is not a conflict
            let renamed = repo.save(Employee::new("Ann", "A", "a@example.com").with_id(a.id.unwrap())).await?;
            assert_eq!(renamed.first_name, "Ann");
            Ok(())
        }

        #[tokio::test]
        async fn overwrite_and_delete_of_unknown_ids_fail() {
            let repo = InMemoryEmployeeRepository::new();
            let ghost = Employee::new("G", "G", "g@example.com").with_id(9);
            assert_eq!(repo.save(ghost.clone()).await.unwrap_err(), RepositoryError::Missing(9));
            assert_eq!(repo.delete(&ghost).await.unwrap_err(), RepositoryError::Missing(9));
            assert_eq!(
                repo.delete(&Employee::new("G", "G", "g@example.com")).await.unwrap_err(),
                RepositoryError::Unsaved
            );
        }
    }
}
