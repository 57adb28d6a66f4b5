use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::Employee;
use super::repository::EmployeeRepository;
use crate::errors::{ServiceError, EMPLOYEE};

/// Employee business service independent of web framework and storage engine.
///
/// `R` may be unsized, so `EmployeeService<dyn EmployeeRepository>` works for callers
/// that pick the backend at runtime.
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new employee; the email must not be held by any stored employee.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{repository::mock::InMemoryEmployeeRepository, Employee, EmployeeService};
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
    /// let created = tokio_test::block_on(svc.create(Employee::new("John", "Willick", "johnwillick@johnwillick.com"))).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// let err = tokio_test::block_on(svc.create(Employee::new("J", "W", "johnwillick@johnwillick.com"))).unwrap_err();
    /// assert_eq!(err.to_string(), "Employee with email : 'johnwillick@johnwillick.com' already exists");
    /// ```
    #[instrument(skip(self, candidate), fields(email = %candidate.email))]
    pub async fn create(&self, mut candidate: Employee) -> Result<Employee, ServiceError> {
        if let Some(existing) = self.repo.find_by_email(&candidate.email).await? {
            debug!(existing_id = ?existing.id, "email already taken");
            return Err(ServiceError::already_exists(EMPLOYEE, "email", candidate.email));
        }
        // Create never overwrites; the store always assigns the id.
        candidate.id = None;
        let created = self.repo.save(candidate).await?;
        info!(id = ?created.id, email = %created.email, "employee_created");
        Ok(created)
    }

    /// All stored employees in store order; empty when nothing is stored.
    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        let all = self.repo.find_all().await?;
        debug!(count = all.len(), "employees_listed");
        Ok(all)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Employee, ServiceError> {
        self.find_existing(id).await
    }

    /// Replace names and email of the employee selected by `data.id`, keeping the stored id.
    ///
    /// Email uniqueness is not re-checked here; a store with a unique index on email
    /// still rejects a clash, which surfaces as `AlreadyExists`.
    #[instrument(skip(self, data), fields(id = ?data.id))]
    pub async fn update(&self, data: Employee) -> Result<Employee, ServiceError> {
        let id = data
            .id
            .ok_or_else(|| ServiceError::not_found(EMPLOYEE, "id", "null"))?;
        let existing = self.find_existing(id).await?;
        let replacement = Employee {
            id: existing.id,
            first_name: data.first_name,
            second_name: data.second_name,
            email: data.email,
        };
        let updated = self.repo.save(replacement).await?;
        info!(id = ?updated.id, "employee_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let existing = self.find_existing(id).await?;
        self.repo.delete(&existing).await?;
        info!(id, "employee_deleted");
        Ok(())
    }

    async fn find_existing(&self, id: i64) -> Result<Employee, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EMPLOYEE, "id", id.to_string()))
    }
}
