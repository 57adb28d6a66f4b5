use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::employee::repository::mock::InMemoryEmployeeRepository;
use service::employee::repo::seaorm::SeaOrmEmployeeRepository;
use service::{EmployeeRepository, EmployeeService};

/// Shared handler state; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<EmployeeService<dyn EmployeeRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees: Arc::new(EmployeeService::new(repo)) }
    }

    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmEmployeeRepository::new(db)))
    }

    /// State over a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEmployeeRepository::new()))
    }
}
