//! Application state shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, CompanyService, PositionService, ServiceContainer, Services, UserService,
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub company_service: Arc<dyn CompanyService>,
    pub position_service: Arc<dyn PositionService>,
    /// Used by the health check
    pub database: Arc<Database>,
    /// Resource policies decide which routes are mounted and guarded
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the SeaORM-backed services over `database`.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let services = Services::from_connection(database.get_connection(), &config);
        Self::new(&services, database, config)
    }

    /// Build state from an already assembled set of services.
    pub fn new(services: &impl ServiceContainer, database: Arc<Database>, config: Config) -> Self {
        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            company_service: services.companies(),
            position_service: services.positions(),
            database,
            config: Arc::new(config),
        }
    }
}
