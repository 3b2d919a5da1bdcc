//! Service container - one place to reach every application service.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CompanyManager, CompanyService, Lifecycle, PositionManager,
    PositionService, TokenIssuer, UserManager, UserService,
};
use crate::config::Config;
use crate::infra::{Persistence, Repositories};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn companies(&self) -> Arc<dyn CompanyService>;

    fn positions(&self) -> Arc<dyn PositionService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    company_service: Arc<dyn CompanyService>,
    position_service: Arc<dyn PositionService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        company_service: Arc<dyn CompanyService>,
        position_service: Arc<dyn PositionService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            company_service,
            position_service,
        }
    }

    /// Wire every service over the SeaORM stores.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        Self::from_repositories(&Persistence::new(db), config)
    }

    pub fn from_repositories(repos: &impl Repositories, config: &Config) -> Self {
        let users = Lifecycle::new(repos.users(), config.users);
        let companies = Lifecycle::new(repos.companies(), config.companies);
        let positions = Lifecycle::new(repos.positions(), config.positions);

        Self {
            auth_service: Arc::new(Authenticator::new(users.clone(), TokenIssuer::new(config))),
            user_service: Arc::new(UserManager::new(users)),
            company_service: Arc::new(CompanyManager::new(companies)),
            position_service: Arc::new(PositionManager::new(positions)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyService> {
        self.company_service.clone()
    }

    fn positions(&self) -> Arc<dyn PositionService> {
        self.position_service.clone()
    }
}
