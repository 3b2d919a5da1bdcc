//! Registry of the stores backing the services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    CompanyRepository, CompanyStore, PositionRepository, PositionStore, UserRepository, UserStore,
};

/// Hands out the store for each resource.
pub trait Repositories: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn companies(&self) -> Arc<dyn CompanyRepository>;

    fn positions(&self) -> Arc<dyn PositionRepository>;
}

/// SeaORM-backed stores sharing one connection pool.
#[derive(Clone)]
pub struct Persistence {
    users: Arc<UserStore>,
    companies: Arc<CompanyStore>,
    positions: Arc<PositionStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            companies: Arc::new(CompanyStore::new(db.clone())),
            positions: Arc::new(PositionStore::new(db)),
        }
    }
}

impl Repositories for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.companies.clone()
    }

    fn positions(&self) -> Arc<dyn PositionRepository> {
        self.positions.clone()
    }
}
