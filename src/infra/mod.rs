//! Infrastructure layer - database connection, migrations and stores.

pub mod db;
pub mod persistence;
pub mod repositories;

pub use db::{Database, Migrator};
pub use persistence::{Persistence, Repositories};
pub use repositories::{
    CompanyRepository, CompanyStore, PositionRepository, PositionStore, SoftDeleteRepository,
    UserRepository, UserStore,
};
