//! Repository layer - Data access abstraction
//!
//! One store per soft-deletable entity, all behind [`SoftDeleteRepository`].

mod base;
mod company_repository;
pub(crate) mod entities;
mod position_repository;
mod user_repository;

pub use base::SoftDeleteRepository;
pub use company_repository::{CompanyRepository, CompanyStore};
pub use position_repository::{PositionRepository, PositionStore};
pub use user_repository::{UserRepository, UserStore};
