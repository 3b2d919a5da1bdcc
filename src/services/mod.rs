//! Application services layer - use cases and business logic.
//!
//! Services depend on the store traits, never on SeaORM directly.

mod auth_service;
mod company_service;
pub mod container;
mod lifecycle;
mod position_service;
mod token_service;
mod user_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{AuthService, Authenticator};
pub use company_service::{CompanyManager, CompanyService};
pub use lifecycle::Lifecycle;
pub use position_service::{PositionManager, PositionService};
pub use token_service::{Claims, TokenIssuer, TokenResponse};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
