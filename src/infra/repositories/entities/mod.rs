//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod company;
pub mod position;
pub mod user;

pub use super::base::SoftDelete;

#[allow(unused_imports)]
pub use company::{ActiveModel as CompanyActiveModel, Entity as CompanyEntity};
#[allow(unused_imports)]
pub use position::{ActiveModel as PositionActiveModel, Entity as PositionEntity};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity};
