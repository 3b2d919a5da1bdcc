//! Domain layer - core entities and value objects.
//!
//! Nothing in here touches the database or HTTP.

pub mod company;
pub mod password;
pub mod position;
pub mod resource;
pub mod user;

pub use company::{Company, CompanyInput};
pub use password::Password;
pub use position::{CreatePosition, Position, PositionKey, UpdatePosition};
pub use resource::Resource;
pub use user::{
    CreateUser, Login, SignUp, UpdateUser, User, UserDraft, UserPatch, UserResponse,
};
