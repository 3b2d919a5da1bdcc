//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::SoftDelete;
use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub phone_number: String,
    pub position_name: String,
    pub company: String,
    pub company_id: Option<i32>,
    pub position_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// Soft delete timestamp (NULL = active, set = deleted)
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDelete for Entity {
    fn id_col() -> Column {
        Column::Id
    }

    fn deleted_at_col() -> Column {
        Column::DeletedAt
    }

    fn updated_at_col() -> Column {
        Column::UpdatedAt
    }
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            password_hash: model.password_hash,
            role: model.role,
            phone_number: model.phone_number,
            position_name: model.position_name,
            company: model.company,
            company_id: model.company_id,
            position_id: model.position_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
