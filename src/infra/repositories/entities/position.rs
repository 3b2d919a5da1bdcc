//! Position database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::SoftDelete;
use crate::domain::Position;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "positions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub position_name: String,
    pub position_code: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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

impl From<Model> for Position {
    fn from(model: Model) -> Self {
        Position {
            id: model.id,
            position_name: model.position_name,
            position_code: model.position_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
