//! Company database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::SoftDelete;
use crate::domain::Company;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: String,
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

impl From<Model> for Company {
    fn from(model: Model) -> Self {
        Company {
            id: model.id,
            company_name: model.company_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
