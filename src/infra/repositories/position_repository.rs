//! Position store with soft delete support.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::base::{self, SoftDeleteRepository};
use super::entities::position::{self, ActiveModel, Entity as PositionEntity};
use super::entities::user;
use super::user_repository::users_referencing;
use crate::config::RESOURCE_POSITION;
use crate::domain::{CreatePosition, Position, PositionKey, UpdatePosition, User};
use crate::errors::{AppResult, OptionExt};

/// Store contract for positions; name and code are each unique.
pub trait PositionRepository:
    SoftDeleteRepository<Entity = Position, Create = CreatePosition, Update = UpdatePosition>
{
}

impl<T> PositionRepository for T where
    T: SoftDeleteRepository<Entity = Position, Create = CreatePosition, Update = UpdatePosition>
        + ?Sized
{
}

/// SeaORM-backed position store
pub struct PositionStore {
    db: DatabaseConnection,
}

impl PositionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SoftDeleteRepository for PositionStore {
    type Entity = Position;
    type Create = CreatePosition;
    type Update = UpdatePosition;

    async fn list(&self) -> AppResult<Vec<Position>> {
        let models = base::list_active::<PositionEntity>(&self.db).await?;
        Ok(models.into_iter().map(Position::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Position>> {
        let model = base::find_active::<PositionEntity>(&self.db, id).await?;
        Ok(model.map(Position::from))
    }

    async fn find_active_by_key(&self, key: &PositionKey) -> AppResult<Vec<Position>> {
        let models = PositionEntity::find()
            .filter(
                Condition::any()
                    .add(position::Column::PositionName.eq(key.name.as_str()))
                    .add(position::Column::PositionCode.eq(key.code.as_str())),
            )
            .filter(position::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Position::from).collect())
    }

    async fn list_deleted(&self) -> AppResult<Vec<Position>> {
        let models = base::list_deleted::<PositionEntity>(&self.db).await?;
        Ok(models.into_iter().map(Position::from).collect())
    }

    async fn create(&self, input: CreatePosition) -> AppResult<Position> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            position_name: Set(input.position_name),
            position_code: Set(input.position_code),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Position::from(model))
    }

    async fn update(&self, id: i32, changes: UpdatePosition) -> AppResult<Position> {
        let position = base::find_active::<PositionEntity>(&self.db, id)
            .await?
            .ok_or_not_found(RESOURCE_POSITION)?;

        let mut active: ActiveModel = position.into();

        if let Some(name) = changes.position_name {
            active.position_name = Set(name);
        }
        if let Some(code) = changes.position_code {
            active.position_code = Set(code);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Position::from(model))
    }

    async fn soft_delete(&self, id: i32) -> AppResult<u64> {
        base::mark_deleted::<PositionEntity>(&self.db, id).await
    }

    async fn restore(&self, id: i32) -> AppResult<u64> {
        base::clear_deleted::<PositionEntity>(&self.db, id).await
    }

    async fn referencing_users(&self, id: i32) -> AppResult<Vec<User>> {
        users_referencing(&self.db, user::Column::PositionId, id).await
    }
}
