//! Soft-delete repository contract and the SeaORM queries every store shares.
//!
//! A row is active while `deleted_at` is NULL. Reads through
//! [`SoftDeleteRepository`] only see active rows unless the method says
//! otherwise.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::domain::{Resource, User};
use crate::errors::AppResult;

/// Store contract for a soft-deletable, uniquely keyed entity.
#[async_trait]
pub trait SoftDeleteRepository: Send + Sync {
    type Entity: Resource;
    /// Insert payload (already validated, credentials already hashed)
    type Create: Send + 'static;
    /// Update payload
    type Update: Send + 'static;

    /// All active rows, oldest first
    async fn list(&self) -> AppResult<Vec<Self::Entity>>;

    /// Active row by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Self::Entity>>;

    /// Active rows holding any part of `key`
    async fn find_active_by_key(
        &self,
        key: &<Self::Entity as Resource>::Key,
    ) -> AppResult<Vec<Self::Entity>>;

    /// Soft-deleted rows only
    async fn list_deleted(&self) -> AppResult<Vec<Self::Entity>>;

    async fn create(&self, input: Self::Create) -> AppResult<Self::Entity>;

    /// Apply changes to an active row
    async fn update(&self, id: i32, changes: Self::Update) -> AppResult<Self::Entity>;

    /// Stamp `deleted_at` on an active row. Returns rows affected.
    async fn soft_delete(&self, id: i32) -> AppResult<u64>;

    /// Clear `deleted_at`. Returns rows affected; zero is not an error.
    async fn restore(&self, id: i32) -> AppResult<u64>;

    /// Active users pointing at this row.
    async fn referencing_users(&self, _id: i32) -> AppResult<Vec<User>> {
        Ok(Vec::new())
    }
}

/// Column accessors needed for the shared soft-delete queries.
pub trait SoftDelete: EntityTrait {
    fn id_col() -> Self::Column;
    fn deleted_at_col() -> Self::Column;
    fn updated_at_col() -> Self::Column;
}

pub(crate) async fn list_active<E: SoftDelete>(db: &DatabaseConnection) -> AppResult<Vec<E::Model>> {
    let models = E::find()
        .filter(E::deleted_at_col().is_null())
        .order_by_asc(E::id_col())
        .all(db)
        .await?;
    Ok(models)
}

pub(crate) async fn list_deleted<E: SoftDelete>(db: &DatabaseConnection) -> AppResult<Vec<E::Model>> {
    let models = E::find()
        .filter(E::deleted_at_col().is_not_null())
        .order_by_asc(E::id_col())
        .all(db)
        .await?;
    Ok(models)
}

pub(crate) async fn find_active<E: SoftDelete>(
    db: &DatabaseConnection,
    id: i32,
) -> AppResult<Option<E::Model>> {
    let model = E::find()
        .filter(E::id_col().eq(id))
        .filter(E::deleted_at_col().is_null())
        .one(db)
        .await?;
    Ok(model)
}

pub(crate) async fn mark_deleted<E: SoftDelete>(db: &DatabaseConnection, id: i32) -> AppResult<u64> {
    let now = Utc::now();
    let result = E::update_many()
        .col_expr(E::deleted_at_col(), Expr::value(Some(now)))
        .col_expr(E::updated_at_col(), Expr::value(now))
        .filter(E::id_col().eq(id))
        .filter(E::deleted_at_col().is_null())
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

pub(crate) async fn clear_deleted<E: SoftDelete>(db: &DatabaseConnection, id: i32) -> AppResult<u64> {
    let result = E::update_many()
        .col_expr(E::deleted_at_col(), Expr::value(None::<DateTime<Utc>>))
        .col_expr(E::updated_at_col(), Expr::value(Utc::now()))
        .filter(E::id_col().eq(id))
        .filter(E::deleted_at_col().is_not_null())
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
