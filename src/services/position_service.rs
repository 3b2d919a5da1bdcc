//! Position service.
//!
//! Updates are partial: an omitted name or code keeps its stored value,
//! and only the resulting pair is checked for conflicts.

use async_trait::async_trait;

use super::Lifecycle;
use crate::domain::{CreatePosition, Position, UpdatePosition};
use crate::errors::AppResult;
use crate::infra::PositionRepository;

#[async_trait]
pub trait PositionService: Send + Sync {
    async fn list_positions(&self) -> AppResult<Vec<Position>>;

    async fn get_position(&self, id: i32) -> AppResult<Position>;

    async fn create_position(&self, body: CreatePosition) -> AppResult<Position>;

    async fn update_position(&self, id: i32, body: UpdatePosition) -> AppResult<Position>;

    /// Soft delete unless a user still holds the position
    async fn delete_position(&self, id: i32) -> AppResult<Position>;

    async fn restore_position(&self, id: i32) -> AppResult<()>;

    async fn list_deleted_positions(&self) -> AppResult<Vec<Position>>;
}

pub struct PositionManager {
    positions: Lifecycle<dyn PositionRepository>,
}

impl PositionManager {
    pub fn new(positions: Lifecycle<dyn PositionRepository>) -> Self {
        Self { positions }
    }
}

#[async_trait]
impl PositionService for PositionManager {
    async fn list_positions(&self) -> AppResult<Vec<Position>> {
        self.positions.list().await
    }

    async fn get_position(&self, id: i32) -> AppResult<Position> {
        self.positions.get(id).await
    }

    async fn create_position(&self, body: CreatePosition) -> AppResult<Position> {
        self.positions.create(body.key(), move || Ok(body)).await
    }

    async fn update_position(&self, id: i32, body: UpdatePosition) -> AppResult<Position> {
        let changes = body.normalized();
        let key_source = changes.clone();
        self.positions
            .update(id, move |current| key_source.key_after(current), move || Ok(changes))
            .await
    }

    async fn delete_position(&self, id: i32) -> AppResult<Position> {
        self.positions.delete(id).await
    }

    async fn restore_position(&self, id: i32) -> AppResult<()> {
        self.positions.restore(id).await
    }

    async fn list_deleted_positions(&self) -> AppResult<Vec<Position>> {
        self.positions.list_deleted().await
    }
}
