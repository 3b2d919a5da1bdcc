//! Create / update / delete / restore flow shared by every resource.
//!
//! A natural key may be held by at most one active row. Before a write
//! claims a key, the active rows holding it are checked, then (when the
//! resource reserves deleted keys) the soft-deleted ones. The unique index
//! in the store backs this up; a violation there is reported as an active
//! duplicate as well.

use std::sync::Arc;

use crate::config::ResourcePolicy;
use crate::domain::Resource;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::SoftDeleteRepository;

type Entity<R> = <R as SoftDeleteRepository>::Entity;
type Key<R> = <Entity<R> as Resource>::Key;

/// Lifecycle controller for the resource stored in `R`.
pub struct Lifecycle<R: ?Sized> {
    repo: Arc<R>,
    policy: ResourcePolicy,
}

impl<R: ?Sized> Clone for Lifecycle<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            policy: self.policy,
        }
    }
}

impl<R> Lifecycle<R>
where
    R: SoftDeleteRepository + ?Sized,
{
    pub fn new(repo: Arc<R>, policy: ResourcePolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> ResourcePolicy {
        self.policy
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    fn name() -> &'static str {
        <Entity<R> as Resource>::NAME
    }

    pub async fn list(&self) -> AppResult<Vec<Entity<R>>> {
        self.repo.list().await
    }

    pub async fn list_deleted(&self) -> AppResult<Vec<Entity<R>>> {
        self.repo.list_deleted().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Entity<R>> {
        self.repo.find_by_id(id).await?.ok_or_not_found(Self::name())
    }

    /// Fail if `key` is taken by an active row other than `exclude`, or by
    /// a soft-deleted row when deleted keys are reserved.
    pub async fn ensure_available(&self, key: &Key<R>, exclude: Option<i32>) -> AppResult<()> {
        let active = self.repo.find_active_by_key(key).await?;
        if active.iter().any(|row| Some(row.id()) != exclude) {
            tracing::warn!(resource = Self::name(), ?key, "Rejected: key held by an active row");
            return Err(AppError::DuplicateActive(Self::name().to_string()));
        }

        if self.policy.reserve_deleted_keys {
            let deleted = self.repo.list_deleted().await?;
            if deleted.iter().any(|row| row.holds_key(key)) {
                tracing::warn!(resource = Self::name(), ?key, "Rejected: key held by a soft-deleted row");
                return Err(AppError::DuplicateSoftDeleted(Self::name().to_string()));
            }
        }

        Ok(())
    }

    /// Create a row holding `key`. `prepare` builds the insert payload and
    /// only runs once the key is known to be free.
    pub async fn create<F>(&self, key: Key<R>, prepare: F) -> AppResult<Entity<R>>
    where
        F: FnOnce() -> AppResult<R::Create> + Send,
    {
        self.ensure_available(&key, None).await?;
        let input = prepare()?;

        let created = self
            .repo
            .create(input)
            .await
            .map_err(|e| e.into_conflict(Self::name()))?;

        tracing::info!(resource = Self::name(), id = created.id(), "Created");
        Ok(created)
    }

    /// Update row `id`. The key checks are repeated only when `key_of`
    /// reports a key different from the stored one.
    pub async fn update<K, F>(&self, id: i32, key_of: K, prepare: F) -> AppResult<Entity<R>>
    where
        K: FnOnce(&Entity<R>) -> Key<R> + Send,
        F: FnOnce() -> AppResult<R::Update> + Send,
    {
        let current = self.get(id).await?;
        let key = key_of(&current);
        if key != current.natural_key() {
            self.ensure_available(&key, Some(id)).await?;
        }
        let changes = prepare()?;

        let updated = self
            .repo
            .update(id, changes)
            .await
            .map_err(|e| e.into_conflict(Self::name()))?;

        tracing::info!(resource = Self::name(), id, "Updated");
        Ok(updated)
    }

    /// Soft-delete row `id` and return it as it was before deletion.
    /// Rows still referenced by an active user are left alone.
    pub async fn delete(&self, id: i32) -> AppResult<Entity<R>> {
        let users = self.repo.referencing_users(id).await?;
        if !users.is_empty() {
            tracing::warn!(resource = Self::name(), id, users = users.len(), "Rejected: still referenced");
            return Err(AppError::InUse(Self::name().to_string()));
        }

        let snapshot = self.get(id).await?;
        self.repo.soft_delete(id).await?;

        tracing::info!(resource = Self::name(), id, "Soft-deleted");
        Ok(snapshot)
    }

    /// Bring row `id` back. Unknown or already active ids are a no-op.
    pub async fn restore(&self, id: i32) -> AppResult<()> {
        let restored = self
            .repo
            .restore(id)
            .await
            .map_err(|e| e.into_conflict(Self::name()))?;

        if restored == 0 {
            tracing::debug!(resource = Self::name(), id, "Nothing to restore");
        } else {
            tracing::info!(resource = Self::name(), id, "Restored");
        }
        Ok(())
    }
}
