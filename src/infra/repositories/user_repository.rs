//! User store with soft delete support.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::base::{self, SoftDeleteRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::RESOURCE_USER;
use crate::domain::{User, UserDraft, UserPatch};
use crate::errors::{AppResult, OptionExt};

/// Store contract for users; email is the natural key.
pub trait UserRepository:
    SoftDeleteRepository<Entity = User, Create = UserDraft, Update = UserPatch>
{
}

impl<T> UserRepository for T where
    T: SoftDeleteRepository<Entity = User, Create = UserDraft, Update = UserPatch> + ?Sized
{
}

/// SeaORM-backed user store
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SoftDeleteRepository for UserStore {
    type Entity = User;
    type Create = UserDraft;
    type Update = UserPatch;

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = base::list_active::<UserEntity>(&self.db).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let model = base::find_active::<UserEntity>(&self.db, id).await?;
        Ok(model.map(User::from))
    }

    async fn find_active_by_key(&self, email: &String) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .filter(user::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn list_deleted(&self) -> AppResult<Vec<User>> {
        let models = base::list_deleted::<UserEntity>(&self.db).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, draft: UserDraft) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            email: Set(draft.email),
            password_hash: Set(draft.password_hash),
            role: Set(draft.role),
            phone_number: Set(draft.phone_number),
            position_name: Set(draft.position_name),
            company: Set(draft.company),
            company_id: Set(draft.company_id),
            position_id: Set(draft.position_id),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<User> {
        let user = base::find_active::<UserEntity>(&self.db, id)
            .await?
            .ok_or_not_found(RESOURCE_USER)?;

        let mut active: ActiveModel = user.into();

        if let Some(first_name) = patch.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(password_hash) = patch.password_hash {
            active.password_hash = Set(password_hash);
        }
        if let Some(role) = patch.role {
            active.role = Set(role);
        }
        if let Some(phone_number) = patch.phone_number {
            active.phone_number = Set(phone_number);
        }
        if let Some(position_name) = patch.position_name {
            active.position_name = Set(position_name);
        }
        if let Some(company) = patch.company {
            active.company = Set(company);
        }
        if patch.company_id.is_some() {
            active.company_id = Set(patch.company_id);
        }
        if patch.position_id.is_some() {
            active.position_id = Set(patch.position_id);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(User::from(model))
    }

    async fn soft_delete(&self, id: i32) -> AppResult<u64> {
        base::mark_deleted::<UserEntity>(&self.db, id).await
    }

    async fn restore(&self, id: i32) -> AppResult<u64> {
        base::clear_deleted::<UserEntity>(&self.db, id).await
    }
}

/// Active users whose `column` points at `id`.
pub(crate) async fn users_referencing(
    db: &DatabaseConnection,
    column: user::Column,
    id: i32,
) -> AppResult<Vec<User>> {
    let models = UserEntity::find()
        .filter(column.eq(id))
        .filter(user::Column::DeletedAt.is_null())
        .all(db)
        .await?;
    Ok(models.into_iter().map(User::from).collect())
}
