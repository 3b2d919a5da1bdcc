//! Company store with soft delete support.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::base::{self, SoftDeleteRepository};
use super::entities::company::{self, ActiveModel, Entity as CompanyEntity};
use super::entities::user;
use super::user_repository::users_referencing;
use crate::config::RESOURCE_COMPANY;
use crate::domain::{Company, CompanyInput, User};
use crate::errors::{AppResult, OptionExt};

/// Store contract for companies; the company name is the natural key.
pub trait CompanyRepository:
    SoftDeleteRepository<Entity = Company, Create = CompanyInput, Update = CompanyInput>
{
}

impl<T> CompanyRepository for T where
    T: SoftDeleteRepository<Entity = Company, Create = CompanyInput, Update = CompanyInput>
        + ?Sized
{
}

/// SeaORM-backed company store
pub struct CompanyStore {
    db: DatabaseConnection,
}

impl CompanyStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SoftDeleteRepository for CompanyStore {
    type Entity = Company;
    type Create = CompanyInput;
    type Update = CompanyInput;

    async fn list(&self) -> AppResult<Vec<Company>> {
        let models = base::list_active::<CompanyEntity>(&self.db).await?;
        Ok(models.into_iter().map(Company::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Company>> {
        let model = base::find_active::<CompanyEntity>(&self.db, id).await?;
        Ok(model.map(Company::from))
    }

    async fn find_active_by_key(&self, name: &String) -> AppResult<Vec<Company>> {
        let models = CompanyEntity::find()
            .filter(company::Column::CompanyName.eq(name.as_str()))
            .filter(company::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Company::from).collect())
    }

    async fn list_deleted(&self) -> AppResult<Vec<Company>> {
        let models = base::list_deleted::<CompanyEntity>(&self.db).await?;
        Ok(models.into_iter().map(Company::from).collect())
    }

    async fn create(&self, input: CompanyInput) -> AppResult<Company> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            company_name: Set(input.company_name),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Company::from(model))
    }

    async fn update(&self, id: i32, input: CompanyInput) -> AppResult<Company> {
        let company = base::find_active::<CompanyEntity>(&self.db, id)
            .await?
            .ok_or_not_found(RESOURCE_COMPANY)?;

        let mut active: ActiveModel = company.into();
        active.company_name = Set(input.company_name);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Company::from(model))
    }

    async fn soft_delete(&self, id: i32) -> AppResult<u64> {
        base::mark_deleted::<CompanyEntity>(&self.db, id).await
    }

    async fn restore(&self, id: i32) -> AppResult<u64> {
        base::clear_deleted::<CompanyEntity>(&self.db, id).await
    }

    async fn referencing_users(&self, id: i32) -> AppResult<Vec<User>> {
        users_referencing(&self.db, user::Column::CompanyId, id).await
    }
}
