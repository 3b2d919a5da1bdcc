//! Company service.

use async_trait::async_trait;

use super::Lifecycle;
use crate::domain::{Company, CompanyInput};
use crate::errors::AppResult;
use crate::infra::CompanyRepository;

#[async_trait]
pub trait CompanyService: Send + Sync {
    async fn list_companies(&self) -> AppResult<Vec<Company>>;

    async fn get_company(&self, id: i32) -> AppResult<Company>;

    async fn create_company(&self, body: CompanyInput) -> AppResult<Company>;

    async fn update_company(&self, id: i32, body: CompanyInput) -> AppResult<Company>;

    /// Soft delete unless a user still belongs to the company
    async fn delete_company(&self, id: i32) -> AppResult<Company>;

    /// Clear the deletion mark; unknown ids are ignored
    async fn restore_company(&self, id: i32) -> AppResult<()>;

    async fn list_deleted_companies(&self) -> AppResult<Vec<Company>>;
}

pub struct CompanyManager {
    companies: Lifecycle<dyn CompanyRepository>,
}

impl CompanyManager {
    pub fn new(companies: Lifecycle<dyn CompanyRepository>) -> Self {
        Self { companies }
    }
}

#[async_trait]
impl CompanyService for CompanyManager {
    async fn list_companies(&self) -> AppResult<Vec<Company>> {
        self.companies.list().await
    }

    async fn get_company(&self, id: i32) -> AppResult<Company> {
        self.companies.get(id).await
    }

    async fn create_company(&self, body: CompanyInput) -> AppResult<Company> {
        let key = body.company_name.clone();
        self.companies.create(key, move || Ok(body)).await
    }

    async fn update_company(&self, id: i32, body: CompanyInput) -> AppResult<Company> {
        let key = body.company_name.clone();
        self.companies.update(id, move |_| key, move || Ok(body)).await
    }

    async fn delete_company(&self, id: i32) -> AppResult<Company> {
        self.companies.delete(id).await
    }

    async fn restore_company(&self, id: i32) -> AppResult<()> {
        self.companies.restore(id).await
    }

    async fn list_deleted_companies(&self) -> AppResult<Vec<Company>> {
        self.companies.list_deleted().await
    }
}
