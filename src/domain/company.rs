//! Company domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Resource;
use crate::config::RESOURCE_COMPANY;

/// Company domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Company {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Acme Corp")]
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for Company {
    type Key = String;

    const NAME: &'static str = RESOURCE_COMPANY;

    fn id(&self) -> i32 {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn natural_key(&self) -> String {
        self.company_name.clone()
    }
}

/// Body for both create and update; the name is always required.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CompanyInput {
    #[validate(length(min = 1, message = "company_name is required"))]
    #[schema(example = "Acme Corp")]
    pub company_name: String,
}
