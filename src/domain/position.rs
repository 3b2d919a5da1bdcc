//! Position domain entity.
//!
//! A position is keyed by its name *and* its code: another active row
//! holding either value is a conflict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Resource;
use crate::config::RESOURCE_POSITION;

/// Position domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Position {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Backend Engineer")]
    pub position_name: String,
    #[schema(example = "ENG-BE")]
    pub position_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Natural key of a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionKey {
    pub name: String,
    pub code: String,
}

impl Resource for Position {
    type Key = PositionKey;

    const NAME: &'static str = RESOURCE_POSITION;

    fn id(&self) -> i32 {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn natural_key(&self) -> PositionKey {
        PositionKey {
            name: self.position_name.clone(),
            code: self.position_code.clone(),
        }
    }

    fn holds_key(&self, key: &PositionKey) -> bool {
        self.position_name == key.name || self.position_code == key.code
    }
}

/// Position creation body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePosition {
    #[validate(length(min = 1, message = "position_name is required"))]
    #[schema(example = "Backend Engineer")]
    pub position_name: String,
    #[validate(length(min = 1, message = "position_code is required"))]
    #[schema(example = "ENG-BE")]
    pub position_code: String,
}

impl CreatePosition {
    pub fn key(&self) -> PositionKey {
        PositionKey {
            name: self.position_name.clone(),
            code: self.position_code.clone(),
        }
    }
}

/// Position update body; omitted or empty fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePosition {
    #[schema(example = "Staff Engineer")]
    pub position_name: Option<String>,
    #[schema(example = "ENG-STAFF")]
    pub position_code: Option<String>,
}

impl UpdatePosition {
    /// Drop empty strings so they read as "unchanged".
    pub fn normalized(self) -> Self {
        Self {
            position_name: self.position_name.filter(|s| !s.is_empty()),
            position_code: self.position_code.filter(|s| !s.is_empty()),
        }
    }

    /// Key the position will hold once these changes are applied.
    pub fn key_after(&self, current: &Position) -> PositionKey {
        PositionKey {
            name: self
                .position_name
                .clone()
                .unwrap_or_else(|| current.position_name.clone()),
            code: self
                .position_code
                .clone()
                .unwrap_or_else(|| current.position_code.clone()),
        }
    }
}
