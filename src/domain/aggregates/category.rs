//! Category entity
//!
//! Categories form a tree through `parent_id` alone; the hierarchy is a
//! derived view over the flat collection (see [`crate::catalog::tree`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct Category {
    pub id: String,
    /// Unique case-insensitively across all categories; enforced by
    /// [`crate::catalog::validate_category`] before dispatch.
    #[validate(length(min = 1, message = "category name is required"))]
    pub name: String,
    pub description: Option<String>,
    /// Absent means a top-level (root) category.
    pub parent_id: Option<String>,
    pub status: CategoryStatus,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            parent_id: None,
            status: CategoryStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn child_of(name: impl Into<String>, parent_id: impl Into<String>) -> Self {
        let mut category = Self::new(name);
        category.parent_id = Some(parent_id.into());
        category
    }

    pub fn is_root(&self) -> bool { self.parent_id.is_none() }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus { #[default] Active, Inactive }
