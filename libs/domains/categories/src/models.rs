use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Category entity - a grouping of catalog products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier, assigned by the application service on save
    pub id: i32,
    /// Category name
    pub name: String,
    /// Category description
    pub description: String,
}

/// Inbound payload for creating or editing a category.
///
/// Every field carries a serde default so a missing field surfaces as a
/// field-level validation error rather than a body rejection.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CategoryData {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
}

impl Category {
    /// Build an unsaved entity from the inbound payload. The application
    /// service assigns the definitive id on save.
    pub fn from_data(data: CategoryData) -> Self {
        Self {
            id: 0,
            name: data.name,
            description: data.description,
        }
    }

    /// Build an entity carrying an externally supplied id, used by the
    /// edit path where the id arrives outside the body.
    pub fn from_data_with_id(id: i32, data: CategoryData) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
        }
    }
}
