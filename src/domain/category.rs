use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

/// Message returned when a category is removed.
pub const CATEGORY_DELETED_MESSAGE: &str = "Category deleted successfully";
/// Message returned when a category still has linked videos.
pub const CATEGORY_HAS_VIDEOS_MESSAGE: &str = "Cannot delete: This category still has videos.";
/// Message returned when the category to delete does not exist.
pub const CATEGORY_NOT_FOUND_MESSAGE: &str = "Category not found";

/// A grouping of videos, e.g. "Basic Communication".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<String>,
    /// Icon hint. Only populated by seed data.
    pub icon: Option<String>,
    /// Display colour hint, e.g. `#2196F3`.
    pub color: Option<String>,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Replacement values for the mutable fields of a [`Category`].
///
/// Every field is written, so `None` clears the stored value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryUpdate {
    pub name: CategoryName,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Result of a guarded category deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCategoryOutcome {
    /// The category row was removed.
    Deleted,
    /// Videos still reference the category; nothing was changed.
    HasVideos,
    /// No category with the requested id exists.
    NotFound,
}

impl DeleteCategoryOutcome {
    /// Whether the category was removed.
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Human-readable description of the outcome.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Deleted => CATEGORY_DELETED_MESSAGE,
            Self::HasVideos => CATEGORY_HAS_VIDEOS_MESSAGE,
            Self::NotFound => CATEGORY_NOT_FOUND_MESSAGE,
        }
    }

    /// Split into the `(success, message)` pair reported to clients.
    pub const fn into_parts(self) -> (bool, &'static str) {
        (self.is_success(), self.message())
    }
}
