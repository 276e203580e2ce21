use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, CategoryUpdate as DomainCategoryUpdate,
    NewCategory as DomainNewCategory,
};
use crate::domain::types::{CategoryName, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Changeset overwriting every mutable column, `None` included.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories, treat_none_as_null = true)]
pub struct CategoryChangeset {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::new(category.name)?,
            description: category.description,
            icon: category.icon,
            color: category.color,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            name: category.name.into_inner(),
            description: category.description,
            color: category.color,
        }
    }
}

impl From<DomainCategoryUpdate> for CategoryChangeset {
    fn from(update: DomainCategoryUpdate) -> Self {
        Self {
            name: update.name.into_inner(),
            description: update.description,
            color: update.color,
        }
    }
}
