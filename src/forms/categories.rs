use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{CategoryUpdate, NewCategory};
use crate::domain::types::{CategoryName, TypeConstraintError};
use crate::forms::empty_text;

/// JSON body of `POST /categories`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default = "empty_text")]
    pub description: Option<String>,
    #[serde(default = "empty_text")]
    #[validate(length(max = 20))]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryFormPayload {
    pub name: CategoryName,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl AddCategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name,
            description: self.description,
            color: self.color,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddCategoryFormError {
    #[error("Add category form validation failed: {0}")]
    Validation(String),
    #[error("Add category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddCategoryForm> for AddCategoryFormPayload {
    type Error = AddCategoryFormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.name)?,
            description: value.description,
            color: value.color,
        })
    }
}

/// JSON body of `PUT /categories/{id}`.
///
/// Omitted `description` and `color` clear the stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryFormPayload {
    pub name: CategoryName,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl UpdateCategoryFormPayload {
    pub fn into_update(self) -> CategoryUpdate {
        CategoryUpdate {
            name: self.name,
            description: self.description,
            color: self.color,
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateCategoryFormError {
    #[error("Update category form validation failed: {0}")]
    Validation(String),
    #[error("Update category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateCategoryForm> for UpdateCategoryFormPayload {
    type Error = UpdateCategoryFormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.name)?,
            description: value.description,
            color: value.color,
        })
    }
}
