//! Error conversion glue between form, domain and service errors.
//!
//! Kept out of the domain and form modules so that neither depends on the
//! service error type.

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::{AddCategoryFormError, UpdateCategoryFormError};
use crate::forms::videos::VideoFormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<VideoFormError> for ServiceError {
    fn from(val: VideoFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddCategoryFormError> for ServiceError {
    fn from(val: AddCategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateCategoryFormError> for ServiceError {
    fn from(val: UpdateCategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
