use crate::domain::category::DeleteCategoryOutcome;
use crate::domain::types::CategoryId;
use crate::dto::categories::{CategoryDto, CategoryVideosResponse};
use crate::dto::videos::VideoDto;
use crate::forms::categories::{AddCategoryFormPayload, UpdateCategoryFormPayload};
use crate::repository::{CategoryReader, CategoryWriter, VideoListQuery, VideoReader};

use super::{ServiceError, ServiceResult};

pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn show_category<R>(category_id: i32, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_category(category_id) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a category and return it as stored.
pub fn add_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    let category_id = match repo.create_category(&payload.into_new_category()) {
        Ok(category_id) => category_id,
        Err(e) => {
            log::error!("Failed to create category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    show_category(category_id.get(), repo)
}

/// Overwrite name, description and color of an existing category.
pub fn update_category<R>(
    category_id: i32,
    payload: UpdateCategoryFormPayload,
    repo: &R,
) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.update_category(category_id, &payload.into_update()) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a category that no video refers to.
///
/// Returns the confirmation message; a category with videos yields
/// [`ServiceError::Conflict`] carrying the refusal message.
pub fn delete_category<R>(category_id: i32, repo: &R) -> ServiceResult<&'static str>
where
    R: CategoryWriter,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_category(category_id) {
        Ok(outcome @ DeleteCategoryOutcome::Deleted) => Ok(outcome.message()),
        Ok(outcome @ DeleteCategoryOutcome::HasVideos) => {
            Err(ServiceError::Conflict(outcome.message().to_string()))
        }
        Ok(DeleteCategoryOutcome::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// A category with its newest videos.
pub fn show_category_videos<R>(category_id: i32, repo: &R) -> ServiceResult<CategoryVideosResponse>
where
    R: CategoryReader + VideoReader,
{
    let category = show_category(category_id, repo)?;
    let category_id = CategoryId::new(category.id).map_err(|_| ServiceError::Internal)?;

    match repo.list_videos(VideoListQuery::default().category(category_id)) {
        Ok(videos) => Ok(CategoryVideosResponse::new(
            category,
            videos.into_iter().map(VideoDto::from).collect(),
        )),
        Err(e) => {
            log::error!("Failed to list category videos: {e}");
            Err(ServiceError::Internal)
        }
    }
}
