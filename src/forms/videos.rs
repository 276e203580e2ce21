use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryId, Difficulty, TypeConstraintError, VideoTitle};
use crate::domain::video::NewVideo;
use crate::forms::empty_text;
use crate::repository::{DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, VideoListQuery};

/// Title given to uploads that do not name themselves.
pub const DEFAULT_UPLOAD_TITLE: &str = "Untitled";

fn default_list_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}

fn default_search_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}

fn default_difficulty() -> Option<String> {
    Some(Difficulty::default().as_str().to_string())
}

fn default_upload_title() -> String {
    DEFAULT_UPLOAD_TITLE.to_string()
}

fn optional_category(category_id: Option<i32>) -> Result<Option<CategoryId>, TypeConstraintError> {
    category_id.map(CategoryId::new).transpose()
}

/// Errors raised while turning video request parameters into payloads.
#[derive(Debug, Error)]
pub enum VideoFormError {
    #[error("Video form validation failed: {0}")]
    Validation(String),
    #[error("Video form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Uploaded file has no usable name")]
    MissingFileName,
}

impl From<ValidationErrors> for VideoFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for VideoFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Query string of `GET /videos`.
#[derive(Debug, Deserialize, Validate)]
pub struct ListVideosQuery {
    #[serde(default = "default_list_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,
    pub category_id: Option<i32>,
}

impl TryFrom<ListVideosQuery> for VideoListQuery {
    type Error = VideoFormError;

    fn try_from(value: ListVideosQuery) -> Result<Self, Self::Error> {
        value.validate()?;

        let mut query = VideoListQuery::new(value.limit);
        if let Some(category_id) = optional_category(value.category_id)? {
            query = query.category(category_id);
        }
        Ok(query)
    }
}

/// Query string of `GET /videos/search`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchVideosQuery {
    #[validate(length(min = 1, max = 200))]
    pub q: String,
    #[serde(default = "default_search_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,
}

impl TryFrom<SearchVideosQuery> for VideoListQuery {
    type Error = VideoFormError;

    fn try_from(value: SearchVideosQuery) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(VideoListQuery::new(value.limit).search(value.q))
    }
}

/// JSON body of `POST /videos`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddVideoForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub category_id: Option<i32>,
    #[serde(default = "empty_text")]
    pub description: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddVideoFormPayload {
    pub title: VideoTitle,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub difficulty: Difficulty,
}

impl AddVideoFormPayload {
    pub fn into_new_video(self, video_url: impl Into<String>) -> NewVideo {
        NewVideo {
            title: self.title,
            video_url: video_url.into(),
            category_id: self.category_id,
            description: self.description,
            difficulty: self.difficulty,
        }
    }
}

impl TryFrom<AddVideoForm> for AddVideoFormPayload {
    type Error = VideoFormError;

    fn try_from(value: AddVideoForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let difficulty = match value.difficulty {
            Some(difficulty) => Difficulty::try_from(difficulty)?,
            None => Difficulty::default(),
        };

        Ok(Self {
            title: VideoTitle::new(value.title)?,
            category_id: optional_category(value.category_id)?,
            description: value.description,
            difficulty,
        })
    }
}

/// Query string of `POST /videos/upload`.
#[derive(Debug, Deserialize, Validate)]
pub struct UploadVideoQuery {
    #[serde(default = "default_upload_title")]
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub category_id: Option<i32>,
}

/// Multipart body of `POST /videos/upload`.
#[derive(MultipartForm)]
pub struct UploadVideoForm {
    #[multipart(limit = "500MB")]
    pub file: TempFile,
}

pub struct UploadVideoFormPayload {
    pub title: VideoTitle,
    pub category_id: Option<CategoryId>,
    /// Client-supplied name of the uploaded file.
    pub file_name: String,
    pub file: TempFile,
}

impl UploadVideoFormPayload {
    pub fn new(query: UploadVideoQuery, form: UploadVideoForm) -> Result<Self, VideoFormError> {
        query.validate()?;

        let file_name = form
            .file
            .file_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .ok_or(VideoFormError::MissingFileName)?;

        Ok(Self {
            title: VideoTitle::new(query.title)?,
            category_id: optional_category(query.category_id)?,
            file_name,
            file: form.file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_uses_defaults() {
        let params = ListVideosQuery {
            limit: default_list_limit(),
            category_id: None,
        };
        let query = VideoListQuery::try_from(params).unwrap();
        assert_eq!(query.limit, 50);
        assert_eq!(query.category_id, None);
    }

    #[test]
    fn list_query_rejects_out_of_range_limit() {
        let params = ListVideosQuery {
            limit: 101,
            category_id: None,
        };
        assert!(matches!(
            VideoListQuery::try_from(params),
            Err(VideoFormError::Validation(_))
        ));
    }

    #[test]
    fn list_query_rejects_non_positive_category() {
        let params = ListVideosQuery {
            limit: 10,
            category_id: Some(0),
        };
        assert!(matches!(
            VideoListQuery::try_from(params),
            Err(VideoFormError::TypeConstraint(_))
        ));
    }

    #[test]
    fn search_query_requires_term() {
        let params = SearchVideosQuery {
            q: String::new(),
            limit: 20,
        };
        assert!(VideoListQuery::try_from(params).is_err());
    }

    #[test]
    fn add_form_defaults_to_beginner_with_empty_description() {
        let form: AddVideoForm = serde_json::from_str(r#"{"title": "Greetings"}"#).unwrap();
        let payload = AddVideoFormPayload::try_from(form).unwrap();

        assert_eq!(payload.difficulty, Difficulty::Beginner);
        assert_eq!(payload.description.as_deref(), Some(""));
        assert_eq!(payload.category_id, None);

        let video = payload.into_new_video("");
        assert_eq!(video.video_url, "");
    }

    #[test]
    fn add_form_rejects_unknown_difficulty() {
        let form: AddVideoForm =
            serde_json::from_str(r#"{"title": "Greetings", "difficulty": "expert"}"#).unwrap();
        assert!(matches!(
            AddVideoFormPayload::try_from(form),
            Err(VideoFormError::TypeConstraint(_))
        ));
    }
}
