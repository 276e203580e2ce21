use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, Difficulty, LikeCount, VideoId, VideoTitle, ViewCount};

/// A sign language lesson video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: VideoId,
    pub title: VideoTitle,
    pub description: Option<String>,
    /// Location of the media file; empty until a file is attached.
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    /// Length in seconds.
    pub duration: Option<i32>,
    pub difficulty: Difficulty,
    pub category_id: Option<CategoryId>,
    pub views: ViewCount,
    pub likes: LikeCount,
    /// Assigned by the database on insert.
    pub created_at: NaiveDateTime,
}

/// Information required to create a new [`Video`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVideo {
    pub title: VideoTitle,
    pub video_url: String,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub difficulty: Difficulty,
}

impl NewVideo {
    /// A beginner video with no description.
    pub fn new(title: VideoTitle, video_url: impl Into<String>) -> Self {
        Self {
            title,
            video_url: video_url.into(),
            category_id: None,
            description: None,
            difficulty: Difficulty::default(),
        }
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}
