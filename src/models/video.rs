use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{CategoryId, TypeConstraintError, VideoTitle};
use crate::domain::video::{NewVideo as DomainNewVideo, Video as DomainVideo};

/// Diesel model representing the `videos` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::videos)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<i32>,
    pub difficulty: String,
    pub category_id: Option<i32>,
    pub views: i32,
    pub likes: i32,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Video`]. Counters and `created_at` use column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::videos)]
pub struct NewVideo {
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub difficulty: String,
    pub category_id: Option<i32>,
}

impl TryFrom<Video> for DomainVideo {
    type Error = TypeConstraintError;

    fn try_from(video: Video) -> Result<Self, Self::Error> {
        Ok(Self {
            id: video.id.try_into()?,
            title: VideoTitle::new(video.title)?,
            description: video.description,
            video_url: video.video_url,
            thumbnail_url: video.thumbnail_url,
            duration: video.duration,
            difficulty: video.difficulty.try_into()?,
            category_id: video.category_id.map(CategoryId::new).transpose()?,
            views: video.views.try_into()?,
            likes: video.likes.try_into()?,
            created_at: video.created_at,
        })
    }
}

impl From<DomainNewVideo> for NewVideo {
    fn from(video: DomainNewVideo) -> Self {
        Self {
            title: video.title.into_inner(),
            description: video.description,
            video_url: video.video_url,
            difficulty: video.difficulty.into(),
            category_id: video.category_id.map(CategoryId::get),
        }
    }
}
