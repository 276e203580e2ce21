use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::video::Video;

/// Format a timestamp as ISO 8601, e.g. `2024-03-05T10:15:30` or
/// `2024-03-05T10:15:30.250`. Fractional seconds are omitted when zero.
pub fn to_iso8601(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Video as returned by the API, with `created_at` rendered as a string.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoDto {
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
    pub created_at: String,
}

/// Convert a video for transport without touching the source record.
pub fn serialize_video(video: &Video) -> VideoDto {
    VideoDto {
        id: video.id.get(),
        title: video.title.as_str().to_string(),
        description: video.description.clone(),
        video_url: video.video_url.clone(),
        thumbnail_url: video.thumbnail_url.clone(),
        duration: video.duration,
        difficulty: video.difficulty.as_str().to_string(),
        category_id: video.category_id.map(|id| id.get()),
        views: video.views.get(),
        likes: video.likes.get(),
        created_at: to_iso8601(video.created_at),
    }
}

impl From<Video> for VideoDto {
    fn from(value: Video) -> Self {
        serialize_video(&value)
    }
}

/// `{count, data}` listing of videos.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoListResponse {
    pub count: usize,
    pub data: Vec<VideoDto>,
}

impl From<Vec<VideoDto>> for VideoListResponse {
    fn from(data: Vec<VideoDto>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Result of a file upload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UploadedVideoDto {
    pub success: bool,
    pub id: i32,
    pub video_url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CategoryId, Difficulty, LikeCount, VideoId, VideoTitle, ViewCount,
    };
    use chrono::NaiveDate;

    fn sample_video(created_at: NaiveDateTime) -> Video {
        Video {
            id: VideoId::new(7).unwrap(),
            title: VideoTitle::new("Family Members").unwrap(),
            description: Some("Signs for family relationships".into()),
            video_url: "/media/family.mp4".into(),
            thumbnail_url: None,
            duration: Some(95),
            difficulty: Difficulty::Intermediate,
            category_id: Some(CategoryId::new(1).unwrap()),
            views: ViewCount::new(4).unwrap(),
            likes: LikeCount::new(2).unwrap(),
            created_at,
        }
    }

    #[test]
    fn renders_created_at_as_iso8601() {
        let created_at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(10, 15, 30)
            .unwrap();
        assert_eq!(to_iso8601(created_at), "2024-03-05T10:15:30");

        let with_millis = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_milli_opt(10, 15, 30, 250)
            .unwrap();
        assert_eq!(to_iso8601(with_millis), "2024-03-05T10:15:30.250");
    }

    #[test]
    fn passes_other_fields_through() {
        let created_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let video = sample_video(created_at);
        let dto = serialize_video(&video);

        assert_eq!(dto.id, 7);
        assert_eq!(dto.title, "Family Members");
        assert_eq!(dto.difficulty, "intermediate");
        assert_eq!(dto.category_id, Some(1));
        assert_eq!((dto.views, dto.likes), (4, 2));
        assert_eq!(dto.duration, Some(95));
        assert_eq!(dto.created_at, "2024-01-01T00:00:00");
        // Source record is left as it was.
        assert_eq!(video.created_at, created_at);
    }
}
