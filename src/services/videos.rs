use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::NewVideo;
use crate::dto::videos::{UploadedVideoDto, VideoDto};
use crate::forms::videos::{
    AddVideoFormPayload, ListVideosQuery, SearchVideosQuery, UploadVideoFormPayload,
};
use crate::media::{MediaError, MediaStorage};
use crate::repository::{CategoryReader, VideoListQuery, VideoReader, VideoWriter};

use super::{ServiceError, ServiceResult};

/// Reject references to categories that do not exist.
fn ensure_category_exists<R>(category_id: Option<CategoryId>, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader,
{
    let Some(category_id) = category_id else {
        return Ok(());
    };

    match repo.get_category(category_id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::Form(format!(
            "Category {category_id} does not exist"
        ))),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Newest videos first, optionally restricted to one category.
pub fn show_videos<R>(params: ListVideosQuery, repo: &R) -> ServiceResult<Vec<VideoDto>>
where
    R: VideoReader,
{
    let query = VideoListQuery::try_from(params)?;

    match repo.list_videos(query) {
        Ok(videos) => Ok(videos.into_iter().map(VideoDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list videos: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn search_videos<R>(params: SearchVideosQuery, repo: &R) -> ServiceResult<Vec<VideoDto>>
where
    R: VideoReader,
{
    let query = VideoListQuery::try_from(params)?;

    match repo.search_videos(query) {
        Ok(videos) => Ok(videos.into_iter().map(VideoDto::from).collect()),
        Err(e) => {
            log::error!("Failed to search videos: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetch a video for playback. Every successful call counts one view.
pub fn show_video<R>(video_id: i32, repo: &R) -> ServiceResult<VideoDto>
where
    R: VideoWriter,
{
    let video_id = VideoId::new(video_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_video(video_id) {
        Ok(Some(video)) => Ok(video.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a video record without media; `video_url` starts empty.
pub fn add_video<R>(payload: AddVideoFormPayload, repo: &R) -> ServiceResult<VideoDto>
where
    R: CategoryReader + VideoReader + VideoWriter,
{
    ensure_category_exists(payload.category_id, repo)?;

    let video_id = match repo.create_video(&payload.into_new_video("")) {
        Ok(video_id) => video_id,
        Err(e) => {
            log::error!("Failed to create video: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.find_video(video_id) {
        Ok(Some(video)) => Ok(video.into()),
        Ok(None) => {
            log::error!("Video {video_id} vanished right after creation");
            Err(ServiceError::Internal)
        }
        Err(e) => {
            log::error!("Failed to read created video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Store an uploaded file and create a video pointing at it.
pub fn upload_video<R>(
    payload: UploadVideoFormPayload,
    storage: &MediaStorage,
    repo: &R,
) -> ServiceResult<UploadedVideoDto>
where
    R: CategoryReader + VideoWriter,
{
    ensure_category_exists(payload.category_id, repo)?;

    let video_url = match storage.store(&payload.file_name, payload.file.file.path()) {
        Ok(url) => url,
        Err(e @ MediaError::InvalidFileName(_)) => return Err(ServiceError::Form(e.to_string())),
        Err(e) => {
            log::error!("Failed to store uploaded video {:?}: {e}", payload.file_name);
            return Err(ServiceError::Internal);
        }
    };

    let mut new_video = NewVideo::new(payload.title, video_url.clone());
    if let Some(category_id) = payload.category_id {
        new_video = new_video.category(category_id);
    }

    match repo.create_video(&new_video) {
        Ok(video_id) => {
            log::info!("Stored upload {video_url} as video {video_id}");
            Ok(UploadedVideoDto {
                success: true,
                id: video_id.get(),
                video_url,
            })
        }
        Err(e) => {
            log::error!("Failed to create uploaded video: {e}");
            if let Err(e) = storage.remove(&payload.file_name) {
                log::warn!("Failed to remove orphaned upload {video_url}: {e}");
            }
            Err(ServiceError::Internal)
        }
    }
}

pub fn like_video<R>(video_id: i32, repo: &R) -> ServiceResult<()>
where
    R: VideoWriter,
{
    let video_id = VideoId::new(video_id).map_err(|_| ServiceError::NotFound)?;

    match repo.like_video(video_id) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to like video: {e}");
            Err(ServiceError::Internal)
        }
    }
}
