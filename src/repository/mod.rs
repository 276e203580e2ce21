use crate::db::ConnectionProvider;
use crate::domain::category::{Category, CategoryUpdate, DeleteCategoryOutcome, NewCategory};
use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::{NewVideo, Video};

pub mod category;
pub mod errors;
pub mod video;

pub use errors::{RepositoryError, RepositoryResult};

/// Number of videos returned by a listing when no limit is given.
pub const DEFAULT_LIST_LIMIT: i64 = 50;
/// Number of videos returned by a search when no limit is given.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
/// Upper bound accepted for any listing limit.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Repository implementation backed by Diesel and SQLite.
///
/// Holds only connection parameters, so it is cheap to clone and can be
/// shared between handlers. Every call opens its own connection.
#[derive(Clone, Debug)]
pub struct DieselRepository {
    provider: ConnectionProvider,
}

impl DieselRepository {
    /// Create a new repository on top of a connection provider.
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &ConnectionProvider {
        &self.provider
    }
}

/// Query parameters used when listing or searching videos.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoListQuery {
    /// Only videos in this category.
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring matched against title and description.
    pub search: Option<String>,
    /// Maximum number of rows, clamped to `1..=MAX_LIST_LIMIT`.
    pub limit: i64,
}

impl Default for VideoListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_LIMIT)
    }
}

impl VideoListQuery {
    pub fn new(limit: i64) -> Self {
        Self {
            category_id: None,
            search: None,
            limit: limit.clamp(1, MAX_LIST_LIMIT),
        }
    }
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Database health probe.
pub trait HealthReader {
    /// Succeeds when the database answers a trivial query.
    fn ping(&self) -> RepositoryResult<()>;
}

/// Read-only operations for video entities.
pub trait VideoReader {
    /// List videos newest first, optionally restricted to a category.
    fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<Vec<Video>>;
    /// Videos whose title or description contains the search term, newest first.
    fn search_videos(&self, query: VideoListQuery) -> RepositoryResult<Vec<Video>>;
    /// Retrieve a video without counting a view.
    fn find_video(&self, id: VideoId) -> RepositoryResult<Option<Video>>;
}

/// Operations that change video rows.
pub trait VideoWriter {
    /// Retrieve a video and count one view for it.
    ///
    /// The returned record already includes the new view.
    fn get_video(&self, id: VideoId) -> RepositoryResult<Option<Video>>;
    /// Persist a new video and return its generated id.
    fn create_video(&self, video: &NewVideo) -> RepositoryResult<VideoId>;
    /// Add one like. Returns `false` when no such video exists.
    fn like_video(&self, id: VideoId) -> RepositoryResult<bool>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// All categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return its generated id.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<CategoryId>;
    /// Overwrite name, description and color. Returns `false` when no row matched.
    fn update_category(&self, id: CategoryId, update: &CategoryUpdate) -> RepositoryResult<bool>;
    /// Delete a category unless videos still reference it.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<DeleteCategoryOutcome>;
}

impl HealthReader for DieselRepository {
    fn ping(&self) -> RepositoryResult<()> {
        self.provider.ping()
    }
}
