use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::{DbConnection, unicode_lower};
use crate::domain::types::VideoId;
use crate::domain::video::{NewVideo, Video};
use crate::models::video::{NewVideo as DbNewVideo, Video as DbVideo};
use crate::repository::{
    DieselRepository, RepositoryResult, VideoListQuery, VideoReader, VideoWriter,
};

const LIKE_ESCAPE: char = '\\';

/// Build a `LIKE` pattern matching `term` literally anywhere in the column.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn load_videos(
    conn: &mut DbConnection,
    query: &VideoListQuery,
) -> RepositoryResult<Vec<Video>> {
    use crate::schema::videos;

    let mut items = videos::table.into_boxed::<Sqlite>();

    if let Some(category_id) = query.category_id {
        items = items.filter(videos::category_id.eq(category_id.get()));
    }

    if let Some(search) = &query.search {
        let pattern = contains_pattern(&search.to_lowercase());
        items = items.filter(
            unicode_lower(videos::title.nullable())
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(unicode_lower(videos::description)
                    .like(pattern)
                    .escape(LIKE_ESCAPE)),
        );
    }

    let items = items
        .order(videos::created_at.desc())
        .limit(query.limit)
        .load::<DbVideo>(conn)?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<Video>, _>>()?;

    Ok(items)
}

impl VideoReader for DieselRepository {
    fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<Vec<Video>> {
        let query = VideoListQuery {
            search: None,
            ..query
        };
        self.provider()
            .with_transaction(|conn| load_videos(conn, &query))
    }

    fn search_videos(&self, query: VideoListQuery) -> RepositoryResult<Vec<Video>> {
        self.provider()
            .with_transaction(|conn| load_videos(conn, &query))
    }

    fn find_video(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        use crate::schema::videos;

        self.provider().with_transaction(|conn| {
            let video = videos::table
                .find(id.get())
                .first::<DbVideo>(conn)
                .optional()?;

            Ok(video.map(TryInto::try_into).transpose()?)
        })
    }
}

impl VideoWriter for DieselRepository {
    fn get_video(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        use crate::schema::videos;

        self.provider().with_transaction(|conn| {
            let Some(video) = videos::table
                .find(id.get())
                .first::<DbVideo>(conn)
                .optional()?
            else {
                return Ok(None);
            };

            diesel::update(videos::table.find(id.get()))
                .set(videos::views.eq(videos::views + 1))
                .execute(conn)?;

            let mut video: Video = video.try_into()?;
            video.views = video.views.incremented();
            Ok(Some(video))
        })
    }

    fn create_video(&self, video: &NewVideo) -> RepositoryResult<VideoId> {
        use crate::schema::videos;

        let db_video: DbNewVideo = video.clone().into();

        self.provider().with_transaction(|conn| {
            let id = diesel::insert_into(videos::table)
                .values(&db_video)
                .returning(videos::id)
                .get_result::<i32>(conn)?;

            Ok(VideoId::new(id)?)
        })
    }

    fn like_video(&self, id: VideoId) -> RepositoryResult<bool> {
        use crate::schema::videos;

        self.provider().with_transaction(|conn| {
            let affected = diesel::update(videos::table.find(id.get()))
                .set(videos::likes.eq(videos::likes + 1))
                .execute(conn)?;

            Ok(affected > 0)
        })
    }
}
