//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::NaiveDateTime;
use diesel::prelude::*;
use tempfile::NamedTempFile;
use ugsl_videos::db::{ConnectionProvider, DatabaseConfig, run_pending_migrations};
use ugsl_videos::repository::DieselRepository;
use ugsl_videos::schema::videos;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    provider: ConnectionProvider,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let database_url = tempfile
            .path()
            .to_str()
            .expect("temp path should be valid UTF-8")
            .to_string();
        let provider = ConnectionProvider::new(DatabaseConfig::new(database_url));
        run_pending_migrations(&provider).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            provider,
        }
    }

    pub fn provider(&self) -> ConnectionProvider {
        self.provider.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.provider())
    }

    /// Insert a video row with a fixed creation time and return its id.
    pub fn insert_video_at(
        &self,
        title: &str,
        description: &str,
        category_id: Option<i32>,
        created_at: &str,
    ) -> i32 {
        let created_at = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%d %H:%M:%S")
            .expect("valid timestamp");
        let mut conn = self.provider.connect().expect("should open connection");
        diesel::insert_into(videos::table)
            .values((
                videos::title.eq(title),
                videos::description.eq(description),
                videos::category_id.eq(category_id),
                videos::created_at.eq(created_at),
            ))
            .returning(videos::id)
            .get_result(&mut conn)
            .expect("should insert video")
    }
}
