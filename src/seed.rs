//! Sample categories and videos for a fresh database.

use diesel::prelude::*;

use crate::db::ConnectionProvider;
use crate::repository::errors::RepositoryResult;
use crate::schema::{categories, videos};

const SAMPLE_CATEGORIES: [(&str, &str, &str, &str); 6] = [
    (
        "Basic Communication",
        "Everyday greetings and expressions",
        "chat",
        "#2196F3",
    ),
    (
        "Educational Signs",
        "Academic and classroom vocabulary",
        "school",
        "#4CAF50",
    ),
    (
        "Health & Emergency",
        "Medical terms and emergency communication",
        "medical_services",
        "#F44336",
    ),
    (
        "Professional Contexts",
        "Workplace and business terminology",
        "business",
        "#FF9800",
    ),
    (
        "Cultural References",
        "Ugandan cultural signs and idioms",
        "language",
        "#9C27B0",
    ),
    (
        "Children's Learning",
        "Age-appropriate signs for young learners",
        "child_care",
        "#00BCD4",
    ),
];

/// Title, description, media file name, index into [`SAMPLE_CATEGORIES`], difficulty.
const SAMPLE_VIDEOS: [(&str, &str, &str, usize, &str); 4] = [
    (
        "Greetings & Introductions",
        "Learn basic greetings in Ugandan Sign Language",
        "greetings.mp4",
        0,
        "beginner",
    ),
    (
        "Family Members",
        "Signs for family relationships",
        "family.mp4",
        0,
        "beginner",
    ),
    (
        "Classroom Vocabulary",
        "Common signs used in educational settings",
        "classroom.mp4",
        1,
        "beginner",
    ),
    (
        "Medical Emergency",
        "Emergency medical communication signs",
        "medical.mp4",
        2,
        "intermediate",
    ),
];

/// Insert the sample data when no category exists yet.
///
/// `media_url` maps a sample file name to the URL it is served under.
/// Returns `true` when rows were inserted. Runs in a single transaction.
pub fn seed_sample_data<F>(provider: &ConnectionProvider, media_url: F) -> RepositoryResult<bool>
where
    F: Fn(&str) -> String,
{
    provider.with_transaction(|conn| {
        let existing: i64 = categories::table.count().get_result(conn)?;
        if existing > 0 {
            return Ok(false);
        }

        let mut category_ids = Vec::with_capacity(SAMPLE_CATEGORIES.len());
        for (name, description, icon, color) in SAMPLE_CATEGORIES {
            let id: i32 = diesel::insert_into(categories::table)
                .values((
                    categories::name.eq(name),
                    categories::description.eq(description),
                    categories::icon.eq(icon),
                    categories::color.eq(color),
                ))
                .returning(categories::id)
                .get_result(conn)?;
            category_ids.push(id);
        }

        let existing_videos: i64 = videos::table.count().get_result(conn)?;
        if existing_videos == 0 {
            for (title, description, file_name, category, difficulty) in SAMPLE_VIDEOS {
                diesel::insert_into(videos::table)
                    .values((
                        videos::title.eq(title),
                        videos::description.eq(description),
                        videos::video_url.eq(media_url(file_name)),
                        videos::category_id.eq(category_ids[category]),
                        videos::difficulty.eq(difficulty),
                    ))
                    .execute(conn)?;
            }
        }

        log::info!(
            "Seeded {} sample categories into an empty database",
            category_ids.len()
        );
        Ok(true)
    })
}
