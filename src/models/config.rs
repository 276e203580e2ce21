use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::db::DatabaseConfig;

/// Configuration options for the video library service.
///
/// Values are layered from `config/default.yaml`, then `config/{APP_ENV}.yaml`
/// and finally `APP_*` environment variables (`APP_DATABASE__DATABASE_URL`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Directory uploaded video files are written to.
    pub media_dir: String,
    /// URL prefix the media directory is served under.
    pub media_url_prefix: String,
    /// Origins allowed to call the API from a browser.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Insert sample categories and videos into an empty database.
    #[serde(default)]
    pub seed_sample_data: bool,
}

impl ServerConfig {
    /// Load configuration for the given environment name.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8000)?
            .set_default("database.database_url", "ugsl.db")?
            .set_default("media_dir", "videos")?
            .set_default("media_url_prefix", "/media")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
