//! On-disk storage for uploaded video files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("file name {0:?} cannot be stored")]
    InvalidFileName(String),
    #[error("failed to store media file: {0}")]
    Io(#[from] io::Error),
}

/// Directory of uploaded files and the URL prefix it is served under.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    dir: PathBuf,
    url_prefix: String,
}

impl MediaStorage {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        let url_prefix = url_prefix.into();
        let url_prefix = format!("/{}", url_prefix.trim_matches('/'));
        Self {
            dir: dir.into(),
            url_prefix,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Create the media directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), MediaError> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Public URL of a stored file.
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.url_prefix.trim_end_matches('/'), file_name)
    }

    /// Copy `source` into the media directory as `file_name` and return its URL.
    ///
    /// Only the last path component of `file_name` is used, so client names
    /// such as `../../etc/passwd` land inside the media directory. An existing
    /// file with the same name is overwritten.
    pub fn store(&self, file_name: &str, source: &Path) -> Result<String, MediaError> {
        let file_name = sanitize_file_name(file_name)?;
        self.ensure_dir()?;
        fs::copy(source, self.dir.join(&file_name))?;
        Ok(self.url_for(&file_name))
    }

    /// Delete a previously stored file. A missing file is not an error.
    pub fn remove(&self, file_name: &str) -> Result<(), MediaError> {
        let file_name = sanitize_file_name(file_name)?;
        match fs::remove_file(self.dir.join(file_name)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Reduce a client-supplied name to a bare file name.
pub fn sanitize_file_name(file_name: &str) -> Result<String, MediaError> {
    let invalid = || MediaError::InvalidFileName(file_name.to_string());

    // Browsers on Windows may send backslash-separated paths.
    let last = file_name
        .rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .ok_or_else(invalid)?;

    if last.is_empty() || last == "." || last == ".." {
        return Err(invalid());
    }

    Ok(last.to_string())
}
