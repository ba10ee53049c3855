//! Post providers.
//!
//! The list screen only needs "something that returns posts". The built-in
//! sample data is the default; a JSON file can stand in for it.

use super::error::SourceError;
use super::post::BlogPost;
use super::sample::SampleSource;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A provider of blog posts.
pub trait PostSource {
    /// Load every post, in provider order.
    fn load(&self) -> Result<Vec<BlogPost>, SourceError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Posts read from a JSON array on disk.
///
/// ```json
/// [{ "publish_date": "2023-12-09T14:30:00", "author": "notoroid",
///    "category": "プレゼン資料", "summary": "...", "tags": ["UVC"] }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Provider for the file at `path`. The file is read on `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this provider reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostSource for JsonFileSource {
    fn load(&self) -> Result<Vec<BlogPost>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::FileNotFound {
                path: self.path.clone(),
            });
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        let posts: Vec<BlogPost> =
            serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = ?self.path, count = posts.len(), "Loaded posts from file");
        Ok(posts)
    }

    fn describe(&self) -> String {
        format!("posts file {}", self.path.display())
    }
}

/// Pick the provider: a posts file when given, else the sample data.
pub fn select_source(posts_file: Option<PathBuf>, now: NaiveDateTime) -> Box<dyn PostSource> {
    match posts_file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleSource::new(now)),
    }
}
