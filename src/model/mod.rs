//! Domain model types (pure).
//!
//! Blog posts, filters, post providers, key actions and the error taxonomy.

pub mod error;
pub mod key_action;
pub mod post;
pub mod sample;
pub mod source;

// Re-export for convenience
pub use error::{AppError, SourceError};
pub use key_action::KeyAction;
pub use post::{select_posts, BlogPost, PostFilter, PRESENTATION_CATEGORY};
pub use sample::SampleSource;
pub use source::{select_source, JsonFileSource, PostSource};
