//! # Errors
//!
//! Failures that can occur while building a scene. Nothing in the per-frame
//! path returns an error: an unready scene renders as a no-op instead.

use thiserror::Error;

use crate::model::ImageKey;

/// Errors raised by the load phase (parsing rune data, filling the image table).
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The rune payload or a config file is not valid JSON for the expected shape.
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The rune payload is valid JSON but neither an array nor an object of paths.
    #[error("rune data must be a JSON array or object of paths, found {found}")]
    UnexpectedShape { found: &'static str },

    /// An icon path could not be joined onto the icon base URL.
    #[error("invalid icon reference {icon:?}: {source}")]
    InvalidIconUrl {
        icon: String,
        #[source]
        source: url::ParseError,
    },

    /// `mark_ready` was called while some icon still has no loaded image.
    #[error("no image loaded for {key} ({icon})")]
    MissingImage { key: ImageKey, icon: String },

    /// The table was already marked ready; it is read-only from then on.
    #[error("image table is sealed, cannot insert {0}")]
    TableSealed(ImageKey),
}
