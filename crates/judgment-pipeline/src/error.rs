//! Error types for pipeline resource loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the segmentation dictionary or stopword list.
///
/// These are startup-time failures only; per-request text processing never
/// returns an error (malformed documents degrade to a fallback string).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read resource {}: {source}", path.display())]
    ResourceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid segmentation dictionary {}: {message}", path.display())]
    InvalidDictionary { path: PathBuf, message: String },
}
