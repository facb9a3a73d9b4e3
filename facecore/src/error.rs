//! Errors raised while building or configuring the watchface.
//!
//! The host platform is expected to hand out every resource the face asks
//! for, so none of these are recovered from: they surface at startup and the
//! host exits.

use std::path::PathBuf;
use thiserror::Error;

use crate::resources::ResourceId;

#[derive(Error, Debug)]
pub enum FaceError {
    #[error("resource unavailable: {0:?}")]
    ResourceUnavailable(ResourceId),
    #[error("failed to decode asset {id:?}: {source}")]
    Asset {
        id: ResourceId,
        #[source]
        source: image::ImageError,
    },
    #[error("bitmap {id:?} has {len} bytes, expected {expected}")]
    BitmapSize {
        id: ResourceId,
        len: usize,
        expected: usize,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, FaceError>;
