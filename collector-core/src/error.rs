//! Error types for every stage of an ingestion cycle.

use std::path::PathBuf;

use thiserror::Error;

use crate::collector::Phase;

/// The locations feed could not be read.
#[derive(Debug, Error)]
#[error("Failed to read locations feed {}: {source}", .path.display())]
pub struct FeedError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A decoded API response does not have the structure we rely on.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("Unexpected response type: expected an object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Response is missing expected key '{0}'")]
    MissingKey(String),

    #[error("Response field '{field}' is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    #[error("Response field has an unexpected shape: {0}")]
    Field(#[source] serde_json::Error),
}

/// Failures talking to the geocoding / weather API.
///
/// A request that could not be sent and a request that came back with a
/// non-success status both end up here; there is no separate path for them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode {endpoint} JSON: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Geocoding returned no match for '{query}'")]
    NoGeocodingMatch { query: String },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Wraps a database failure.
#[derive(Debug, Error)]
#[error("Database error: {0}")]
pub struct StorageError(#[from] pub sqlx::Error);

/// Anything that aborts a pass before it completes.
#[derive(Debug, Error)]
pub enum CycleFailure {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A pass aborted while in `phase`.
#[derive(Debug, Error)]
#[error("Ingestion cycle aborted while {phase}")]
pub struct CycleError {
    pub phase: Phase,
    #[source]
    pub source: CycleFailure,
}

impl CycleError {
    pub fn new(phase: Phase, source: impl Into<CycleFailure>) -> Self {
        Self { phase, source: source.into() }
    }
}
