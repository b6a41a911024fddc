use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while bringing the record set into memory.
///
/// Every variant is fatal to initialization: the interface never renders a
/// partial record set.
#[derive(Debug, Error)]
pub enum LocationsError {
    #[error("could not read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("data file is not a valid list of locations: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("location {index} ({name}) has no members")]
    EmptyMembers { index: usize, name: String },

    #[error("location {index} ({name}) has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates {
        index: usize,
        name: String,
        lat: f64,
        lng: f64,
    },
}
