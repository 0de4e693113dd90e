//! Error types for the GIR → defs pipeline.
//!
//! Missing or unexpected attributes are never errors; only a missing input,
//! I/O failures and malformed XML abort a run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No input path on the command line.
    #[error("must specify one input filename")]
    MissingInput,

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed XML.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize model")]
    Serialize(#[from] serde_json::Error),

    #[error("unknown format: {0}. Use defs or json")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
