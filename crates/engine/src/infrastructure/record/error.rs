//! Record loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a character record.
///
/// These stop a record from being read at all. Once a `<character>` element
/// is found, missing or malformed fields never produce an error.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Failed to read record {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Record has no <{0}> element")]
    MissingElement(&'static str),
}
