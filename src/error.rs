use std::{io, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ReduceError {
    /// The geofile is missing or could not be read or written.
    #[error("could not access {path:?}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The geofile contents are not valid JSON.
    #[error("could not parse {path:?} as JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but is not shaped like a feature collection.
    #[error("unexpected document structure: {0}")]
    Structure(String),

    #[error("could not serialize document")]
    Serialize(#[source] serde_json::Error),

    #[error("cannot compute saved percentage of {path:?}, original size is zero")]
    Arithmetic { path: PathBuf },
}
