//! Error type shared by the cleaners, the HTTP layer and config loading.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a document (or the config file) failed.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Markdown cleaner would overwrite its own input.
    #[error("input and output are the same file: {}", .0.display())]
    SamePath(PathBuf),

    /// Curl reported an error (DNS, connect, timeout, TLS, ...).
    #[error("GET {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// A page the run depends on answered with something other than 200.
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u32 },

    /// The page has no element with the navigation region's id.
    #[error("{url}: no element with id \"{id}\"")]
    RegionNotFound { url: String, id: String },

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Config file could not be parsed or located.
    #[error("config: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn http(url: &str, source: curl::Error) -> Self {
        Error::Http {
            url: url.to_string(),
            source,
        }
    }
}
