use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while harvesting sites
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Transport failure: DNS, connect, TLS, timeout or a non-2xx status
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Filesystem failure while writing an artifact or creating a directory
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A script source could not be resolved into a URL
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The site list could not be read
    #[error("failed to read site list: {0}")]
    SiteList(#[from] csv::Error),

    /// The batch report could not be serialized
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    /// The configuration file could not be loaded
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl HarvestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from the network rather than the local disk
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::InvalidUrl { .. })
    }
}

pub type Result<T, E = HarvestError> = std::result::Result<T, E>;
