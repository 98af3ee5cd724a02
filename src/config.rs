use crate::error::{HarvestError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Browser identification sent with every root-page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3770.142 Safari/537.36";

/// How a script's `src` attribute is turned into a fetch URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlResolution {
    /// Use `src` verbatim when it starts with `https://`, otherwise append it
    /// to the site URL as a plain string.
    #[default]
    Naive,
    /// Resolve `src` against the site URL as an RFC 3986 reference.
    Join,
}

/// Configuration for a harvest batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Delimited file listing one site per row
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Directory that receives one subdirectory per site
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Maximum number of sites to process (0 = no limit)
    #[serde(default = "default_max_sites")]
    pub max_sites: usize,

    /// Zero-based column holding the domain
    #[serde(default = "default_site_field")]
    pub site_field: usize,

    /// User-Agent header for root-page requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub url_resolution: UrlResolution,

    /// Per-request timeout in seconds (0 = wait forever)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Also write an (empty) inline file for tags with neither a body nor a `src`
    #[serde(default)]
    pub keep_empty_inline: bool,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("data/top-1m.csv")
}

fn default_output_root() -> PathBuf {
    PathBuf::from("data/web_file")
}

fn default_max_sites() -> usize {
    3
}

fn default_site_field() -> usize {
    1
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_root: default_output_root(),
            max_sites: default_max_sites(),
            site_field: default_site_field(),
            user_agent: default_user_agent(),
            url_resolution: UrlResolution::default(),
            request_timeout_secs: default_request_timeout_secs(),
            keep_empty_inline: false,
        }
    }
}

impl HarvestConfig {
    /// Create a configuration for the given input list and output root
    pub fn new(input_path: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| HarvestError::io(path, e))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| HarvestError::io(path, e))?;

        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HarvestError::Config(e.to_string()))
    }

    /// Request timeout, or `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
