//! Batch harvester for a site's root HTML page and the JavaScript it uses.
//!
//! For every domain in a site list the root page is saved as
//! `<name>/<name>.html`, inline `<script>` bodies go to `<name>/inner_js/` and
//! external scripts to `<name>/extra_js/`, each named after the tag's position
//! on the page.

pub mod batch;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod harvester;
pub mod parsers;
pub mod resolve;
pub mod results;
pub mod sites;
pub mod utils;

// Re-export commonly used types for convenience
pub use batch::Batch;
pub use config::{HarvestConfig, UrlResolution};
pub use error::{HarvestError, Result};
pub use harvester::Harvester;
pub use results::{BatchReport, SiteOutcome, SiteReport};
pub use sites::SiteEntry;
