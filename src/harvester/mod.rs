pub mod fetch;
pub mod site;

pub use fetch::Fetcher;
pub use site::{EXTERNAL_DIR, Harvester, INLINE_DIR};
