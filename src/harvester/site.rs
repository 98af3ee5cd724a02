use crate::config::{HarvestConfig, UrlResolution};
use crate::error::{HarvestError, Result};
use crate::harvester::Fetcher;
use crate::parsers::{ScriptReference, html};
use crate::resolve::resolve_script_url;
use crate::results::SiteReport;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Subdirectory holding inline script bodies
pub const INLINE_DIR: &str = "inner_js";

/// Subdirectory holding fetched external scripts
pub const EXTERNAL_DIR: &str = "extra_js";

/// Fetches a site's root page and saves it together with its scripts
#[derive(Debug, Clone)]
pub struct Harvester {
    fetcher: Fetcher,
    user_agent: String,
    resolution: UrlResolution,
    keep_empty_inline: bool,
}

impl Harvester {
    /// Creates a harvester with its own HTTP client
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        let fetcher = Fetcher::new(config.request_timeout())?;
        Ok(Self::with_fetcher(fetcher, config))
    }

    /// Creates a harvester around an existing fetcher
    pub fn with_fetcher(fetcher: Fetcher, config: &HarvestConfig) -> Self {
        Self {
            fetcher,
            user_agent: config.user_agent.clone(),
            resolution: config.url_resolution,
            keep_empty_inline: config.keep_empty_inline,
        }
    }

    /// Harvest one site into `output_dir`, which must already exist.
    ///
    /// Fails if the root page cannot be fetched or an artifact cannot be
    /// written. A failed external script only shows up in the report's
    /// `external_failures`.
    pub async fn harvest(
        &self,
        site_url: &str,
        site_name: &str,
        output_dir: &Path,
    ) -> Result<SiteReport> {
        ::log::info!("Harvesting {} into {}", site_url, output_dir.display());

        let page = self
            .fetcher
            .get_bytes(site_url, Some(&self.user_agent))
            .await?;
        write_artifact(&output_dir.join(format!("{site_name}.html")), &page).await?;

        let scripts = html::parse_scripts_from_bytes(&page);
        drop(page);

        let mut report = SiteReport::new(site_name, site_url);
        let mut inline_dir = LazyDir::new(output_dir.join(INLINE_DIR));
        let mut external_dir = LazyDir::new(output_dir.join(EXTERNAL_DIR));

        for script in &scripts {
            if self.writes_inline(script) {
                let path = inline_dir.ensure().await?.join(script.file_name());
                write_artifact(&path, script.inline_body.as_bytes()).await?;
                report.inline_scripts += 1;
                ::log::debug!("Saved inline script {} from {}", script.index, site_url);
            }

            if let Some(src) = &script.src {
                match self.fetch_external(site_url, script, src).await {
                    Ok(body) => {
                        let path = external_dir.ensure().await?.join(script.file_name());
                        write_artifact(&path, &body).await?;
                        report.external_scripts += 1;
                    }
                    Err(e) => {
                        ::log::warn!(
                            "Skipping external script {} of {}: {}",
                            script.index,
                            site_url,
                            e
                        );
                        report.external_failures += 1;
                    }
                }
            }
        }

        ::log::info!(
            "Finished {}: {} inline, {} external, {} external failures",
            site_url,
            report.inline_scripts,
            report.external_scripts,
            report.external_failures
        );

        Ok(report)
    }

    /// Every tag with a body or a `src` gets an inline file, empty for
    /// bodiless external tags. `keep_empty_inline` extends this to tags that
    /// have neither.
    fn writes_inline(&self, script: &ScriptReference) -> bool {
        script.has_inline() || script.is_external() || self.keep_empty_inline
    }

    async fn fetch_external(
        &self,
        site_url: &str,
        script: &ScriptReference,
        src: &str,
    ) -> Result<Vec<u8>> {
        let url = resolve_script_url(site_url, src, self.resolution)?;
        ::log::debug!("Script {} resolved {} -> {}", script.index, src, url);
        self.fetcher.get_bytes(&url, None).await
    }
}

/// A directory that is only created the first time something goes in it
struct LazyDir {
    path: PathBuf,
    ready: bool,
}

impl LazyDir {
    fn new(path: PathBuf) -> Self {
        Self { path, ready: false }
    }

    async fn ensure(&mut self) -> Result<&Path> {
        if !self.ready {
            // Only the leaf is created; a missing parent is an error
            match tokio::fs::create_dir(&self.path).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
                Err(e) => return Err(HarvestError::io(&self.path, e)),
            }
            self.ready = true;
        }
        Ok(&self.path)
    }
}

async fn write_artifact(path: &Path, contents: &[u8]) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| HarvestError::io(path, e))
}
