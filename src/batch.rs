use crate::cleanup;
use crate::config::{HarvestConfig, UrlResolution};
use crate::error::{HarvestError, Result};
use crate::harvester::Harvester;
use crate::results::{BatchReport, SiteReport};
use crate::sites::{self, SiteEntry};
use crate::utils;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Builder for a harvest run over a site list
pub struct Batch {
    config: HarvestConfig,
}

impl Batch {
    /// Create a batch from a configuration
    pub fn new(config: HarvestConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(HarvestConfig::from_file(path)?))
    }

    /// Override the site list path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    /// Override the output root
    pub fn with_output_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_root = path.into();
        self
    }

    /// Override the number of sites to process (0 = all)
    pub fn with_max_sites(mut self, max_sites: usize) -> Self {
        self.config.max_sites = max_sites;
        self
    }

    /// Override the User-Agent sent with root-page requests
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Override how script sources are resolved
    pub fn with_url_resolution(mut self, resolution: UrlResolution) -> Self {
        self.config.url_resolution = resolution;
        self
    }

    /// Override the per-request timeout (0 = none)
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.config.request_timeout_secs = seconds;
        self
    }

    /// Write an inline file for every script tag, even one with no body or src
    pub fn with_keep_empty_inline(mut self, keep: bool) -> Self {
        self.config.keep_empty_inline = keep;
        self
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Read the site list, harvest each site and clean up afterwards
    pub async fn run(self) -> Result<BatchReport> {
        let sites = sites::read_sites(&self.config.input_path, self.config.site_field)?;
        ::log::info!(
            "Loaded {} sites from {}",
            sites.len(),
            self.config.input_path.display()
        );

        let harvester = Harvester::new(&self.config)?;
        self.run_sites(&harvester, &sites).await
    }

    /// Harvest the given sites in order, one at a time.
    ///
    /// A failing site is logged and recorded; it never stops the batch.
    /// Sites sharing a name get a numeric suffix (`google`, `google_1`) so
    /// each one writes into a directory of its own.
    pub async fn run_sites(
        &self,
        harvester: &Harvester,
        sites: &[SiteEntry],
    ) -> Result<BatchReport> {
        let root = &self.config.output_root;
        tokio::fs::create_dir_all(root)
            .await
            .map_err(|e| HarvestError::io(root, e))?;

        let limit = match self.config.max_sites {
            0 => sites.len(),
            n => n.min(sites.len()),
        };

        let mut report = BatchReport::default();
        let mut used_names = HashSet::new();
        for (count, site) in sites[..limit].iter().enumerate() {
            ::log::info!("[{}/{}] {}", count + 1, limit, site.domain);
            let base = site.basename();
            if !utils::is_valid_site_name(base) {
                ::log::error!(
                    "Skipping {}: {:?} is not a usable directory name",
                    site.domain,
                    base
                );
                let reason = format!("unusable site name {base:?}");
                report.sites.push(SiteReport::failed(base, &site.url, reason));
                continue;
            }

            let name = unique_site_name(base, &mut used_names);
            if name != base {
                ::log::info!(
                    "{} shares its name with an earlier site, saving as {}",
                    site.domain,
                    name
                );
            }
            let site_report = harvest_site(harvester, root, site, &name).await;
            report.sites.push(site_report);
        }

        report.removed_dirs = match cleanup::remove_empty_dirs(root) {
            Ok(removed) => removed,
            Err(e) => {
                ::log::warn!("Cleanup of {} stopped early: {}", root.display(), e);
                0
            }
        };

        ::log::info!(
            "Batch complete: {} harvested, {} failed, {} empty directories removed",
            report.harvested(),
            report.failed(),
            report.removed_dirs
        );

        Ok(report)
    }
}

/// First free name among `base`, `base_1`, `base_2`, ...
fn unique_site_name(base: &str, used: &mut HashSet<String>) -> String {
    let mut name = base.to_string();
    let mut suffix = 1;
    while !used.insert(name.clone()) {
        name = format!("{base}_{suffix}");
        suffix += 1;
    }
    name
}

/// Give the site an empty directory, dropping artifacts of an earlier run
async fn prepare_site_dir(site_dir: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(site_dir).await {
        Ok(()) => ::log::debug!("Cleared previous output in {}", site_dir.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(HarvestError::io(site_dir, e)),
    }
    tokio::fs::create_dir(site_dir)
        .await
        .map_err(|e| HarvestError::io(site_dir, e))
}

async fn harvest_site(
    harvester: &Harvester,
    root: &Path,
    site: &SiteEntry,
    name: &str,
) -> SiteReport {
    let site_dir = root.join(name);
    if let Err(e) = prepare_site_dir(&site_dir).await {
        ::log::error!("Failed to prepare {}: {}", site.domain, e);
        return SiteReport::failed(name, &site.url, e.to_string());
    }

    match harvester.harvest(&site.url, name, &site_dir).await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Failed to harvest {}: {}", site.domain, e);
            SiteReport::failed(name, &site.url, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let batch = Batch::new(HarvestConfig::default())
            .with_input_path("sites.csv")
            .with_output_root("out")
            .with_max_sites(0)
            .with_user_agent("agent")
            .with_url_resolution(UrlResolution::Join)
            .with_request_timeout(0)
            .with_keep_empty_inline(true);

        let config = batch.config();
        assert_eq!(config.input_path, PathBuf::from("sites.csv"));
        assert_eq!(config.output_root, PathBuf::from("out"));
        assert_eq!(config.max_sites, 0);
        assert_eq!(config.user_agent, "agent");
        assert_eq!(config.url_resolution, UrlResolution::Join);
        assert_eq!(config.request_timeout(), None);
        assert!(config.keep_empty_inline);
    }

    #[test]
    fn test_unique_site_name() {
        let mut used = HashSet::new();
        assert_eq!(unique_site_name("google", &mut used), "google");
        assert_eq!(unique_site_name("google", &mut used), "google_1");
        assert_eq!(unique_site_name("google_1", &mut used), "google_1_1");
        assert_eq!(unique_site_name("google", &mut used), "google_2");
    }

    #[tokio::test]
    async fn test_missing_site_list_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let result = Batch::new(HarvestConfig::new(
            tmp.path().join("missing.csv"),
            tmp.path().join("out"),
        ))
        .run()
        .await;

        assert!(matches!(result, Err(HarvestError::Io { .. })));
    }
}
