use serde::{Deserialize, Serialize};

/// How a single site's harvest ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SiteOutcome {
    /// Page saved; zero or more scripts saved alongside it
    Harvested,
    /// Page fetch or a local write failed
    Failed { reason: String },
}

/// Result of harvesting one site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteReport {
    /// Output name of the site
    pub site: String,

    /// URL the root page was fetched from
    pub url: String,

    pub outcome: SiteOutcome,

    /// Files written under `inner_js`
    pub inline_scripts: usize,

    /// Files written under `extra_js`
    pub external_scripts: usize,

    /// External scripts that could not be fetched
    pub external_failures: usize,
}

impl SiteReport {
    /// Create a report for a site whose harvest has just started
    pub fn new(site: &str, url: &str) -> Self {
        Self {
            site: site.to_string(),
            url: url.to_string(),
            outcome: SiteOutcome::Harvested,
            inline_scripts: 0,
            external_scripts: 0,
            external_failures: 0,
        }
    }

    /// Create a report for a site that failed before anything was saved
    pub fn failed(site: &str, url: &str, reason: impl Into<String>) -> Self {
        Self {
            outcome: SiteOutcome::Failed {
                reason: reason.into(),
            },
            ..Self::new(site, url)
        }
    }

    pub fn is_harvested(&self) -> bool {
        self.outcome == SiteOutcome::Harvested
    }
}

/// Summary of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub sites: Vec<SiteReport>,

    /// Empty directories deleted by the cleanup pass
    pub removed_dirs: usize,
}

impl BatchReport {
    pub fn harvested(&self) -> usize {
        self.sites.iter().filter(|s| s.is_harvested()).count()
    }

    pub fn failed(&self) -> usize {
        self.sites.len() - self.harvested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let report = BatchReport {
            sites: vec![
                SiteReport::new("a", "https://a.com"),
                SiteReport::failed("b", "https://b.com", "connection refused"),
            ],
            removed_dirs: 1,
        };
        assert_eq!(report.harvested(), 1);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_outcome_serialization() {
        let report = SiteReport::failed("b", "https://b.com", "timeout");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"]["status"], "failed");
        assert_eq!(json["outcome"]["reason"], "timeout");

        let ok = serde_json::to_value(SiteReport::new("a", "https://a.com")).unwrap();
        assert_eq!(ok["outcome"]["status"], "harvested");
    }
}
