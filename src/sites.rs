use crate::error::{HarvestError, Result};
use crate::utils;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One site from the input list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEntry {
    /// Bare domain, e.g. `example.com`
    pub domain: String,

    /// URL of the site's root page
    pub url: String,
}

impl SiteEntry {
    /// Site fetched over `https://` at its full domain
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let url = utils::site_url(&domain);
        Self { domain, url }
    }

    /// Site whose root page lives somewhere other than `https://<domain>`
    pub fn with_url(domain: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            url: url.into(),
        }
    }

    /// Directory and HTML file name for this site
    pub fn basename(&self) -> &str {
        utils::site_basename(&self.domain)
    }
}

/// Read the site list from a headerless CSV file
pub fn read_sites<P: AsRef<Path>>(path: P, field_index: usize) -> Result<Vec<SiteEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| HarvestError::io(path, e))?;
    parse_sites(file, field_index)
}

/// Parse site rows, taking the domain from column `field_index`.
///
/// Rows where that column is missing or blank are skipped.
pub fn parse_sites<R: Read>(reader: R, field_index: usize) -> Result<Vec<SiteEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut sites = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        match record.get(field_index).map(str::trim) {
            None | Some("") => {
                ::log::warn!("Skipping row {}: no domain in column {}", row + 1, field_index)
            }
            Some(domain) if !utils::is_valid_site_name(utils::site_basename(domain)) => {
                ::log::warn!("Skipping row {}: unusable site name in {:?}", row + 1, domain)
            }
            Some(domain) => sites.push(SiteEntry::new(domain)),
        }
    }

    ::log::debug!("Read {} sites from list", sites.len());
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rank_domain_rows() {
        let input = "1,google.com\n2,youtube.com\n3,www.example.co.uk\n";
        let sites = parse_sites(input.as_bytes(), 1).unwrap();
        assert_eq!(
            sites,
            vec![
                SiteEntry::new("google.com"),
                SiteEntry::new("youtube.com"),
                SiteEntry::new("www.example.co.uk"),
            ]
        );
        assert_eq!(sites[2].basename(), "www");
        assert_eq!(sites[2].url, "https://www.example.co.uk");
    }

    #[test]
    fn test_skips_short_and_blank_rows() {
        let input = "1,google.com\n2\n3,  \n4, baidu.com \n";
        let sites = parse_sites(input.as_bytes(), 1).unwrap();
        assert_eq!(
            sites,
            vec![SiteEntry::new("google.com"), SiteEntry::new("baidu.com")]
        );
    }

    #[test]
    fn test_skips_rows_that_would_escape_output_root() {
        let input = "1,.example.com\n2,/abs.com\n3,../up.com\n4,ok.com\n";
        let sites = parse_sites(input.as_bytes(), 1).unwrap();
        assert_eq!(sites, vec![SiteEntry::new("ok.com")]);
    }

    #[test]
    fn test_custom_field_index() {
        let sites = parse_sites("example.org\n".as_bytes(), 0).unwrap();
        assert_eq!(sites, vec![SiteEntry::new("example.org")]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_sites(dir.path().join("nope.csv"), 1).unwrap_err();
        assert!(matches!(err, HarvestError::Io { .. }));
    }
}
