use crate::config::UrlResolution;
use crate::error::{HarvestError, Result};
use url::Url;

/// Turn a script's `src` attribute into the URL to fetch.
///
/// `Naive` keeps the behavior of the original harvester: anything that does
/// not start with `https://` is glued onto the site URL as-is. This is wrong
/// for protocol-relative (`//cdn/x.js`) and plain `http://` sources, which
/// is why `Join` exists.
pub fn resolve_script_url(site_url: &str, src: &str, mode: UrlResolution) -> Result<String> {
    match mode {
        UrlResolution::Naive => Ok(resolve_naive(site_url, src)),
        UrlResolution::Join => resolve_join(site_url, src),
    }
}

fn resolve_naive(site_url: &str, src: &str) -> String {
    if src.starts_with("https://") {
        src.to_string()
    } else {
        format!("{site_url}{src}")
    }
}

fn resolve_join(site_url: &str, src: &str) -> Result<String> {
    let base = Url::parse(site_url).map_err(|source| HarvestError::InvalidUrl {
        url: site_url.to_string(),
        source,
    })?;
    let resolved = base.join(src).map_err(|source| HarvestError::InvalidUrl {
        url: src.to_string(),
        source,
    })?;
    Ok(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://example.com";

    #[test]
    fn test_naive_absolute_https_is_verbatim() {
        let url = resolve_script_url(SITE, "https://cdn.foo.com/a.js", UrlResolution::Naive);
        assert_eq!(url.unwrap(), "https://cdn.foo.com/a.js");
    }

    #[test]
    fn test_naive_root_relative_is_concatenated() {
        let url = resolve_script_url(SITE, "/a.js", UrlResolution::Naive);
        assert_eq!(url.unwrap(), "https://example.com/a.js");
    }

    #[test]
    fn test_naive_keeps_known_defects() {
        // No separator is inserted and other schemes are not recognised
        assert_eq!(
            resolve_script_url(SITE, "a.js", UrlResolution::Naive).unwrap(),
            "https://example.coma.js"
        );
        assert_eq!(
            resolve_script_url(SITE, "//cdn.foo.com/a.js", UrlResolution::Naive).unwrap(),
            "https://example.com//cdn.foo.com/a.js"
        );
        assert_eq!(
            resolve_script_url(SITE, "http://cdn.foo.com/a.js", UrlResolution::Naive).unwrap(),
            "https://example.comhttp://cdn.foo.com/a.js"
        );
    }

    #[test]
    fn test_join_handles_reference_forms() {
        let cases = [
            ("https://cdn.foo.com/a.js", "https://cdn.foo.com/a.js"),
            ("http://cdn.foo.com/a.js", "http://cdn.foo.com/a.js"),
            ("/static/a.js", "https://example.com/static/a.js"),
            ("a.js", "https://example.com/a.js"),
            ("//cdn.foo.com/a.js", "https://cdn.foo.com/a.js"),
        ];

        for (src, expected) in cases {
            let resolved = resolve_script_url(SITE, src, UrlResolution::Join).unwrap();
            assert_eq!(resolved, expected, "src '{}'", src);
        }
    }

    #[test]
    fn test_join_relative_to_nested_base() {
        let resolved =
            resolve_script_url("https://example.com/docs/", "../js/a.js", UrlResolution::Join);
        assert_eq!(resolved.unwrap(), "https://example.com/js/a.js");
    }

    #[test]
    fn test_join_rejects_invalid_base() {
        let err = resolve_script_url("not a url", "/a.js", UrlResolution::Join).unwrap_err();
        assert!(matches!(err, HarvestError::InvalidUrl { .. }));
        assert!(err.is_transport());
    }
}
