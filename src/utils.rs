use std::path::{Component, Path};

/// Name used for a site's output directory and HTML file: the domain up to
/// its first `.` (`www.example.com` gives `www`).
pub fn site_basename(domain: &str) -> &str {
    domain.split('.').next().unwrap_or(domain)
}

/// Whether `name` can be used as a site directory: exactly one normal path
/// component, so it can neither be empty nor leave the output root.
pub fn is_valid_site_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Root-page URL for a bare domain
pub fn site_url(domain: &str) -> String {
    format!("https://{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_basename() {
        assert_eq!(site_basename("google.com"), "google");
        assert_eq!(site_basename("www.example.co.uk"), "www");
        assert_eq!(site_basename("localhost"), "localhost");
    }

    #[test]
    fn test_site_name_validation() {
        assert!(is_valid_site_name("google"));
        assert!(is_valid_site_name("my-site_1"));
        assert!(!is_valid_site_name(""));
        assert!(!is_valid_site_name(".."));
        assert!(!is_valid_site_name("/abs"));
        assert!(!is_valid_site_name("a/b"));
        assert!(!is_valid_site_name("a\\b"));
        assert!(!is_valid_site_name(site_basename(".example.com")));
        assert!(!is_valid_site_name(site_basename("/abs.com")));
    }

    #[test]
    fn test_site_url_keeps_full_domain() {
        assert_eq!(site_url("www.example.co.uk"), "https://www.example.co.uk");
    }
}
