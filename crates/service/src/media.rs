/// Builds public URLs for stored media paths.
#[derive(Clone, Debug)]
pub struct MediaUrls {
    base: String,
}

impl MediaUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    /// `None` for missing or blank paths. Already absolute URLs pass through.
    pub fn url(&self, path: Option<&str>) -> Option<String> {
        let path = path?.trim();
        if path.is_empty() {
            return None;
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }
        Some(format!("{}{}", self.base, path.trim_start_matches('/')))
    }

    pub fn url_of(&self, path: &str) -> Option<String> {
        self.url(Some(path))
    }
}

impl Default for MediaUrls {
    fn default() -> Self {
        Self::new("/media/")
    }
}

#[cfg(test)]
mod tests {
    use super::MediaUrls;

    #[test]
    fn joins_relative_paths() {
        let media = MediaUrls::new("http://localhost:8080/media");
        assert_eq!(media.url_of("hero/bike/a.png").as_deref(), Some("http://localhost:8080/media/hero/bike/a.png"));
        assert_eq!(media.url_of("/hero/a.png").as_deref(), Some("http://localhost:8080/media/hero/a.png"));
    }

    #[test]
    fn blank_is_none() {
        let media = MediaUrls::default();
        assert_eq!(media.url(None), None);
        assert_eq!(media.url_of("  "), None);
    }

    #[test]
    fn absolute_passes_through() {
        let media = MediaUrls::default();
        assert_eq!(media.url_of("https://cdn.example.com/x.jpg").as_deref(), Some("https://cdn.example.com/x.jpg"));
    }
}
