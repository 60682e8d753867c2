use quiz_core::model::Logo;

/// CDN prefix for the bundled dataset, including the resize/format transform.
const DEFAULT_IMAGE_BASE: &str =
    "https://res.cloudinary.com/dcxh252ec/image/upload/w_512,f_avif,q_auto/logos%2F";

/// Turns a logo's file reference into a fetchable URL.
///
/// Pure pass-through: the file name is appended to the configured base. No
/// validation, no caching; the webview does the actual fetch.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

impl ImageResolver {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url_for(&self, logo: &Logo) -> String {
        format!("{}{}", self.base_url, logo.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_file_name_to_base() {
        let resolver = ImageResolver::new("https://cdn.example.com/logos/");
        let logo = Logo::new("DBS", "dbs.png", "a hint", vec!["DBS".into()]).unwrap();
        assert_eq!(resolver.url_for(&logo), "https://cdn.example.com/logos/dbs.png");
    }

    #[test]
    fn default_base_points_at_dataset_cdn() {
        let resolver = ImageResolver::default();
        let logo = Logo::new("DBS", "dbs.png", "a hint", vec!["DBS".into()]).unwrap();
        assert!(resolver.url_for(&logo).ends_with("logos%2Fdbs.png"));
    }
}
