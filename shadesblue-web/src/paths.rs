//! URL helpers that respect the deployment base path.
use shadesblue_core::query::encode_component;

/// Prefix a static asset path with `PUBLIC_URL` (e.g. `/site` on a project page host).
///
/// Absolute URLs pass through untouched.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, `None` when the site is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// A `mailto:` link with a percent-encoded subject.
#[must_use]
pub fn mailto(address: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => {
            // mailto bodies treat `+` literally; literal pluses are already %2B
            let encoded = encode_component(subject).replace('+', "%20");
            format!("mailto:{address}?subject={encoded}")
        }
        None => format!("mailto:{address}"),
    }
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    if relative.starts_with("http://") || relative.starts_with("https://") {
        return relative.to_string();
    }
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, mailto, router_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("images/logo.png"), "/images/logo.png");
        assert_eq!(asset_path("/images/logo.png"), "/images/logo.png");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("images/logo.png", "/site"),
            "/site/images/logo.png"
        );
        assert_eq!(
            super::asset_path_with_base("/images/logo.png", "/site/"),
            "/site/images/logo.png"
        );
    }

    #[test]
    fn absolute_urls_are_untouched() {
        assert_eq!(
            super::asset_path_with_base("https://cdn.example.com/a.png", "/site"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
        assert_eq!(
            super::router_base_with_base("/site/"),
            Some(String::from("/site"))
        );
    }

    #[test]
    fn mailto_encodes_spaces_as_percent_twenty() {
        assert_eq!(
            mailto("me@example.com", Some("Accessibility feedback for Shadesblue")),
            "mailto:me@example.com?subject=Accessibility%20feedback%20for%20Shadesblue"
        );
        assert_eq!(mailto("me@example.com", None), "mailto:me@example.com");
    }
}
