// src/utils.rs
use web_sys::window;

/// Get the base URL for the application
/// This handles both local development and GitHub Pages deployment
pub fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(location) = window.location().pathname() {
            // Check if we're on GitHub Pages (path starts with /leti-tour/)
            if location.starts_with("/leti-tour/") {
                return "/leti-tour".to_string();
            }
        }
    }
    // Local development - no base path needed
    String::new()
}

/// Build a resource URL with the correct base path
pub fn resource_url(path: &str) -> String {
    join_base(&get_base_url(), path)
}

fn join_base(base: &str, path: &str) -> String {
    let clean_path = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{}", clean_path)
    } else {
        format!("{}/{}", base, clean_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base_formatting() {
        // With and without a leading slash on the resource path
        assert_eq!(
            join_base("", "/public/tour/manifest.json"),
            "/public/tour/manifest.json"
        );
        assert_eq!(
            join_base("", "public/tour/manifest.json"),
            "/public/tour/manifest.json"
        );

        // Deployed under a repo prefix
        assert_eq!(
            join_base("/leti-tour", "public/tour/manifest.json"),
            "/leti-tour/public/tour/manifest.json"
        );
    }
}
