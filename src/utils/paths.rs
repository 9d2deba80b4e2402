//! Path and slug helpers shared by the route and generation layers.

/// Append a trailing slash unless the path already ends with one.
///
/// # Examples
/// ```
/// # use llmstxt::utils::ensure_trailing_slash;
/// assert_eq!(ensure_trailing_slash("/docs"), "/docs/");
/// assert_eq!(ensure_trailing_slash("/docs/"), "/docs/");
/// assert_eq!(ensure_trailing_slash(""), "/");
/// ```
pub fn ensure_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Remove a single trailing slash, keeping the root path intact.
pub fn strip_trailing_slash(path: &str) -> &str {
    if path == "/" {
        path
    } else {
        path.strip_suffix('/').unwrap_or(path)
    }
}

/// Does the final path segment carry a file extension?
///
/// Mirrors the `\.\w+$` check used when deciding whether a request path
/// addresses an asset rather than a page.
pub fn has_file_extension(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    match last_segment.rsplit_once('.') {
        Some((_, ext)) => !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_added_once() {
        assert_eq!(ensure_trailing_slash("/base"), "/base/");
        assert_eq!(ensure_trailing_slash("/base/"), "/base/");
        assert_eq!(ensure_trailing_slash("/"), "/");
    }

    #[test]
    fn strip_keeps_root() {
        assert_eq!(strip_trailing_slash("/"), "/");
        assert_eq!(strip_trailing_slash("/docs/"), "/docs");
        assert_eq!(strip_trailing_slash("/docs"), "/docs");
    }

    #[test]
    fn extension_detection() {
        assert!(has_file_extension("/styles/site.css"));
        assert!(has_file_extension("/favicon.ico"));
        assert!(!has_file_extension("/guides/install"));
        assert!(!has_file_extension("/guides/install/"));
        assert!(!has_file_extension("/v1.2/guide"));
    }
}
