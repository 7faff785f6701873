use crate::error::SetupError;

/// Normalize a documentation mount path.
///
/// The result has exactly one leading `/` and no trailing `/`, except for
/// the root path which stays `/`. An empty input is rejected.
///
/// ```
/// use apidoc_core::validate_path;
///
/// assert_eq!(validate_path("api-docs").unwrap(), "/api-docs");
/// assert_eq!(validate_path("//docs/").unwrap(), "/docs");
/// assert_eq!(validate_path("/").unwrap(), "/");
/// assert!(validate_path("").is_err());
/// assert!(validate_path("docs/:version").is_err());
/// ```
pub fn validate_path(path: &str) -> Result<String, SetupError> {
    if path.is_empty() {
        return Err(SetupError::InvalidPath {
            argument: "path",
            reason: "must not be empty",
        });
    }
    if !is_literal_path(path) {
        return Err(SetupError::InvalidPath {
            argument: "path",
            reason: "must not contain route parameters or wildcards",
        });
    }
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/{trimmed}"))
    }
}

/// Whether every segment of `path` is plain text for the router.
///
/// Segments starting with `:` or `*`, and any `{` or `}`, are parameter
/// syntax and make route registration panic.
pub fn is_literal_path(path: &str) -> bool {
    path.split('/').all(|segment| {
        !segment.starts_with(':')
            && !segment.starts_with('*')
            && !segment.contains(['{', '}'])
    })
}

/// Join a route prefix and a path with a single `/` between them.
///
/// An empty (or `/`) prefix yields the path with a leading slash; an empty
/// (or `/`) path yields the prefix itself.
pub fn join_path(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match (prefix.is_empty(), path.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{path}"),
        (false, true) => ensure_leading_slash(prefix),
        (false, false) => format!("{}/{path}", ensure_leading_slash(prefix)),
    }
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_single_slash() {
        assert_eq!(validate_path("docs").unwrap(), "/docs");
        assert_eq!(validate_path("/docs").unwrap(), "/docs");
    }

    #[test]
    fn collapses_repeated_leading_slashes() {
        assert_eq!(validate_path("///docs").unwrap(), "/docs");
    }

    #[test]
    fn strips_trailing_slash() {
        assert_eq!(validate_path("/docs/").unwrap(), "/docs");
        assert_eq!(validate_path("api/v1/docs//").unwrap(), "/api/v1/docs");
    }

    #[test]
    fn root_stays_root() {
        assert_eq!(validate_path("/").unwrap(), "/");
        assert_eq!(validate_path("//").unwrap(), "/");
    }

    #[test]
    fn empty_path_is_a_configuration_error() {
        let err = validate_path("").unwrap_err();
        assert!(matches!(err, SetupError::InvalidPath { argument: "path", .. }));
        assert!(err.to_string().contains("path"));
    }

    #[test]
    fn parameter_segments_are_rejected() {
        for path in ["docs/:v1", "/docs/{v}", "*rest", "docs/{*rest}", "api/v}"] {
            let err = validate_path(path).unwrap_err();
            assert!(
                matches!(err, SetupError::InvalidPath { argument: "path", .. }),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn colons_inside_segments_are_literal() {
        assert_eq!(validate_path("docs/v1:beta").unwrap(), "/docs/v1:beta");
        assert!(is_literal_path("/api-docs/swagger-ui-init.js"));
    }

    #[test]
    fn join_handles_roots_and_slashes() {
        assert_eq!(join_path("", "json"), "/json");
        assert_eq!(join_path("/", "/json"), "/json");
        assert_eq!(join_path("/docs/", "json"), "/docs/json");
        assert_eq!(join_path("/docs", ""), "/docs");
        assert_eq!(join_path("docs", "static/index.html"), "/docs/static/index.html");
        assert_eq!(join_path("", ""), "/");
    }
}
