//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("FLAPPY_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("FLAPPY_BUILD_DATE");

/// Long version string shown by `--version`, e.g. `0.1.0 (a1b2c3d 2026-10-19)`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FLAPPY_BUILD_COMMIT"),
    " ",
    env!("FLAPPY_BUILD_DATE"),
    ")"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_format() {
        // Should be 7 chars or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_long_version_contains_package_version() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(LONG_VERSION.contains(BUILD_COMMIT));
        assert!(LONG_VERSION.ends_with(&format!("{BUILD_DATE})")));
    }
}
