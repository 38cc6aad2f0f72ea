//! Commit hash and build date, stamped by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `"<date> (<commit>)"`, as shown by `--version`.
pub fn version_string() -> String {
    format!("{} ({})", BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_string_contains_commit() {
        assert!(version_string().contains(BUILD_COMMIT));
        assert!(version_string().starts_with(BUILD_DATE));
    }
}
