//! Dataset file-name helpers
//!
//! Graph files are named `<dataset>.<ext>`; the extension tells a loader
//! which reader to use. These helpers work on `/`-separated strings so the
//! results do not depend on the host platform.

/// File name component of `path` (everything after the last `/`)
pub fn extract_filename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

/// Dataset name of `filename` (everything before the last `.`)
pub fn extract_dataset(filename: &str) -> &str {
    filename.rsplit_once('.').map_or(filename, |(stem, _)| stem)
}

/// Returns true for Matrix Market files (`.mtx` or `.mmio`)
pub fn is_market(filename: &str) -> bool {
    filename.ends_with(".mtx") || filename.ends_with(".mmio")
}

/// Returns true for binary CSR dumps (`.csr`)
pub fn is_binary_csr(filename: &str) -> bool {
    filename.ends_with(".csr")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract() {
        assert_eq!(extract_filename("data/road/usa.mtx"), "usa.mtx");
        assert_eq!(extract_filename("usa.mtx"), "usa.mtx");
        assert_eq!(extract_dataset("usa.mtx"), "usa");
        assert_eq!(extract_dataset("web.google.csr"), "web.google");
        assert_eq!(extract_dataset("README"), "README");
        assert_eq!(extract_dataset(extract_filename("a/b/c.mmio")), "c");
    }

    #[test]
    fn test_kind() {
        assert!(is_market("g.mtx"));
        assert!(is_market("g.mmio"));
        assert!(!is_market("g.csr"));
        assert!(is_binary_csr("g.csr"));
        assert!(!is_binary_csr("csr"));
        assert!(!is_market(""));
    }
}
