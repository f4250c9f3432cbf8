use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEMANTIC_VERSION: Regex =
        Regex::new(r"([0-9]+)\.([0-9]+)\.([0-9]+)\+commit\.[^.]*").unwrap();
    static ref RELEASE_VERSION: Regex = Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+").unwrap();
}

/// Finds `MAJOR.MINOR.PATCH+commit.<hash>` in the compiler version output.
pub fn extract_semantic_version(full_version: &str) -> Option<&str> {
    SEMANTIC_VERSION.find(full_version).map(|m| m.as_str())
}

/// Finds the first `MAJOR.MINOR.PATCH` triple in the compiler version output.
pub fn extract_release_version(full_version: &str) -> Option<semver::Version> {
    RELEASE_VERSION
        .find(full_version)
        .and_then(|m| semver::Version::parse(m.as_str()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOLC_VERSION_OUTPUT: &str = "solc, the solidity compiler commandline interface\n\
        Version: 0.4.24+commit.e67f0147.Linux.g++\n";

    #[test]
    fn semantic_version_from_solc_output() {
        assert_eq!(
            extract_semantic_version(SOLC_VERSION_OUTPUT),
            Some("0.4.24+commit.e67f0147")
        );
        assert_eq!(
            extract_semantic_version("Version: 0.8.19+commit.7dd6d404.Darwin.appleclang"),
            Some("0.8.19+commit.7dd6d404")
        );
    }

    #[test]
    fn semantic_version_requires_commit() {
        assert_eq!(extract_semantic_version("Version: 0.4.24"), None);
        assert_eq!(extract_semantic_version(""), None);
        assert_eq!(extract_semantic_version("not a compiler"), None);
    }

    #[test]
    fn release_version() {
        assert_eq!(
            extract_release_version(SOLC_VERSION_OUTPUT),
            Some(semver::Version::new(0, 4, 24))
        );
        assert_eq!(extract_release_version("Version: unknown"), None);
    }
}
