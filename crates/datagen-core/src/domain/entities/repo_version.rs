use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::{CommitPrefix, VersionLabel};

/// Version metadata stamped into the artifact for `--version` reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoVersion {
    pub label: VersionLabel,
    pub commit: CommitPrefix,
}

impl RepoVersion {
    pub fn new(label: VersionLabel, commit: CommitPrefix) -> Self {
        Self { label, commit }
    }
}

impl fmt::Display for RepoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "untagged ({})", self.commit)
        } else {
            write!(f, "{} ({})", self.label, self.commit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_tag() {
        let commit = CommitPrefix::from_raw("abcdef1234").unwrap();
        let tagged = RepoVersion::new(VersionLabel::from_raw("v1.2.3"), commit.clone());
        let untagged = RepoVersion::new(VersionLabel::empty(), commit);
        assert_eq!(tagged.to_string(), "v1.2.3 (abcdef1)");
        assert_eq!(untagged.to_string(), "untagged (abcdef1)");
    }
}
