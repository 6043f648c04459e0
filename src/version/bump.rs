//! Semver bump arithmetic.

use semver::Version;

/// Which component of the version to bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Patch,
    Minor,
    Major,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Patch => "Patch",
            BumpKind::Minor => "Minor",
            BumpKind::Major => "Major",
        }
    }
}

/// Compute the bumped version.
///
/// - patch: `MAJOR.MINOR.(PATCH+1)`
/// - minor: `MAJOR.(MINOR+1).0`
/// - major: `(MAJOR+1).0.0`
pub fn apply_bump(version: &Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Patch => Version::new(version.major, version.minor, version.patch + 1),
        BumpKind::Minor => Version::new(version.major, version.minor + 1, 0),
        BumpKind::Major => Version::new(version.major + 1, 0, 0),
    }
}
