// brewbump-common/src/model/release.rs
use serde::Serialize;

/// The source artifact of a package's latest release, as reported by the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub version: String,
    pub url: String,
    pub filename: String,
    pub sha256: String,
}
