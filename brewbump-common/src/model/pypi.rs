// brewbump-common/src/model/pypi.rs
//! The slice of the PyPI JSON API (`/pypi/<project>/json`) that brewbump reads.
use std::collections::HashMap;

use serde::Deserialize;

pub const SDIST_PACKAGETYPE: &str = "sdist";
pub const SDIST_EXTENSION: &str = ".tar.gz";

#[derive(Debug, Clone, Deserialize)]
pub struct PypiProject {
    pub info: PypiInfo,
    /// Every published version mapped to its files. PyPI may omit this key.
    #[serde(default)]
    pub releases: HashMap<String, Vec<PypiFile>>,
    /// Files of the latest version only.
    #[serde(default)]
    pub urls: Vec<PypiFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PypiInfo {
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PypiFile {
    pub filename: String,
    pub url: String,
    pub packagetype: String,
    pub digests: PypiDigests,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PypiDigests {
    pub sha256: String,
}

impl PypiFile {
    pub fn is_source_archive(&self) -> bool {
        self.packagetype == SDIST_PACKAGETYPE && self.filename.ends_with(SDIST_EXTENSION)
    }
}

impl PypiProject {
    pub fn latest_version(&self) -> &str {
        &self.info.version
    }

    /// Files published for the latest version, preferring `releases` over `urls`.
    pub fn latest_files(&self) -> &[PypiFile] {
        match self.releases.get(self.latest_version()) {
            Some(files) if !files.is_empty() => files,
            _ => &self.urls,
        }
    }

    /// The `.tar.gz` source distribution of the latest version, if one was uploaded.
    pub fn latest_source_archive(&self) -> Option<&PypiFile> {
        self.latest_files().iter().find(|f| f.is_source_archive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(json: &str) -> PypiProject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn picks_sdist_over_wheel() {
        let p = project(
            r#"{
                "info": {"version": "2.0.0"},
                "releases": {
                    "2.0.0": [
                        {"filename": "pkg-2.0.0-py3-none-any.whl", "url": "https://x/pkg.whl",
                         "packagetype": "bdist_wheel", "digests": {"sha256": "aa"}},
                        {"filename": "pkg-2.0.0.tar.gz", "url": "https://x/pkg-2.0.0.tar.gz",
                         "packagetype": "sdist", "digests": {"sha256": "bb", "md5": "cc"}}
                    ]
                }
            }"#,
        );
        let sdist = p.latest_source_archive().unwrap();
        assert_eq!(sdist.filename, "pkg-2.0.0.tar.gz");
        assert_eq!(sdist.digests.sha256, "bb");
    }

    #[test]
    fn zip_sdist_is_not_a_source_archive() {
        let p = project(
            r#"{
                "info": {"version": "1.0"},
                "releases": {"1.0": [
                    {"filename": "pkg-1.0.zip", "url": "https://x/pkg-1.0.zip",
                     "packagetype": "sdist", "digests": {"sha256": "aa"}}
                ]}
            }"#,
        );
        assert!(p.latest_source_archive().is_none());
    }

    #[test]
    fn falls_back_to_urls_when_releases_missing() {
        let p = project(
            r#"{
                "info": {"version": "3.1.4"},
                "urls": [
                    {"filename": "pkg-3.1.4.tar.gz", "url": "https://x/pkg-3.1.4.tar.gz",
                     "packagetype": "sdist", "digests": {"sha256": "dd"}}
                ]
            }"#,
        );
        assert_eq!(p.latest_source_archive().unwrap().digests.sha256, "dd");
    }

    #[test]
    fn missing_version_is_a_parse_error() {
        let res: Result<PypiProject, _> = serde_json::from_str(r#"{"info": {}}"#);
        assert!(res.is_err());
    }
}
