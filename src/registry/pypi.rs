//! PyPI index checker for verifying package release history.

use crate::types::{PypivetError, ReleaseCheck, Result};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, trace};

/// PyPI JSON API response for a project.
///
/// Response format: https://warehouse.pypa.io/api-reference/json.html
/// Only the release mapping is consulted; the rest of the document is
/// ignored during deserialization.
#[derive(Debug, Deserialize)]
struct ProjectMetadata {
    releases: HashMap<String, Vec<serde_json::Value>>,
}

/// Metadata lookup seam so the driver can run against a fake index in tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReleaseSource {
    /// Look up a package's release history.
    ///
    /// A not-found response from the index is an expected outcome, not an
    /// error; transport and parse failures are errors.
    async fn check_package(&self, name: &str) -> Result<ReleaseCheck>;
}

/// Checker querying the PyPI JSON API.
pub struct PypiChecker {
    client: Client,
    index_url: String,
}

impl PypiChecker {
    /// Create a new checker against the given index base URL.
    pub fn new(index_url: &str, timeout_secs: u64) -> Result<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            index_url: index_url.trim_end_matches('/').to_string(),
        })
    }

    fn project_url(&self, name: &str) -> String {
        format!("{}/pypi/{}/json", self.index_url, urlencoding::encode(name))
    }
}

#[async_trait]
impl ReleaseSource for PypiChecker {
    async fn check_package(&self, name: &str) -> Result<ReleaseCheck> {
        let url = self.project_url(name);
        trace!("Checking index: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("Package NOT FOUND: {}", name);
            return Ok(ReleaseCheck::NotFound {
                name: name.to_string(),
            });
        }

        if !status.is_success() {
            return Err(PypivetError::IndexError {
                name: name.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        let metadata: ProjectMetadata = serde_json::from_str(&body)?;

        debug!("Package {} has {} releases", name, metadata.releases.len());
        Ok(ReleaseCheck::Exists {
            name: name.to_string(),
            release_count: metadata.releases.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_metadata() {
        let body = r#"{
            "info": {"name": "requests", "summary": "HTTP for Humans."},
            "releases": {
                "2.31.0": [{"filename": "requests-2.31.0-py3-none-any.whl"}],
                "2.32.0": [],
                "2.32.1": [{"filename": "requests-2.32.1.tar.gz"}]
            },
            "urls": []
        }"#;

        let metadata: ProjectMetadata = serde_json::from_str(body).unwrap();
        assert_eq!(metadata.releases.len(), 3);
    }

    #[test]
    fn test_parse_rejects_missing_releases() {
        let body = r#"{"info": {"name": "requests"}}"#;
        assert!(serde_json::from_str::<ProjectMetadata>(body).is_err());
    }

    #[test]
    fn test_project_url_encodes_name() {
        let checker = PypiChecker::new("https://pypi.org/", 30).unwrap();

        assert_eq!(
            checker.project_url("requests"),
            "https://pypi.org/pypi/requests/json"
        );
        assert_eq!(
            checker.project_url("weird name"),
            "https://pypi.org/pypi/weird%20name/json"
        );
    }
}
