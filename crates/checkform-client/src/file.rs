//! File-backed Check Item Source
//!
//! Checks are read from a JSON or YAML file on every fetch. Submitted
//! results are echoed back as accepted and, when a results path is set,
//! written there as pretty JSON.

use async_trait::async_trait;
use checkform_core::{CheckSource, SourceError};
use checkform_types::{CheckItem, CheckResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct FileCheckSource {
    checks_path: PathBuf,
    results_path: Option<PathBuf>,
}

impl FileCheckSource {
    pub fn new(checks_path: impl Into<PathBuf>) -> Self {
        Self {
            checks_path: checks_path.into(),
            results_path: None,
        }
    }

    /// Write submitted results to `path`.
    pub fn with_results_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_path = Some(path.into());
        self
    }

    async fn read_checks(&self) -> ClientResult<Vec<CheckItem>> {
        let contents = tokio::fs::read_to_string(&self.checks_path).await?;
        debug!(path = %self.checks_path.display(), "Read checks file");
        parse_checks(&self.checks_path, &contents)
    }

    async fn write_results(&self, results: &[CheckResult]) -> ClientResult<()> {
        if let Some(path) = &self.results_path {
            let json = serde_json::to_string_pretty(results)?;
            tokio::fs::write(path, json).await?;
            info!(path = %path.display(), count = results.len(), "Wrote check results");
        }
        Ok(())
    }
}

fn parse_checks(path: &Path, contents: &str) -> ClientResult<Vec<CheckItem>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_str(contents)?),
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(contents)?),
        _ => Err(ClientError::UnsupportedFile(path.display().to_string())),
    }
}

#[async_trait]
impl CheckSource for FileCheckSource {
    async fn fetch_checks(&self) -> Result<Vec<CheckItem>, SourceError> {
        Ok(self.read_checks().await?)
    }

    async fn submit_check_results(
        &self,
        results: &[CheckResult],
    ) -> Result<Vec<CheckResult>, SourceError> {
        self.write_results(results).await?;
        Ok(results.to_vec())
    }
}
