//! Check Item Source seam and the service functions built on it

use async_trait::async_trait;
use checkform_types::{CheckItem, CheckResult};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::SourceError;
use crate::{gating, ordering};

/// Remote collaborator that provides check items and accepts results.
#[async_trait]
pub trait CheckSource: Send + Sync {
    /// Fetch the raw, unordered check items.
    async fn fetch_checks(&self) -> Result<Vec<CheckItem>, SourceError>;

    /// Persist results, returning the records the source accepted.
    async fn submit_check_results(
        &self,
        results: &[CheckResult],
    ) -> Result<Vec<CheckResult>, SourceError>;
}

#[async_trait]
impl<S: CheckSource + ?Sized> CheckSource for Arc<S> {
    async fn fetch_checks(&self) -> Result<Vec<CheckItem>, SourceError> {
        (**self).fetch_checks().await
    }

    async fn submit_check_results(
        &self,
        results: &[CheckResult],
    ) -> Result<Vec<CheckResult>, SourceError> {
        (**self).submit_check_results(results).await
    }
}

/// Fetch items, order them by priority and put them in their initial
/// gating state.
pub async fn fetch_ordered_checks<S: CheckSource + ?Sized>(
    source: &S,
) -> Result<Vec<CheckItem>, SourceError> {
    let items = source.fetch_checks().await?;
    debug!(count = items.len(), "Fetched check items");
    Ok(gating::initialize(ordering::order_by_priority(&items)))
}

/// Forward results to the source.
pub async fn save_check_results<S: CheckSource + ?Sized>(
    source: &S,
    results: &[CheckResult],
) -> Result<Vec<CheckResult>, SourceError> {
    let accepted = source.submit_check_results(results).await?;
    info!(
        submitted = results.len(),
        accepted = accepted.len(),
        "Check results saved"
    );
    Ok(accepted)
}
