//! In-memory Check Item Source for tests and demos.

use async_trait::async_trait;
use checkform_types::{CheckItem, CheckResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::SourceError;
use crate::source::CheckSource;

/// Mock source with canned checks.
///
/// Either call can be made to fail. Every submission is recorded.
#[derive(Debug, Default)]
pub struct MockCheckSource {
    checks: Vec<CheckItem>,
    fail_fetch: bool,
    fail_submit: bool,
    fetch_count: AtomicUsize,
    submissions: Mutex<Vec<Vec<CheckResult>>>,
}

impl MockCheckSource {
    pub fn with_checks(checks: Vec<CheckItem>) -> Self {
        Self {
            checks,
            ..Self::default()
        }
    }

    /// A source whose fetch always fails.
    pub fn failing_fetch() -> Self {
        Self {
            fail_fetch: true,
            ..Self::default()
        }
    }

    /// Make every submission fail.
    pub fn fail_submissions(mut self) -> Self {
        self.fail_submit = true;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Submissions received so far, including failed ones.
    pub fn submissions(&self) -> Vec<Vec<CheckResult>> {
        self.submissions
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CheckSource for MockCheckSource {
    async fn fetch_checks(&self) -> Result<Vec<CheckItem>, SourceError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(SourceError::Unavailable("mock fetch failure".into()));
        }
        Ok(self.checks.clone())
    }

    async fn submit_check_results(
        &self,
        results: &[CheckResult],
    ) -> Result<Vec<CheckResult>, SourceError> {
        if let Ok(mut submissions) = self.submissions.lock() {
            submissions.push(results.to_vec());
        }
        if self.fail_submit {
            return Err(SourceError::Unavailable("mock submit failure".into()));
        }
        Ok(results.to_vec())
    }
}
