//! Async driver for a form session
//!
//! Binds a [`VerificationForm`] to a [`CheckSource`]. There is exactly one
//! fetch per mount and at most one submission at a time; both are awaited
//! directly with no retry.

use tracing::info;

use crate::error::FormResult;
use crate::form::VerificationForm;
use crate::source::{fetch_ordered_checks, save_check_results, CheckSource};
use checkform_types::CheckResult;

/// Form session bound to a Check Item Source
pub struct FormController<S> {
    source: S,
    form: VerificationForm,
}

impl<S: CheckSource> FormController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            form: VerificationForm::new(),
        }
    }

    pub fn form(&self) -> &VerificationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut VerificationForm {
        &mut self.form
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch, order and load the check items.
    pub async fn mount(&mut self) -> FormResult<()> {
        self.form = VerificationForm::new();
        let outcome = fetch_ordered_checks(&self.source).await;
        self.form.load(outcome)
    }

    /// Submit the current answers.
    ///
    /// On return the form has been reset and holds a notice for the user,
    /// whatever the outcome of the remote call.
    pub async fn submit(&mut self) -> FormResult<Vec<CheckResult>> {
        let results = self.form.begin_submit()?;
        info!(count = results.len(), "Sending check results");
        let outcome = save_check_results(&self.source, &results).await;
        self.form.finish_submit(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::form::{FormPhase, Notice};
    use crate::mocks::MockCheckSource;
    use checkform_types::{Answer, CheckItem};

    fn source() -> MockCheckSource {
        MockCheckSource::with_checks(vec![
            CheckItem::new("ccc", 10, "Face is clearly visible"),
            CheckItem::new("aaa", 5, "Face on the picture matches face on the document"),
            CheckItem::new("bbb", 7, "Document type is supported"),
        ])
    }

    #[tokio::test]
    async fn test_mount_orders_items() {
        let mut controller = FormController::new(source());
        controller.mount().await.unwrap();

        let priorities: Vec<i64> = controller.form().items().iter().map(|i| i.priority).collect();
        assert_eq!(priorities, vec![5, 7, 10]);
        assert_eq!(controller.source().fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_mount_failure() {
        let mut controller = FormController::new(MockCheckSource::failing_fetch());
        let err = controller.mount().await.unwrap_err();

        assert!(matches!(err, FormError::FetchFailed(_)));
        assert_eq!(controller.form().phase(), FormPhase::FetchFailed);
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut controller = FormController::new(source());
        controller.mount().await.unwrap();
        controller.form_mut().select(0, Answer::No).unwrap();

        let accepted = controller.submit().await.unwrap();
        assert_eq!(accepted, vec![CheckResult::new("aaa", Answer::No)]);
        assert_eq!(
            controller.source().submissions(),
            vec![vec![CheckResult::new("aaa", Answer::No)]]
        );

        let form = controller.form_mut();
        assert_eq!(form.take_notice(), Some(Notice::Submitted));
        assert_eq!(form.take_notice(), None);
        assert!(!form.items()[0].disabled);
        assert!(form.items()[1..].iter().all(|item| item.disabled));
        assert!(form.items().iter().all(|item| item.result.is_none()));
    }

    #[tokio::test]
    async fn test_submit_failure_still_resets() {
        let mut controller = FormController::new(source().fail_submissions());
        controller.mount().await.unwrap();
        for index in 0..3 {
            controller.form_mut().select(index, Answer::Yes).unwrap();
        }

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, FormError::SubmitFailed(_)));
        assert_eq!(controller.source().submissions()[0].len(), 3);

        let form = controller.form_mut();
        assert_eq!(form.take_notice(), Some(Notice::SubmitFailed));
        assert_eq!(form.phase(), FormPhase::Ready);
        assert!(!form.can_submit());
    }

    #[tokio::test]
    async fn test_submit_not_ready_does_not_call_source() {
        let mut controller = FormController::new(source());
        controller.mount().await.unwrap();

        assert_eq!(controller.submit().await, Err(FormError::SubmitNotReady));
        assert!(controller.source().submissions().is_empty());
    }
}
