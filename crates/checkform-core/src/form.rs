//! Form session state
//!
//! [`VerificationForm`] owns the ordered items, the focus index and the
//! submit lifecycle. All transitions are synchronous. The two remote
//! round trips are split into a begin/finish pair so that the caller can
//! await the source in between (see [`crate::FormController`]).

use checkform_types::{Answer, CheckItem, CheckResult};
use tracing::{debug, info, warn};

use crate::error::{FormError, FormResult, SourceError};
use crate::focus::{self, FocusDirective, Key, KeyAction};
use crate::{gating, submission};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch the data. Please reload the page.";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Submitted Successfully.";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Error. Please resubmit the form";

/// Lifecycle phase of a form session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Waiting for the initial fetch
    Loading,
    /// Items loaded and answerable
    Ready,
    /// Initial fetch failed or returned nothing
    FetchFailed,
    /// A submission is in flight
    Submitting,
}

/// One-shot message for the user after a submit round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Submitted,
    SubmitFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Submitted => SUBMIT_SUCCESS_MESSAGE,
            Notice::SubmitFailed => SUBMIT_FAILURE_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Submitted)
    }
}

/// State of one questionnaire session
#[derive(Debug, Clone)]
pub struct VerificationForm {
    phase: FormPhase,
    items: Vec<CheckItem>,
    focused: Option<usize>,
    directives: Vec<FocusDirective>,
    notice: Option<Notice>,
}

impl Default for VerificationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationForm {
    /// Create a form waiting for its items.
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Loading,
            items: Vec::new(),
            focused: None,
            directives: Vec::new(),
            notice: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn items(&self) -> &[CheckItem] {
        &self.items
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Persistent status note shown instead of the items, if any.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.phase {
            FormPhase::Loading => Some(LOADING_MESSAGE),
            FormPhase::FetchFailed => Some(FETCH_FAILED_MESSAGE),
            FormPhase::Ready | FormPhase::Submitting => None,
        }
    }

    /// Apply the outcome of the initial fetch.
    ///
    /// Any previous item list is replaced. An empty list counts as a failed
    /// fetch since there is nothing to answer.
    pub fn load(&mut self, outcome: Result<Vec<CheckItem>, SourceError>) -> FormResult<()> {
        self.set_focus(None);
        self.notice = None;

        let outcome = outcome.and_then(|items| {
            if items.is_empty() {
                Err(SourceError::Unavailable("source returned no check items".into()))
            } else {
                Ok(items)
            }
        });

        match outcome {
            Ok(items) => {
                info!(count = items.len(), "Check form loaded");
                self.items = gating::initialize(items);
                self.phase = FormPhase::Ready;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "Failed to load check items");
                self.items.clear();
                self.phase = FormPhase::FetchFailed;
                Err(FormError::FetchFailed(error))
            }
        }
    }

    /// Record an answer for the item at `index`.
    pub fn select(&mut self, index: usize, answer: Answer) -> FormResult<()> {
        self.ensure_answerable()?;
        self.items = gating::select(&self.items, index, answer)?;

        // Focus must not stay on an item the cascade just locked.
        if let Some(focused) = self.focused {
            if self.items.get(focused).map_or(true, |item| item.disabled) {
                self.set_focus(None);
            }
        }
        Ok(())
    }

    /// Direct click on an option: focus the group, then select.
    pub fn click(&mut self, index: usize, answer: Answer) -> FormResult<()> {
        self.ensure_answerable()?;
        self.focus(index);
        self.select(index, answer)
    }

    /// Move focus to `index` if that item exists and is enabled.
    ///
    /// Returns whether focus is now on `index`.
    pub fn focus(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) if item.is_enabled() => {
                self.set_focus(Some(index));
                true
            }
            _ => false,
        }
    }

    /// Route a key press and apply its effect.
    pub fn handle_key(&mut self, key: Key) -> FormResult<KeyAction> {
        self.ensure_answerable()?;

        let action = focus::route_key(&self.items, self.focused, key);
        match action {
            KeyAction::Select { index, answer } => self.select(index, answer)?,
            KeyAction::MoveFocus { to } => self.set_focus(Some(to)),
            KeyAction::Ignored => debug!(?key, focused = ?self.focused, "Key ignored"),
        }
        Ok(action)
    }

    /// Drain focus directives emitted since the last call.
    pub fn take_directives(&mut self) -> Vec<FocusDirective> {
        std::mem::take(&mut self.directives)
    }

    /// Drain the pending one-shot notice.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn is_submit_ready(&self) -> bool {
        gating::is_submit_ready(&self.items)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Ready && self.is_submit_ready()
    }

    /// Start a submission and return the results to send.
    ///
    /// The form stays in [`FormPhase::Submitting`] until
    /// [`finish_submit`](Self::finish_submit) is called.
    pub fn begin_submit(&mut self) -> FormResult<Vec<CheckResult>> {
        match self.phase {
            FormPhase::Submitting => return Err(FormError::SubmitInFlight),
            FormPhase::Loading | FormPhase::FetchFailed => return Err(FormError::NotLoaded),
            FormPhase::Ready => {}
        }
        if !self.is_submit_ready() {
            return Err(FormError::SubmitNotReady);
        }

        self.phase = FormPhase::Submitting;
        let results = submission::collect_results(&self.items);
        debug!(count = results.len(), "Submitting check results");
        Ok(results)
    }

    /// Apply the outcome of a submission.
    ///
    /// The form is reset to its initial state whether or not the source
    /// accepted the results.
    pub fn finish_submit(
        &mut self,
        outcome: Result<Vec<CheckResult>, SourceError>,
    ) -> FormResult<Vec<CheckResult>> {
        let items = std::mem::take(&mut self.items);
        self.items = gating::initialize(items);
        self.set_focus(None);
        self.phase = FormPhase::Ready;

        match outcome {
            Ok(accepted) => {
                info!(accepted = accepted.len(), "Check results submitted");
                self.notice = Some(Notice::Submitted);
                Ok(accepted)
            }
            Err(error) => {
                warn!(%error, "Check result submission failed");
                self.notice = Some(Notice::SubmitFailed);
                Err(FormError::SubmitFailed(error))
            }
        }
    }

    fn ensure_answerable(&self) -> FormResult<()> {
        match self.phase {
            FormPhase::Ready => Ok(()),
            FormPhase::Submitting => Err(FormError::SubmitInFlight),
            FormPhase::Loading | FormPhase::FetchFailed => Err(FormError::NotLoaded),
        }
    }

    fn set_focus(&mut self, to: Option<usize>) {
        let directives = focus::focus_directives(self.focused, to);
        if !directives.is_empty() {
            debug!(from = ?self.focused, ?to, "Focus moved");
        }
        self.directives.extend(directives);
        self.focused = to;
    }
}
