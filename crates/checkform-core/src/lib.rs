//! checkform Core - questionnaire logic without a rendering surface
//!
//! The form is a flat, ordered list of check items. Answering "yes" opens
//! the next item, answering "no" closes everything after it, and the form
//! can be submitted once the user has either cleared every gate or hit a
//! terminal "no".
//!
//! ## Pipeline
//!
//! 1. **Fetch** - [`CheckSource::fetch_checks`] loads the raw items
//! 2. **Order** - [`order_by_priority`] sorts them by ascending priority
//! 3. **Gate** - [`gating::select`] recomputes the enabled suffix per answer
//! 4. **Route keys** - [`focus::route_key`] turns key presses into actions
//! 5. **Submit** - [`collect_results`] keeps enabled, answered items only
//!
//! [`VerificationForm`] holds the session state between those steps and
//! [`FormController`] drives the two remote round trips.

#![deny(unsafe_code)]

pub mod controller;
pub mod error;
pub mod focus;
pub mod form;
pub mod gating;
pub mod mocks;
pub mod ordering;
pub mod source;
pub mod submission;

pub use controller::FormController;
pub use error::{FormError, FormResult, GatingError, SourceError};
pub use focus::{route_key, FocusDirective, Key, KeyAction};
pub use form::{
    FormPhase, Notice, VerificationForm, FETCH_FAILED_MESSAGE, LOADING_MESSAGE,
    SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};
pub use gating::is_submit_ready;
pub use mocks::MockCheckSource;
pub use ordering::order_by_priority;
pub use source::{fetch_ordered_checks, save_check_results, CheckSource};
pub use submission::collect_results;

pub use checkform_types::{Answer, CheckId, CheckItem, CheckResult};
