//! CLI commands

pub mod list;
pub mod run;
pub mod submit;

use crate::config::SourceSettings;
use crate::error::CliResult;
use checkform_client::{FileCheckSource, HttpCheckSource};
use checkform_core::{CheckSource, FormController};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// Shared handle to whichever source the settings select
pub type SharedSource = Arc<dyn CheckSource>;

/// Build the Check Item Source described by `settings`.
pub fn build_source(settings: &SourceSettings) -> CliResult<SharedSource> {
    let source: SharedSource = match settings {
        SourceSettings::Http { endpoint, timeout } => {
            Arc::new(HttpCheckSource::new(endpoint, *timeout)?)
        }
        SourceSettings::File {
            checks_file,
            results_file,
        } => {
            let source = FileCheckSource::new(checks_file);
            match results_file {
                Some(path) => Arc::new(source.with_results_path(path)),
                None => Arc::new(source),
            }
        }
    };
    Ok(source)
}

/// Spinner shown while a remote call is outstanding.
pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Mount a controller, showing the loading note meanwhile.
pub(crate) async fn mount_with_spinner<S: CheckSource>(
    controller: &mut FormController<S>,
) -> CliResult<()> {
    let spinner = spinner(checkform_core::LOADING_MESSAGE);
    let outcome = controller.mount().await;
    spinner.finish_and_clear();
    Ok(outcome?)
}
