//! `submit` command: answer and submit without prompting

use crate::commands::{mount_with_spinner, spinner, SharedSource};
use crate::error::{CliError, CliResult};
use crate::output::{print_notice, print_output, OutputFormat};
use checkform_core::{FormController, FormError, GatingError};
use checkform_types::{Answer, CheckResult};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

/// Table row for an accepted result
#[derive(Debug, Serialize, Tabled)]
struct ResultRow {
    check: String,
    result: String,
}

impl From<CheckResult> for ResultRow {
    fn from(result: CheckResult) -> Self {
        Self {
            check: result.check_id.to_string(),
            result: result.result.to_string(),
        }
    }
}

/// Apply `answers` in display order, then submit them.
pub async fn execute(
    source: SharedSource,
    answers: &[Answer],
    format: OutputFormat,
) -> CliResult<()> {
    let mut controller = FormController::new(source);
    mount_with_spinner(&mut controller).await?;

    let count = controller.form().items().len();
    if answers.len() > count {
        return Err(CliError::InvalidInput(format!(
            "{} answers given but only {} checks exist",
            answers.len(),
            count
        )));
    }

    for (index, answer) in answers.iter().enumerate() {
        debug!(index, %answer, "Applying answer");
        controller
            .form_mut()
            .select(index, *answer)
            .map_err(|err| match err {
                FormError::Gating(GatingError::ItemDisabled { .. }) => {
                    CliError::InvalidInput(format!(
                        "check {} is locked by an earlier 'no'",
                        index + 1
                    ))
                }
                other => other.into(),
            })?;
    }

    let spinner = spinner("Submitting...");
    let outcome = controller.submit().await;
    spinner.finish_and_clear();

    let accepted = outcome?;
    if let (Some(notice), OutputFormat::Table) = (controller.form_mut().take_notice(), format) {
        print_notice(notice);
    }
    print_output(accepted.into_iter().map(ResultRow::from).collect(), format)
}
