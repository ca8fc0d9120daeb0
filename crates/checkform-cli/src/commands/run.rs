//! `run` command: interactive questionnaire

use crate::commands::{mount_with_spinner, spinner, SharedSource};
use crate::error::CliResult;
use crate::output::{print_info, print_notice, print_warning};
use crate::prompt::{Command, DialoguerPrompt, Prompt, HELP_TEXT};
use crate::render::{describe_directives, render_form};
use checkform_core::{CheckSource, FormController, FormError};
use tracing::{debug, info};

/// Counters for a finished session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub submissions: usize,
    pub successful: usize,
}

/// Run the questionnaire against `source` until the user quits
pub async fn execute(source: SharedSource) -> CliResult<()> {
    let mut controller = FormController::new(source);
    let mut prompt = DialoguerPrompt::new();

    print_info("Type 'help' for the list of commands.");
    let summary = run_session(&mut controller, &mut prompt).await?;
    info!(
        submissions = summary.submissions,
        successful = summary.successful,
        "Session finished"
    );
    Ok(())
}

/// Drive one form session with commands from `prompt`.
pub async fn run_session<S: CheckSource, P: Prompt>(
    controller: &mut FormController<S>,
    prompt: &mut P,
) -> CliResult<SessionSummary> {
    let mut summary = SessionSummary::default();

    // a failed fetch leaves the note on screen; 'reload' retries
    let _ = mount_with_spinner(controller).await;

    loop {
        print!("{}", render_form(controller.form()));

        match prompt.read_command()? {
            Command::Quit => break,
            Command::Help => println!("{}", HELP_TEXT),
            Command::Reload => {
                let _ = mount_with_spinner(controller).await;
            }
            Command::Submit => {
                let spinner = spinner("Submitting...");
                let outcome = controller.submit().await;
                spinner.finish_and_clear();

                match outcome {
                    Ok(_) => {
                        summary.submissions += 1;
                        summary.successful += 1;
                    }
                    Err(FormError::SubmitFailed(_)) => summary.submissions += 1,
                    Err(err) => print_warning(&err.to_string()),
                }
                if let Some(notice) = controller.form_mut().take_notice() {
                    print_notice(notice);
                }
            }
            Command::Key(key) => {
                if let Err(err) = controller.form_mut().handle_key(key) {
                    print_warning(&err.to_string());
                }
            }
            Command::Pick { item, answer } => {
                if let Err(err) = controller.form_mut().click(item - 1, answer) {
                    print_warning(&err.to_string());
                }
            }
            Command::Focus(item) => {
                if !controller.form_mut().focus(item - 1) {
                    print_warning(&format!("check {} cannot be focused", item));
                }
            }
        }

        let directives = controller.form_mut().take_directives();
        if let Some(description) = describe_directives(&directives) {
            debug!("{}", description);
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;
    use checkform_core::{FormPhase, MockCheckSource};
    use checkform_types::{Answer, CheckItem, CheckResult};

    fn source() -> MockCheckSource {
        MockCheckSource::with_checks(vec![
            CheckItem::new("bbb", 7, "Document type is supported"),
            CheckItem::new("aaa", 5, "Face on the picture matches face on the document"),
            CheckItem::new("ccc", 10, "Face is clearly visible"),
        ])
    }

    #[tokio::test]
    async fn test_keyboard_session_submits() {
        let mut controller = FormController::new(source());
        let mut prompt = ScriptedPrompt::new(&["1 yes", "down", "2", "submit"]);

        let summary = run_session(&mut controller, &mut prompt).await.unwrap();
        assert_eq!(
            summary,
            SessionSummary {
                submissions: 1,
                successful: 1
            }
        );
        assert_eq!(
            controller.source().submissions(),
            vec![vec![
                CheckResult::new("aaa", Answer::Yes),
                CheckResult::new("bbb", Answer::No),
            ]]
        );
        assert!(controller.form().items().iter().all(|i| i.result.is_none()));
    }

    #[tokio::test]
    async fn test_submit_before_ready_is_refused() {
        let mut controller = FormController::new(source());
        let mut prompt = ScriptedPrompt::new(&["1y", "submit", "down", "down"]);

        let summary = run_session(&mut controller, &mut prompt).await.unwrap();
        assert_eq!(summary.submissions, 0);
        assert!(controller.source().submissions().is_empty());
        // third check is still locked, so focus stops on the second
        assert_eq!(controller.form().focused(), Some(1));
    }

    #[tokio::test]
    async fn test_failed_fetch_then_quit() {
        let mut controller = FormController::new(MockCheckSource::failing_fetch());
        let mut prompt = ScriptedPrompt::new(&["1", "submit", "reload"]);

        let summary = run_session(&mut controller, &mut prompt).await.unwrap();
        assert_eq!(summary, SessionSummary::default());
        assert_eq!(controller.form().phase(), FormPhase::FetchFailed);
        assert_eq!(controller.source().fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_submit_counts_and_resets() {
        let mut controller = FormController::new(source().fail_submissions());
        let mut prompt = ScriptedPrompt::new(&["1 no", "submit"]);

        let summary = run_session(&mut controller, &mut prompt).await.unwrap();
        assert_eq!(
            summary,
            SessionSummary {
                submissions: 1,
                successful: 0
            }
        );
        assert!(!controller.form().can_submit());
    }
}
