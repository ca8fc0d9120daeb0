//! Terminal rendering of a form session

use checkform_core::{FocusDirective, FormPhase, VerificationForm};
use checkform_types::{Answer, CheckItem};
use colored::*;
use std::fmt::Write;

/// Render the whole form as it should appear after the last event.
pub fn render_form(form: &VerificationForm) -> String {
    if let Some(status) = form.status_message() {
        return format!("{}\n", status.dimmed());
    }

    let mut out = String::new();
    for (index, item) in form.items().iter().enumerate() {
        let _ = writeln!(out, "{}", render_item(index, item, form.focused() == Some(index)));
    }

    let submit = match form.phase() {
        FormPhase::Submitting => "Submitting...".yellow(),
        _ if form.can_submit() => "[ Submit ] ready, type 'submit'".green(),
        _ => "[ Submit ] disabled".dimmed(),
    };
    let _ = writeln!(out, "{}", submit);
    out
}

fn render_item(index: usize, item: &CheckItem, focused: bool) -> String {
    let marker = if focused { ">".cyan().bold() } else { " ".normal() };
    let title = format!("{}. {}", index + 1, item.description);

    let options = Answer::OPTIONS
        .iter()
        .enumerate()
        .map(|(pos, answer)| {
            let mark = if item.result == Some(*answer) { "x" } else { " " };
            format!("[{}] ({}) {}", pos + 1, mark, answer.label())
        })
        .collect::<Vec<_>>()
        .join("   ");

    if item.disabled {
        format!("{} {}\n     {}", marker, title.dimmed(), options.dimmed())
    } else if focused {
        format!("{} {}\n     {}", marker, title.bold(), options)
    } else {
        format!("{} {}\n     {}", marker, title, options)
    }
}

/// Describe focus directives for the log.
pub fn describe_directives(directives: &[FocusDirective]) -> Option<String> {
    directives
        .iter()
        .rev()
        .find_map(|directive| match directive {
            FocusDirective::Focus(index) => Some(format!("focus on check {}", index + 1)),
            FocusDirective::Blur(_) => None,
        })
}
