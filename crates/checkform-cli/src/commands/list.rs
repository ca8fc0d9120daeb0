//! `list` command

use crate::commands::{mount_with_spinner, SharedSource};
use crate::error::CliResult;
use crate::output::{print_output, OutputFormat};
use checkform_core::FormController;
use checkform_types::CheckItem;
use serde::Serialize;
use tabled::Tabled;

/// Table row for check display
#[derive(Debug, Serialize, Tabled)]
pub struct CheckRow {
    /// Display position, 1-based
    #[tabled(rename = "#")]
    pub position: usize,
    /// Check ID
    pub id: String,
    /// Priority
    pub priority: i64,
    /// Prompt text
    pub description: String,
}

impl CheckRow {
    fn new(index: usize, item: &CheckItem) -> Self {
        Self {
            position: index + 1,
            id: item.id.to_string(),
            priority: item.priority,
            description: item.description.clone(),
        }
    }
}

/// Fetch the checks and print them in display order
pub async fn execute(source: SharedSource, format: OutputFormat) -> CliResult<()> {
    let mut controller = FormController::new(source);
    mount_with_spinner(&mut controller).await?;

    let rows = controller
        .form()
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| CheckRow::new(index, item))
        .collect();
    print_output(rows, format)
}
