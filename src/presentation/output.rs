use crate::domain::model::Outcome;
use colored::Colorize;

/// The line printed for an outcome: the translation, or `Error: <content>`.
pub fn format_outcome(outcome: &Outcome, color: bool) -> String {
    match outcome {
        Outcome::Translated(text) => text.clone(),
        Outcome::Failed { content, .. } => {
            let prefix = if color {
                "Error:".red().bold().to_string()
            } else {
                "Error:".to_string()
            };
            format!("{} {}", prefix, content)
        }
    }
}
