use colored::Colorize;
use std::path::Path;

use crate::cli::driver::RunSummary;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// `<file> - error: <message>`, with the full context chain of `error`.
    pub fn format_failure(&self, file: &Path, error: &anyhow::Error) -> String {
        let file = file.display().to_string();
        let message = format!("{error:#}");
        if self.color {
            format!("{} - {}: {}", file.cyan(), "error".red().bold(), message)
        } else {
            format!("{file} - error: {message}")
        }
    }

    /// `<module id>: <dep>, <dep>` (`(none)` for a module without imports).
    pub fn format_dependencies(&self, module_id: &str, dependencies: &[String]) -> String {
        let list = if dependencies.is_empty() {
            "(none)".to_string()
        } else {
            dependencies.join(", ")
        };
        if self.color {
            format!("{}: {}", module_id.bold(), list)
        } else {
            format!("{module_id}: {list}")
        }
    }

    /// One-line count of rewritten and failed modules.
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        let failed = summary.failed();
        let line = format!(
            "{} module(s) rewritten, {} failed",
            summary.succeeded(),
            failed
        );
        match (self.color, failed) {
            (false, _) => line,
            (true, 0) => line.green().to_string(),
            (true, _) => line.red().to_string(),
        }
    }
}
