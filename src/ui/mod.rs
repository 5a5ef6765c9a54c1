//! CLI UI utilities: colored status lines and report rendering.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::checker::CheckReport;

/// Get the current terminal width.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(100)
}

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
}

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
    }
}

/// Print a styled status message.
pub fn print_status(status: Status, msg: &str) {
    let icon = status_icon(status);
    match status {
        Status::Success => println!("{} {}", icon.green().bold(), msg),
        Status::Error => println!("{} {}", icon.red().bold(), msg),
        Status::Warning => println!("{} {}", icon.yellow().bold(), msg),
        Status::Info => println!("{} {}", icon.cyan().bold(), msg),
    }
}

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable table
    Table,
    /// Machine-readable JSON
    Json,
    /// Plain text
    Plain,
}

/// Render a check report in the requested format.
pub fn render_report(report: &CheckReport, format: ReportFormat) -> String {
    match format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(report).expect("report serializes to JSON")
        }
        ReportFormat::Plain => render_plain(report),
        ReportFormat::Table => render_table(report),
    }
}

/// Sort identifiers for display: numeric identifiers by value, anything
/// else lexicographic after them.
fn display_order(ids: &[String]) -> Vec<&str> {
    let mut sorted: Vec<&str> = ids.iter().map(String::as_str).collect();
    sorted.sort_unstable_by(|a, b| {
        let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        match (numeric(a), numeric(b)) {
            (true, true) => a.len().cmp(&b.len()).then(a.cmp(b)),
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            (false, false) => a.cmp(b),
        }
    });
    sorted
}

fn joined(ids: &[String]) -> String {
    if ids.is_empty() {
        "(none)".to_string()
    } else {
        display_order(ids).join(", ")
    }
}

fn render_plain(report: &CheckReport) -> String {
    let comparison = &report.comparison;
    format!(
        "Results for query: `{}`\n\
         Retrieved: {}\n\
         Total known PMIDs: {}\n\
         Found: {} / Missed: {}\n\
         Found PMIDs:\n{}\n\
         Missed PMIDs:\n{}",
        report.query,
        report.retrieved_count,
        comparison.total_known,
        comparison.found_count,
        comparison.missed_count,
        joined(&comparison.found),
        joined(&comparison.missed),
    )
}

fn render_table(report: &CheckReport) -> String {
    use comfy_table::{Attribute, Cell, Table};

    let comparison = &report.comparison;

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_width(terminal_width() as u16);
    table.set_header(vec!["", "Count", "PMIDs"]);
    table.add_row(vec![
        Cell::new("Found").add_attribute(Attribute::Bold),
        Cell::new(comparison.found_count),
        Cell::new(joined(&comparison.found)),
    ]);
    table.add_row(vec![
        Cell::new("Missed").add_attribute(Attribute::Bold),
        Cell::new(comparison.missed_count),
        Cell::new(joined(&comparison.missed)),
    ]);

    format!(
        "Query: {}\nRetrieved {} identifiers, {} known ({:.0}% recall)\n{}",
        report.query,
        report.retrieved_count,
        comparison.total_known,
        comparison.recall() * 100.0,
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComparisonResult;

    fn sample_report() -> CheckReport {
        let retrieved = vec!["100".to_string(), "200".to_string(), "300".to_string()];
        let known = vec!["100".to_string(), "400".to_string()];
        CheckReport {
            query: "cancer".to_string(),
            retrieved_count: retrieved.len(),
            comparison: ComparisonResult::new(&retrieved, &known),
        }
    }

    #[test]
    fn test_render_plain() {
        let output = render_report(&sample_report(), ReportFormat::Plain);

        assert!(output.contains("Results for query: `cancer`"));
        assert!(output.contains("Total known PMIDs: 2"));
        assert!(output.contains("Found: 1 / Missed: 1"));
        assert!(output.contains("100"));
        assert!(output.contains("400"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let output = render_report(&sample_report(), ReportFormat::Json);

        let parsed: CheckReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.query, "cancer");
        assert_eq!(parsed.comparison.found_count, 1);
        assert_eq!(parsed.comparison.missed_count, 1);
    }

    #[test]
    fn test_render_table_has_counts() {
        let output = render_report(&sample_report(), ReportFormat::Table);

        assert!(output.contains("Query: cancer"));
        assert!(output.contains("Found"));
        assert!(output.contains("Missed"));
        assert!(output.contains("50% recall"));
    }

    #[test]
    fn test_display_order_numeric() {
        let ids = vec![
            "1000".to_string(),
            "99".to_string(),
            "101".to_string(),
            "abc".to_string(),
        ];
        assert_eq!(display_order(&ids), vec!["99", "101", "1000", "abc"]);
    }

    #[test]
    fn test_joined_empty_is_none_marker() {
        assert_eq!(joined(&[]), "(none)");
    }
}
