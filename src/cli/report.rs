//! Report formatting and printing.
//!
//! Text output is cargo-style; JSON output carries the catalog and the key
//! list for other tools. Kept apart from the core so glot-extract can be used
//! as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::{Map, Value, json};
use unicode_width::UnicodeWidthStr;

use super::args::OutputFormat;
use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::core::ExtractRun;
use crate::findings::{Finding, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_init(summary: &InitSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn print_extract(summary: &ExtractSummary, verbose: bool) {
    let run = &summary.run;
    match summary.format {
        OutputFormat::Json => {
            let _ = writeln!(io::stdout().lock(), "{}", json_report(run));
        }
        OutputFormat::Text => {
            let findings = findings(run);
            let mut out = io::stdout().lock();
            if run.message_count() == 0 && run.parse_errors.is_empty() {
                print_success_to(run.files_processed, &mut out);
            } else {
                report_to(&findings, &mut out);
                print_summary_to(run, &mut out);
            }
        }
    }
    print_parse_warning_to(run.parse_errors.len(), verbose, &mut io::stderr().lock());
}

/// All findings of a run: parse errors first, then messages in file order.
pub fn findings(run: &ExtractRun) -> Vec<Finding> {
    run.parse_errors
        .iter()
        .cloned()
        .map(Finding::ParseError)
        .chain(run.messages().cloned().map(Finding::ExtractedMessage))
        .collect()
}

/// JSON document for `--format json`.
///
/// `catalog` merges every file's entries by key, since the id of an entry is
/// always its key.
pub fn json_report(run: &ExtractRun) -> Value {
    let files: Vec<Value> = run
        .files
        .iter()
        .map(|file| {
            json!({
                "path": file.file_path,
                "messages": file.entries.iter().map(|e| &e.key).collect::<Vec<_>>(),
                "sites": file.messages.len(),
            })
        })
        .collect();

    let mut catalog = Map::new();
    for key in run.message_keys.unique() {
        catalog.insert(key.to_string(), json!({ "id": key }));
    }

    let parse_errors: Vec<Value> = run
        .parse_errors
        .iter()
        .map(|e| json!({ "path": e.file_path, "error": e.error }))
        .collect();

    json!({
        "files": files,
        "messageKeys": run.message_keys,
        "catalog": catalog,
        "parseErrors": parse_errors,
    })
}

/// Print findings in cargo-style format to a writer.
pub fn report_to<W: Write>(findings: &[Finding], writer: &mut W) {
    let max_line_width = findings
        .iter()
        .map(|f| f.location().position().0)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for finding in findings {
        print_finding(finding, writer, max_line_width);
    }
}

fn print_finding<W: Write>(finding: &Finding, writer: &mut W, max_line_width: usize) {
    let severity = finding.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        finding.message(),
        finding.report_rule().to_string().dimmed().cyan()
    );

    match finding.location() {
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        ReportLocation::Source(ctx) => {
            let (line, col) = (ctx.line(), ctx.col());
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                line,
                col
            );
            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                line.to_string().blue(),
                "|".blue(),
                ctx.source_line,
                width = max_line_width
            );

            // col is 1-based and counted in characters
            let prefix: String = ctx.source_line.chars().take(col.saturating_sub(1)).collect();
            let caret = match severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret,
                width = max_line_width,
                padding = UnicodeWidthStr::width(prefix.as_str())
            );
        }
    }

    if let Some(details) = finding.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

pub fn print_summary_to<W: Write>(run: &ExtractRun, writer: &mut W) {
    let messages = run.message_count();
    if messages > 0 {
        let unique = run.message_keys.unique().len();
        let _ = writeln!(
            writer,
            "{} {} {} in {} {} ({} unique {})",
            FAILURE_MARK.yellow(),
            messages,
            plural(messages, "message", "messages").yellow(),
            run.files.len(),
            plural(run.files.len(), "file", "files"),
            unique,
            plural(unique, "key", "keys"),
        );
    }

    let errors = run.parse_errors.len();
    if errors > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be parsed",
            FAILURE_MARK.red(),
            errors,
            plural(errors, "file", "files").red(),
        );
    }
}

pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no translatable text found",
            source_files,
            plural(source_files, "file", "files")
        )
        .green()
    );
}

/// Hint at `-v` when parse failures were only counted.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}
