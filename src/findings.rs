//! Findings reported by `extract`.
//!
//! Each finding is self-contained with everything the reporter needs:
//! - `ExtractedMessage`: a fragment that was turned into a catalog lookup,
//! - `ParseError`: a source file that could not be read or parsed.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::skip::FragmentKind;
use crate::core::source::SourceContext;
use crate::core::template::Placeholder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Extract,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Extract => write!(f, "extract"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// A fragment rewritten into a catalog lookup call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMessage {
    pub context: SourceContext,
    pub kind: FragmentKind,
    /// Catalog key, also the message id.
    pub key: String,
    pub placeholders: Vec<Placeholder>,
}

impl ExtractedMessage {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Extract
    }
}

/// A source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub file_path: String,
    pub error: String,
}

impl ParseError {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    ExtractedMessage(ExtractedMessage),
    ParseError(ParseError),
}

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source position with the line for context display.
    Source(&'a SourceContext),
    /// File-level only, no line context.
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    /// Line and column, `(0, 0)` for file-level findings.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ReportLocation::Source(ctx) => (ctx.line(), ctx.col()),
            ReportLocation::File { .. } => (0, 0),
        }
    }
}

/// Uniform view of a finding for the reporters.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for ExtractedMessage {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.placeholders.is_empty() {
            return None;
        }
        let args: Vec<String> = self
            .placeholders
            .iter()
            .map(|p| format!("{} = {}", p.name(), p.expression_source))
            .collect();
        Some(format!("{} with {}", self.kind.as_str(), args.join(", ")))
    }
}

impl Report for ParseError {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
