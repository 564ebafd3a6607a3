//! Positions of extraction sites in their source files.

use swc_common::{BytePos, SourceMap, SourceMapper, Span};

/// Pure position information in a source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position plus the source line, for cargo-style display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    /// Locate the first non-whitespace character of `span`.
    ///
    /// JSX text spans start at the preceding line break, so their leading
    /// whitespace is skipped to point at the text itself.
    pub fn from_span(source_map: &SourceMap, file_path: &str, span: Span) -> Self {
        let offset = source_map
            .span_to_snippet(span)
            .map(|snippet| snippet.len() - snippet.trim_start().len())
            .unwrap_or_default();
        let loc = source_map.lookup_char_pos(span.lo + BytePos(offset as u32));
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        Self::new(
            SourceLocation::new(file_path, loc.line, loc.col.0 + 1),
            source_line,
        )
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
