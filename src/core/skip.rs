//! Exclusion decisions for candidate fragments.
//!
//! A fragment is excluded from both extraction and rewriting when:
//! - one of its leading comments contains the disable marker,
//! - it sits inside an import declaration or a type-level literal context,
//! - its text has no character of the target script, or is an ignored text.
//!
//! Decisions are keyed by node identity and are monotonic: once a fragment is
//! excluded every later check on it reports excluded.

use std::collections::{HashMap, HashSet};

use swc_common::{BytePos, Span};

use super::parsers::jsx::ExtractedComments;
use super::script::{TargetScript, contains_script};

/// Syntactic origin of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Plain JSX text between tags.
    JsxText,
    /// Quoted string literal, in expression or attribute-value position.
    Literal,
    /// Template literal.
    Template,
}

impl FragmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JsxText => "jsx-text",
            Self::Literal => "literal",
            Self::Template => "template",
        }
    }
}

/// Identity of a candidate node within one parsed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FragmentId {
    pub kind: FragmentKind,
    pub span: Span,
}

impl FragmentId {
    pub fn new(kind: FragmentKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Why a fragment was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    DisableComment,
    ImportDeclaration,
    TypeContext,
    NoTargetScript,
    IgnoredText,
}

/// Node identity -> exclusion decision, produced by the collection pass.
#[derive(Debug, Default)]
pub struct SkipTable {
    excluded: HashMap<FragmentId, SkipReason>,
}

impl SkipTable {
    /// Mark a fragment excluded. The first recorded reason wins.
    pub fn exclude(&mut self, id: FragmentId, reason: SkipReason) {
        self.excluded.entry(id).or_insert(reason);
    }

    pub fn is_excluded(&self, id: FragmentId) -> bool {
        self.excluded.contains_key(&id)
    }

    pub fn reason(&self, id: FragmentId) -> Option<SkipReason> {
        self.excluded.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}

/// Ancestor state tracked while walking the tree.
///
/// Flags are independent and restored when leaving the ancestor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipContext {
    pub in_import: bool,
    pub in_type_literal: bool,
}

/// A disable-marker comment to strip from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerComment {
    /// Position the comment is attached at (the node's `lo`).
    pub pos: BytePos,
    pub span: Span,
}

/// Runs the exclusion checks and records their outcome.
pub struct SkipClassifier<'a> {
    comments: &'a ExtractedComments,
    disable_marker: &'a str,
    script: TargetScript,
    ignore_texts: HashSet<&'a str>,
    table: SkipTable,
    markers: Vec<MarkerComment>,
}

impl<'a> SkipClassifier<'a> {
    pub fn new(
        comments: &'a ExtractedComments,
        disable_marker: &'a str,
        script: TargetScript,
        ignore_texts: &'a [String],
    ) -> Self {
        Self {
            comments,
            disable_marker,
            script,
            ignore_texts: ignore_texts.iter().map(|t| t.trim()).collect(),
            table: SkipTable::default(),
            markers: Vec::new(),
        }
    }

    /// Exclude the node if a leading comment carries the disable marker.
    ///
    /// The marker comment is queued for removal; sibling comments stay.
    pub fn check_comments(&mut self, id: FragmentId) -> bool {
        if self.table.is_excluded(id) {
            return true;
        }
        if self.disable_marker.is_empty() {
            return false;
        }
        let pos = id.span.lo;
        let marker = self
            .comments
            .leading_at(pos)
            .iter()
            .find(|c| c.text.contains(self.disable_marker));
        match marker {
            Some(comment) => {
                self.markers.push(MarkerComment {
                    pos,
                    span: comment.span,
                });
                self.table.exclude(id, SkipReason::DisableComment);
                true
            }
            None => false,
        }
    }

    /// Exclude the node if an ancestor is an import or a type-level literal.
    pub fn check_ancestors(&mut self, id: FragmentId, ctx: SkipContext) -> bool {
        if self.table.is_excluded(id) {
            return true;
        }
        if ctx.in_import {
            self.table.exclude(id, SkipReason::ImportDeclaration);
            return true;
        }
        if ctx.in_type_literal {
            self.table.exclude(id, SkipReason::TypeContext);
            return true;
        }
        false
    }

    /// Exclude the node unless its text contains the target script.
    pub fn check_content(&mut self, id: FragmentId, text: Option<&str>) -> bool {
        if self.table.is_excluded(id) {
            return true;
        }
        if !contains_script(text, self.script) {
            self.table.exclude(id, SkipReason::NoTargetScript);
            return true;
        }
        if text.is_some_and(|t| self.ignore_texts.contains(t.trim())) {
            self.table.exclude(id, SkipReason::IgnoredText);
            return true;
        }
        false
    }

    pub fn is_excluded(&self, id: FragmentId) -> bool {
        self.table.is_excluded(id)
    }

    pub fn finish(self) -> (SkipTable, Vec<MarkerComment>) {
        (self.table, self.markers)
    }
}
