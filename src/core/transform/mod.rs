//! Per-file transform.
//!
//! Runs the two passes over one parsed module:
//!
//! 1. Collect: classify every candidate fragment, build the key registry and
//!    the extraction sites.
//! 2. Rewrite: replace every site with a catalog lookup call.
//!
//! Between the passes the disable-marker comments are stripped and, if at
//! least one key was collected, the imports and catalog declaration are
//! injected. A file with no translatable fragment is left untouched.

use super::collect::{ExtractionSite, collect_fragments};
use super::host::ModuleScope;
use super::inject::inject_catalog;
use super::names::ImportNames;
use super::options::TransformOptions;
use super::parsers::jsx::ParsedSource;
use super::registry::MessageEntry;
use super::rewrite::rewrite_sites;

/// What the transform did to one file.
#[derive(Debug, Default)]
pub struct FileTransform {
    /// Catalog entries in first-occurrence order.
    pub entries: Vec<MessageEntry>,
    /// Rewritten sites in document order.
    pub sites: Vec<ExtractionSite>,
    /// Local import names, when anything was injected.
    pub names: Option<ImportNames>,
    /// Body index of the first injected statement.
    pub inserted_at: Option<usize>,
    /// Number of call sites replaced.
    pub rewritten: usize,
    /// Number of fragments excluded by a skip mark.
    pub skipped: usize,
    /// Number of disable-marker comments removed.
    pub removed_comments: usize,
}

impl FileTransform {
    pub fn is_modified(&self) -> bool {
        self.inserted_at.is_some() || self.removed_comments > 0
    }
}

/// Transform one parsed module in place.
pub fn transform_module(parsed: &mut ParsedSource, options: &TransformOptions) -> FileTransform {
    let outcome = collect_fragments(
        &parsed.module,
        &parsed.comments,
        &*parsed.source_map,
        options,
    );

    let mut removed_comments = 0;
    for marker in &outcome.marker_comments {
        if parsed.comments.remove_leading(marker.pos, marker.span) {
            removed_comments += 1;
        }
    }

    let mut result = FileTransform {
        skipped: outcome.skips.len(),
        removed_comments,
        ..Default::default()
    };

    if outcome.registry.is_empty() {
        return result;
    }

    // Names are resolved against the module as written, before injection
    let mut scope = ModuleScope::from_module(&parsed.module);
    let names = ImportNames::resolve(&mut scope, options);

    let inserted_at = inject_catalog(
        &mut parsed.module,
        &names,
        options,
        outcome.registry.entries(),
    );
    result.rewritten = rewrite_sites(&mut parsed.module, &outcome, &names, options);

    result.inserted_at = Some(inserted_at);
    result.names = Some(names);
    result.sites = outcome.sites;
    result.entries = outcome.registry.into_entries();
    result
}
