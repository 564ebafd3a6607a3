//! Transform engine.
//!
//! A file is handled in two passes over its swc module:
//! - `collect`: read-only walk that classifies fragments and records sites,
//! - `inject` + `rewrite`: catalog import/declaration and call-site rewriting.
//!
//! `context` runs the passes over every scanned file and merges the results.
//!
//! Library callers that want the rewritten tree use
//! `transform::transform_module` on a `parsers::jsx::ParsedSource`; it leaves
//! the module and its comment store rewritten in place.

pub mod build;
pub mod collect;
pub mod context;
pub mod file_scanner;
pub mod host;
pub mod inject;
pub mod names;
pub mod options;
pub mod parsers;
pub mod registry;
pub mod rewrite;
pub mod script;
pub mod skip;
pub mod source;
pub mod template;
pub mod transform;

pub use context::{ExtractContext, ExtractRun, FileExtraction, extract_file, extract_source};
