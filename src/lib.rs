//! glot-extract - extract hardcoded UI text into message catalogs
//!
//! glot-extract parses JSX/TSX sources, finds user-visible text written in a
//! target script (Chinese by default) and rewrites every occurrence into a
//! lookup of a per-file message catalog that is injected into the module.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and validation
//! - `core`: Transform engine (collect pass, catalog injection, rewrite pass)
//! - `findings`: Finding types and the `Report` trait

pub mod cli;
pub mod config;
pub mod core;
pub mod findings;
