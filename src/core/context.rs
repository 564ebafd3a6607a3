use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        file_scanner::scan_files,
        options::TransformOptions,
        parsers::jsx::parse_jsx_source,
        registry::{MessageEntry, MessageKeys},
        source::SourceContext,
        transform::transform_module,
    },
    findings::{ExtractedMessage, ParseError},
};

/// Outcome of transforming one source file.
#[derive(Debug, Clone)]
pub struct FileExtraction {
    pub file_path: String,
    /// Catalog entries in first-occurrence order.
    pub entries: Vec<MessageEntry>,
    /// Rewritten sites in document order.
    pub messages: Vec<ExtractedMessage>,
    pub skipped: usize,
    pub removed_comments: usize,
}

/// Outcome of a whole `extract` run.
#[derive(Debug, Default)]
pub struct ExtractRun {
    /// Files with at least one extracted message, sorted by path.
    pub files: Vec<FileExtraction>,
    /// Every file's keys appended in file order, duplicates kept.
    pub message_keys: MessageKeys,
    pub parse_errors: Vec<ParseError>,
    /// Number of source files that were transformed successfully.
    pub files_processed: usize,
}

impl ExtractRun {
    pub fn message_count(&self) -> usize {
        self.files.iter().map(|f| f.messages.len()).sum()
    }

    pub fn messages(&self) -> impl Iterator<Item = &ExtractedMessage> {
        self.files.iter().flat_map(|f| f.messages.iter())
    }
}

/// Multi-file orchestrator for `extract`.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g. `--script kana`)
/// 2. `.glot-extract.json`
/// 3. Built-in defaults
pub struct ExtractContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    pub root_dir: PathBuf,
    /// Source files to transform, sorted.
    pub files: Vec<String>,
    pub verbose: bool,
}

impl ExtractContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        if !root_dir.is_dir() {
            return Err(anyhow!(
                "Source root is not a directory: {}",
                root_dir.display()
            ));
        }

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(script) = common_args.script {
            config.transform.target_script = script;
        }

        Ok(Self::with_config(root_dir, config, verbose))
    }

    /// Build a context from an already merged configuration.
    pub fn with_config(root_dir: PathBuf, config: Config, verbose: bool) -> Self {
        let base_dir = root_dir.to_string_lossy();
        let scan_result = scan_files(
            &base_dir,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
        }
    }

    /// Transform every file in parallel, then merge the results in file order.
    ///
    /// Each worker only returns its own file's outcome; the key accumulator is
    /// owned here and appended sequentially.
    pub fn run(&self) -> ExtractRun {
        let options = &self.config.transform;
        let results: Vec<(&String, Result<FileExtraction>)> = self
            .files
            .par_iter()
            .map(|file_path| (file_path, extract_file(file_path, options)))
            .collect();

        let mut run = ExtractRun::default();
        for (file_path, result) in results {
            match result {
                Ok(file) => {
                    run.files_processed += 1;
                    run.message_keys.append(&file.entries);
                    if !file.messages.is_empty() {
                        run.files.push(file);
                    }
                }
                Err(e) => {
                    if self.verbose {
                        eprintln!("{} {} - {:#}", "warning:".bold().yellow(), file_path, e);
                    }
                    run.parse_errors.push(ParseError {
                        file_path: file_path.clone(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }
        run
    }
}

/// Read, parse and transform one file.
pub fn extract_file(file_path: &str, options: &TransformOptions) -> Result<FileExtraction> {
    let code = fs::read_to_string(Path::new(file_path))
        .with_context(|| format!("Failed to read file: {}", file_path))?;
    extract_source(code, file_path, options)
}

/// Parse and transform source text as if it were `file_path`.
///
/// Only the report data is kept: the rewritten module is dropped. Callers
/// that need the tree parse with `parse_jsx_source` and call
/// `transform_module` themselves.
pub fn extract_source(
    code: String,
    file_path: &str,
    options: &TransformOptions,
) -> Result<FileExtraction> {
    let source_map = Arc::new(SourceMap::default());
    let mut parsed = parse_jsx_source(code, file_path, source_map.clone())?;
    let transform = transform_module(&mut parsed, options);

    let messages = transform
        .sites
        .into_iter()
        .map(|site| ExtractedMessage {
            context: SourceContext::from_span(&source_map, file_path, site.span()),
            kind: site.kind(),
            key: site.key,
            placeholders: site.placeholders,
        })
        .collect();

    Ok(FileExtraction {
        file_path: file_path.to_string(),
        entries: transform.entries,
        messages,
        skipped: transform.skipped,
        removed_comments: transform.removed_comments,
    })
}
