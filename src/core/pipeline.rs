//! The extraction run.
//!
//! One linear pass shared by both comment grammars:
//!
//! 1. **Scan**: walk the source tree and keep recognized source files
//! 2. **Match**: run the grammar over every file, in sorted path order
//! 3. **Validate**: abort on the first name collision in any output
//! 4. **Serialize**: write every output document
//!
//! Nothing is written unless every output passed validation.

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;

use super::{
    collision::{NameCollision, find_collision},
    gutter::DEFAULT_SEPARATOR,
    matcher::{MESSAGE_ROOT, MessageMatcher, SETTING_ROOT, SettingMatcher, TagMatcher},
    record::Record,
    scan::{ARDUINO_EXTENSIONS, relative_path, scan_files},
    xml::Element,
};

/// A setting category and the file its database is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingType {
    pub tag: String,
    pub file: String,
}

impl SettingType {
    pub fn new(tag: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            file: file.into(),
        }
    }
}

/// Setting categories written when none are configured.
pub fn default_setting_types() -> Vec<SettingType> {
    vec![
        SettingType::new("AIRSETTING", "airSettings.xml"),
        SettingType::new("GROUNDSETTING", "groundSettings.xml"),
    ]
}

/// Which comment grammar to extract and where its output goes.
#[derive(Debug, Clone)]
pub enum Extraction {
    /// `/*#NAME ...*/` comments into a single message database file.
    Messages { dest_file: PathBuf },
    /// Attributed setting comments, one database per setting type in `dest_dir`.
    Settings {
        dest_dir: PathBuf,
        setting_types: Vec<SettingType>,
    },
}

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source_dir: PathBuf,
    pub extraction: Extraction,
    pub extensions: Vec<String>,
    pub ignores: Vec<Pattern>,
    pub separator: String,
    pub verbose: bool,
}

impl RunConfig {
    /// Config with default extensions and separator.
    pub fn new(source_dir: impl Into<PathBuf>, extraction: Extraction) -> Self {
        Self {
            source_dir: source_dir.into(),
            extraction,
            extensions: ARDUINO_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignores: Vec::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            verbose: false,
        }
    }
}

/// One database file produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutput {
    pub path: PathBuf,
    pub record_count: usize,
}

/// Outcome of a run that did not fail with an error.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Files written; empty when a collision aborted the run.
    pub outputs: Vec<WrittenOutput>,
    pub collision: Option<NameCollision>,
    pub files_scanned: usize,
    pub skipped_count: usize,
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        self.collision.is_none()
    }
}

/// An output document that has been assembled but not yet written.
struct PlannedOutput<'a> {
    path: PathBuf,
    root: &'static str,
    records: Vec<&'a Record>,
}

/// Run one full extraction.
///
/// Returns `Err` for I/O failures. A name collision is reported through
/// [`RunResult::collision`] and leaves the destination untouched.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let source_dir = config.source_dir.as_path();
    if !source_dir.is_dir() {
        anyhow::bail!("Source directory not found: {}", source_dir.display());
    }

    let scan = scan_files(
        source_dir,
        &config.extensions,
        &config.ignores,
        config.verbose,
    );
    if config.verbose {
        eprintln!(
            "{} {} source files under {}",
            "Scanning".bold().green(),
            scan.files.len(),
            source_dir.display()
        );
    }

    let matcher: Box<dyn TagMatcher> = match &config.extraction {
        Extraction::Messages { .. } => Box::new(MessageMatcher::new(&config.separator)),
        Extraction::Settings { setting_types, .. } => Box::new(SettingMatcher::new(
            setting_types.iter().map(|t| t.tag.clone()).collect(),
            &config.separator,
        )),
    };

    let records = extract_records(source_dir, &scan.files, matcher.as_ref())?;
    let planned = plan_outputs(&config.extraction, &records);

    let mut result = RunResult {
        files_scanned: scan.files.len(),
        skipped_count: scan.skipped_count,
        ..Default::default()
    };

    for plan in &planned {
        let output = plan.path.display().to_string();
        if let Some(collision) = find_collision(plan.records.iter().copied(), &output) {
            result.collision = Some(collision);
            return Ok(result);
        }
    }

    if let Extraction::Settings { dest_dir, .. } = &config.extraction
        && !dest_dir.is_dir()
    {
        anyhow::bail!("Destination directory not found: {}", dest_dir.display());
    }

    for plan in planned {
        let document = build_document(plan.root, &plan.records, matcher.as_ref());
        document.write_file(&plan.path)?;
        if config.verbose {
            eprintln!(
                "{} {} records to {}",
                "Wrote".bold().green(),
                plan.records.len(),
                plan.path.display()
            );
        }
        result.outputs.push(WrittenOutput {
            path: plan.path,
            record_count: plan.records.len(),
        });
    }

    Ok(result)
}

/// Read every file and collect the records `matcher` finds, in file order.
pub fn extract_records(
    root: &Path,
    files: &[PathBuf],
    matcher: &dyn TagMatcher,
) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for file in files {
        let bytes =
            fs::read(file).with_context(|| format!("Failed to read file: {}", file.display()))?;
        let decoded = String::from_utf8_lossy(&bytes);
        let source = normalize_newlines(&decoded);
        records.extend(matcher.find(&relative_path(root, file), &source));
    }
    Ok(records)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Build a database document from `records` in the given order.
pub fn build_document(root: &str, records: &[&Record], matcher: &dyn TagMatcher) -> Element {
    let mut document = Element::new(root);
    for record in records {
        document.push(matcher.element(record));
    }
    document
}

fn plan_outputs<'a>(extraction: &Extraction, records: &'a [Record]) -> Vec<PlannedOutput<'a>> {
    match extraction {
        Extraction::Messages { dest_file } => vec![PlannedOutput {
            path: dest_file.clone(),
            root: MESSAGE_ROOT,
            records: records.iter().collect(),
        }],
        Extraction::Settings {
            dest_dir,
            setting_types,
        } => setting_types
            .iter()
            .map(|setting_type| PlannedOutput {
                path: dest_dir.join(&setting_type.file),
                root: SETTING_ROOT,
                records: records
                    .iter()
                    .filter(|r| r.tag == setting_type.tag)
                    .collect(),
            })
            .collect(),
    }
}
