use std::path::Path;

use anyhow::Result;

use super::super::{
    args::{MessagesArgs, SettingsArgs},
    exit_status::ExitStatus,
    report,
};
use crate::config::{Config, load_config};
use crate::core::{self, Extraction, RunConfig};

/// Extract state messages into a single database file.
pub fn messages(args: MessagesArgs, verbose: bool) -> Result<ExitStatus> {
    run_extraction(
        &args.source_dir,
        |_| Extraction::Messages {
            dest_file: args.dest_file.clone(),
        },
        verbose,
    )
}

/// Extract setting descriptions into one database per setting type.
pub fn settings(args: SettingsArgs, verbose: bool) -> Result<ExitStatus> {
    run_extraction(
        &args.source_dir,
        |config| Extraction::Settings {
            dest_dir: args.dest_dir.clone(),
            setting_types: config.setting_types(),
        },
        verbose,
    )
}

fn run_extraction<F>(source_dir: &Path, extraction: F, verbose: bool) -> Result<ExitStatus>
where
    F: FnOnce(&Config) -> Extraction,
{
    let loaded = load_config(source_dir)?;
    if verbose && let Some(path) = &loaded.path {
        eprintln!("Using config {}", path.display());
    }
    let config = loaded.config;

    let run_config = RunConfig {
        source_dir: source_dir.to_path_buf(),
        extraction: extraction(&config),
        extensions: config.extensions.clone(),
        ignores: config.ignore_patterns()?,
        separator: config.separator.clone(),
        verbose,
    };

    let result = core::run(&run_config)?;
    report::print_result(&result, verbose);

    Ok(ExitStatus::from(&result))
}
