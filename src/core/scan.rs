use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Source file extensions scanned by default.
pub const ARDUINO_EXTENSIONS: &[&str] = &[".ino", ".h", ".c", ".hpp", ".cpp"];

/// Result of walking a source tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Candidate files, sorted lexicographically.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read while walking.
    pub skipped_count: usize,
}

/// Returns true if the final segment of `name` has an extension in `extensions`.
///
/// The extension is everything from the last `.` of the file name, dot
/// included, compared case-sensitively. A leading dot alone (`.h`) does not
/// count as an extension.
///
/// # Examples
///
/// ```
/// use tagdb::core::has_extension;
///
/// assert!(has_extension("yes.a", &[".a", ".b"]));
/// assert!(!has_extension("nope.a.c", &[".a", ".b"]));
/// assert!(!has_extension("anything", &[] as &[&str]));
/// ```
pub fn has_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    let file_name = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let Some(dot) = file_name.rfind('.') else {
        return false;
    };
    if dot == 0 {
        return false;
    }
    let found = &file_name[dot..];
    extensions.iter().any(|ext| ext.as_ref() == found)
}

/// Returns every file found at any depth under `directory`.
///
/// Order follows directory enumeration and is not guaranteed. Symlinks to
/// files are listed; symlinked directories are not descended into.
pub fn files_under(directory: &Path, verbose: bool) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(directory) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let file_type = entry.file_type();
        if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
            files.push(entry.into_path());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Collect the source files under `directory` that should be searched.
///
/// Files are kept when their extension is in `extensions` and their path
/// matches none of `ignores`. The result is sorted so output order does not
/// depend on the platform's directory listing.
pub fn scan_files(
    directory: &Path,
    extensions: &[String],
    ignores: &[Pattern],
    verbose: bool,
) -> ScanResult {
    let walked = files_under(directory, verbose);

    let mut files: Vec<PathBuf> = walked
        .files
        .into_iter()
        .filter(|path| has_extension(&path.to_string_lossy(), extensions))
        .filter(|path| {
            let relative = relative_path(directory, path);
            !ignores.iter().any(|p| p.matches(&relative))
        })
        .collect();
    files.sort();

    ScanResult {
        files,
        skipped_count: walked.skipped_count,
    }
}

/// Render `path` relative to `root` with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
