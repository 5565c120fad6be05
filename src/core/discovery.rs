//! Stylesheet discovery.
//!
//! Inputs may be files, directories or glob patterns. Directories are walked
//! with `.gitignore` support and filtered by extension and the configured
//! include/exclude globs. Inputs that cannot be resolved are recorded as
//! [`FileError`]s instead of aborting the run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::config::AnalysisConfig;
use crate::core::errors::{ClasslintError, Result};

/// An input that could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    /// Path or pattern as given
    pub path: PathBuf,
    /// Why it was not scanned
    pub message: String,
}

impl FileError {
    /// Create a file error.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Files selected for scanning plus the inputs that failed to resolve.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryResult {
    /// Files to scan, sorted and de-duplicated
    pub files: Vec<PathBuf>,
    /// Unresolvable inputs
    pub errors: Vec<FileError>,
}

/// Resolves CLI inputs into stylesheet files.
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    analysis: AnalysisConfig,
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
    respect_gitignore: bool,
    max_file_size_bytes: u64,
}

impl FileDiscovery {
    /// Build a discovery filter from analysis configuration.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let mut exclude_patterns = config.exclude_patterns.clone();
        exclude_patterns.push("**/.git/**".to_string());

        Ok(Self {
            analysis: config.clone(),
            include: compile_globset(&config.include_patterns)?,
            exclude: compile_globset(&exclude_patterns)?,
            respect_gitignore: config.respect_gitignore,
            max_file_size_bytes: config.max_file_size_bytes,
        })
    }

    /// Resolve every input into files, collecting failures along the way.
    pub fn discover<S: AsRef<str>>(&self, inputs: &[S]) -> DiscoveryResult {
        let mut unique = HashSet::new();
        let mut result = DiscoveryResult::default();

        for input in inputs {
            let input = input.as_ref();
            let path = Path::new(input);

            if path.is_file() {
                if self.within_size_limit(path) {
                    add_unique(&mut unique, &mut result.files, path.to_path_buf());
                }
            } else if path.is_dir() {
                self.walk_directory(path, &mut unique, &mut result.files);
            } else if is_glob_pattern(input) {
                self.expand_pattern(input, &mut unique, &mut result);
            } else {
                warn!("Input does not exist: {input}");
                result
                    .errors
                    .push(FileError::new(input, "path does not exist"));
            }
        }

        result.files.sort();
        info!(
            "File discovery completed: {} files selected, {} inputs failed",
            result.files.len(),
            result.errors.len()
        );
        result
    }

    fn walk_directory(
        &self,
        root: &Path,
        unique: &mut HashSet<PathBuf>,
        collected: &mut Vec<PathBuf>,
    ) {
        let walker = WalkBuilder::new(root)
            .standard_filters(self.respect_gitignore)
            .hidden(false)
            .require_git(false)
            .build();

        for entry in walker {
            let dir_entry = match entry {
                Ok(dir_entry) => dir_entry,
                Err(err) => {
                    warn!("Failed to walk directory: {err}");
                    continue;
                }
            };

            let is_file = dir_entry.file_type().is_some_and(|ft| ft.is_file());
            if !is_file {
                continue;
            }

            let path = dir_entry.path();
            if self.should_keep(path, root) {
                add_unique(unique, collected, path.to_path_buf());
            }
        }
    }

    fn expand_pattern(
        &self,
        pattern: &str,
        unique: &mut HashSet<PathBuf>,
        result: &mut DiscoveryResult,
    ) {
        let paths = match glob::glob(pattern) {
            Ok(paths) => paths,
            Err(err) => {
                result
                    .errors
                    .push(FileError::new(pattern, format!("invalid glob pattern: {err}")));
                return;
            }
        };

        let mut matched = 0usize;
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => {
                    matched += 1;
                    if self.should_keep(&path, Path::new("")) {
                        add_unique(unique, &mut result.files, path);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    result
                        .errors
                        .push(FileError::new(err.path(), err.error().to_string()));
                }
            }
        }

        debug!("Pattern '{pattern}' matched {matched} files");
        if matched == 0 {
            result
                .errors
                .push(FileError::new(pattern, "no files matched pattern"));
        }
    }

    fn should_keep(&self, path: &Path, base: &Path) -> bool {
        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.analysis.accepts_extension(ext));
        if !accepted {
            return false;
        }

        let relative = path.strip_prefix(base).unwrap_or(path);
        if self.exclude.as_ref().is_some_and(|set| set.is_match(relative)) {
            return false;
        }
        if let Some(include) = &self.include {
            if !include.is_match(relative) {
                return false;
            }
        }

        self.within_size_limit(path)
    }

    fn within_size_limit(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(metadata) if metadata.len() > self.max_file_size_bytes => {
                warn!(
                    "Skipping {} ({} bytes exceeds limit of {})",
                    path.display(),
                    metadata.len(),
                    self.max_file_size_bytes
                );
                false
            }
            _ => true,
        }
    }
}

fn add_unique(unique: &mut HashSet<PathBuf>, collected: &mut Vec<PathBuf>, path: PathBuf) {
    if unique.insert(path.clone()) {
        collected.push(path);
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn compile_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    let mut builder = GlobSetBuilder::new();
    let mut added = false;

    for pattern in patterns {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            continue;
        }

        let glob = GlobBuilder::new(pattern)
            .literal_separator(false)
            .build()
            .map_err(|err| {
                ClasslintError::config(format!("Invalid glob pattern '{pattern}': {err}"))
            })?;
        builder.add(glob);
        added = true;
    }

    if added {
        builder.build().map(Some).map_err(Into::into)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn discovery() -> FileDiscovery {
        FileDiscovery::new(&AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn walks_directories_filtering_by_extension() {
        let dir = TempDir::new().unwrap();
        let scss = write(dir.path(), "styles/app.scss", ".app {}");
        let css = write(dir.path(), "styles/base.css", ".base {}");
        write(dir.path(), "styles/readme.md", "# nope");
        write(dir.path(), "node_modules/lib/lib.css", ".lib {}");

        let result = discovery().discover(&[dir.path().to_string_lossy()]);
        assert!(result.errors.is_empty());
        assert_eq!(result.files, {
            let mut expected = vec![scss, css];
            expected.sort();
            expected
        });
    }

    #[test]
    fn extension_match_ignores_case_and_leading_dot() {
        let dir = TempDir::new().unwrap();
        let upper = write(dir.path(), "THEME.SCSS", ".theme {}");
        write(dir.path(), "base.css", ".base {}");

        let config = AnalysisConfig {
            extensions: vec![".scss".to_string()],
            ..AnalysisConfig::default()
        };
        let result = FileDiscovery::new(&config)
            .unwrap()
            .discover(&[dir.path().to_string_lossy()]);
        assert_eq!(result.files, vec![upper]);
    }

    #[test]
    fn explicit_files_are_kept_once() {
        let dir = TempDir::new().unwrap();
        let file = write(dir.path(), "a.scss", ".a {}");
        let input = file.to_string_lossy().into_owned();

        let result = discovery().discover(&[input.clone(), input]);
        assert_eq!(result.files, vec![file]);
    }

    #[test]
    fn missing_paths_become_file_errors() {
        let result = discovery().discover(&["/no/such/dir/app.scss"]);
        assert!(result.files.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "path does not exist");
    }

    #[test]
    fn glob_patterns_expand_and_report_empty_matches() {
        let dir = TempDir::new().unwrap();
        let file = write(dir.path(), "src/card.scss", ".card {}");

        let pattern = format!("{}/**/*.scss", dir.path().display());
        let result = discovery().discover(&[pattern]);
        assert_eq!(result.files, vec![file]);

        let pattern = format!("{}/**/*.less", dir.path().display());
        let result = discovery().discover(&[pattern]);
        assert!(result.files.is_empty());
        assert_eq!(result.errors[0].message, "no files matched pattern");
    }

    #[test]
    fn include_patterns_restrict_walked_files() {
        let dir = TempDir::new().unwrap();
        let kept = write(dir.path(), "components/card.scss", ".card {}");
        write(dir.path(), "legacy/old.scss", ".old {}");

        let config = AnalysisConfig {
            include_patterns: vec!["components/**".to_string()],
            ..AnalysisConfig::default()
        };
        let result = FileDiscovery::new(&config)
            .unwrap()
            .discover(&[dir.path().to_string_lossy()]);
        assert_eq!(result.files, vec![kept]);
    }

    #[test]
    fn oversized_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "big.scss", &".a {}\n".repeat(100));

        let config = AnalysisConfig {
            max_file_size_bytes: 16,
            ..AnalysisConfig::default()
        };
        let result = FileDiscovery::new(&config)
            .unwrap()
            .discover(&[dir.path().to_string_lossy()]);
        assert!(result.files.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn compile_globset_rejects_invalid_patterns() {
        assert!(compile_globset(&["[invalid".to_string()]).is_err());
        assert!(compile_globset(&[]).unwrap().is_none());

        let valid = compile_globset(&["**/*.scss".to_string()]).unwrap();
        assert!(valid.unwrap().is_match("src/app.scss"));
    }
}
