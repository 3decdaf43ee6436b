//! Glob filtering and change-status classification.

use crate::error::{RunError, RunResult};
use crate::format::OutputFormat;
use changed_files_github::ChangedFile;
use globset::{GlobBuilder, GlobSetBuilder};
use tracing::info;

/// Change status reported by the comparison for a single file. Anything
/// outside this set is rejected during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
}

impl FileStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "added" => Some(Self::Added),
            "modified" => Some(Self::Modified),
            "removed" => Some(Self::Removed),
            "renamed" => Some(Self::Renamed),
            _ => None,
        }
    }
}

/// The classified result sets, in encounter order. Built once per run and
/// handed unchanged to the formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFileSets {
    pub all: Vec<String>,
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub removed: Vec<String>,
    pub renamed: Vec<String>,
    pub added_modified: Vec<String>,
}

/// Keeps only files matching at least one of the comma-separated globs.
/// Patterns are trimmed so `"dir/**, **/*.inc"` reads naturally.
pub fn apply_filter(files: Vec<ChangedFile>, filter: &str) -> RunResult<Vec<ChangedFile>> {
    let mut builder = GlobSetBuilder::new();
    for pattern in filter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let glob = GlobBuilder::new(pattern)
            // `*` and `?` must not cross directory separators; `**` does.
            .literal_separator(true)
            .build()
            .map_err(anyhow::Error::from)?;
        builder.add(glob);
    }
    let globs = builder.build().map_err(anyhow::Error::from)?;

    info!("Filtering files to match {filter}");
    let original_count = files.len();
    let files: Vec<ChangedFile> = files
        .into_iter()
        .filter(|file| globs.is_match(&file.filename))
        .collect();
    info!("Filtered out {} files", original_count - files.len());

    Ok(files)
}

/// Partitions the files into the named result sets.
///
/// All-or-nothing: the first illegal filename or unknown status aborts the
/// whole classification so no partial output can ever be emitted.
pub fn classify(files: &[ChangedFile], format: OutputFormat) -> RunResult<ChangedFileSets> {
    let mut sets = ChangedFileSets::default();

    for file in files {
        // Space-delimited output cannot represent these filenames at all.
        if format == OutputFormat::SpaceDelimited && file.filename.contains(' ') {
            return Err(RunError::SpaceInFilename(file.filename.clone()));
        }

        sets.all.push(file.filename.clone());
        match FileStatus::parse(&file.status) {
            Some(FileStatus::Added) => {
                sets.added.push(file.filename.clone());
                sets.added_modified.push(file.filename.clone());
            }
            Some(FileStatus::Modified) => {
                sets.modified.push(file.filename.clone());
                sets.added_modified.push(file.filename.clone());
            }
            Some(FileStatus::Removed) => {
                sets.removed.push(file.filename.clone());
            }
            Some(FileStatus::Renamed) => {
                sets.renamed.push(file.filename.clone());
            }
            None => {
                return Err(RunError::UnknownFileStatus {
                    status: file.status.clone(),
                    filename: file.filename.clone(),
                });
            }
        }
    }

    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_files() -> Vec<ChangedFile> {
        vec![
            ChangedFile::new("file.txt", "modified"),
            ChangedFile::new("dir/file2.txt", "renamed"),
            ChangedFile::new("addedFile", "added"),
            ChangedFile::new("removedFile", "removed"),
        ]
    }

    #[test]
    fn test_classify_partitions_by_status() {
        let sets = classify(&sample_files(), OutputFormat::Csv).unwrap();
        assert_eq!(
            sets.all,
            ["file.txt", "dir/file2.txt", "addedFile", "removedFile"]
        );
        assert_eq!(sets.added, ["addedFile"]);
        assert_eq!(sets.modified, ["file.txt"]);
        assert_eq!(sets.removed, ["removedFile"]);
        assert_eq!(sets.renamed, ["dir/file2.txt"]);
        // Union of added and modified, in encounter order.
        assert_eq!(sets.added_modified, ["file.txt", "addedFile"]);
    }

    #[test]
    fn test_classify_rejects_unknown_status() {
        let files = vec![
            ChangedFile::new("file.txt", "modified"),
            ChangedFile::new("dir/file2.txt", "surprise"),
        ];
        let err = classify(&files, OutputFormat::Csv).unwrap_err();
        assert_eq!(
            err.to_string(),
            "One of your files includes an unsupported file status 'surprise' for 'dir/file2.txt', expected 'added', 'modified', 'removed', or 'renamed'."
        );
    }

    #[test]
    fn test_classify_rejects_spaces_in_space_delimited_mode() {
        let files = vec![ChangedFile::new("dir3/file with space.js", "added")];
        let err = classify(&files, OutputFormat::SpaceDelimited).unwrap_err();
        assert!(matches!(
            err,
            RunError::SpaceInFilename(name) if name == "dir3/file with space.js"
        ));
    }

    #[test]
    fn test_spaces_are_fine_in_other_formats() {
        let files = vec![ChangedFile::new("dir3/file with space.js", "added")];
        let sets = classify(&files, OutputFormat::Json).unwrap();
        assert_eq!(sets.all, ["dir3/file with space.js"]);
    }

    #[test]
    fn test_apply_filter_keeps_any_match() {
        let mut files = sample_files();
        files[3] = ChangedFile::new("removedFile.inc", "removed");

        let filtered = apply_filter(files, "dir/**, **/*.inc").unwrap();
        let names: Vec<&str> = filtered.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, ["dir/file2.txt", "removedFile.inc"]);
    }

    #[test]
    fn test_apply_filter_star_does_not_cross_directories() {
        let files = vec![
            ChangedFile::new("a.rs", "added"),
            ChangedFile::new("src/lib.rs", "modified"),
        ];
        let filtered = apply_filter(files, "*.rs").unwrap();
        let names: Vec<&str> = filtered.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, ["a.rs"]);
    }

    #[test]
    fn test_apply_filter_brace_alternates() {
        let files = vec![
            ChangedFile::new("src/a.rs", "added"),
            ChangedFile::new("src/a.md", "added"),
            ChangedFile::new("src/a.toml", "added"),
        ];
        let filtered = apply_filter(files, "src/*.{rs,md}").unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_file_status_parse() {
        assert_eq!(FileStatus::parse("added"), Some(FileStatus::Added));
        assert_eq!(FileStatus::parse("modified"), Some(FileStatus::Modified));
        assert_eq!(FileStatus::parse("removed"), Some(FileStatus::Removed));
        assert_eq!(FileStatus::parse("renamed"), Some(FileStatus::Renamed));
        assert_eq!(FileStatus::parse("copied"), None);
    }
}
