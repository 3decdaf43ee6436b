//! Output serialization and emission.

use crate::classify::ChangedFileSets;
use crate::error::{RunError, RunResult};
use changed_files_core::outputs::OutputSink;
use std::fmt;
use tracing::info;

/// How each result set is serialized. Only `Json` can safely represent
/// filenames containing spaces or commas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    SpaceDelimited,
    Csv,
    Json,
}

impl OutputFormat {
    /// Validates the requested format before anything else runs.
    pub fn parse(value: &str) -> RunResult<Self> {
        match value {
            "space-delimited" => Ok(Self::SpaceDelimited),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(RunError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpaceDelimited => "space-delimited",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes one result set. CSV does not escape embedded commas; that
/// limitation is inherent to the format.
pub fn render(format: OutputFormat, files: &[String]) -> RunResult<String> {
    Ok(match format {
        OutputFormat::SpaceDelimited => files.join(" "),
        OutputFormat::Csv => files.join(","),
        OutputFormat::Json => serde_json::to_string(files).map_err(anyhow::Error::from)?,
    })
}

/// Serializes every result set and hands them to the sink. `deleted`
/// duplicates `removed` for older consumers.
pub fn emit(
    sink: &mut dyn OutputSink,
    sets: &ChangedFileSets,
    format: OutputFormat,
) -> RunResult<()> {
    let all = render(format, &sets.all)?;
    let added = render(format, &sets.added)?;
    let modified = render(format, &sets.modified)?;
    let removed = render(format, &sets.removed)?;
    let renamed = render(format, &sets.renamed)?;
    let added_modified = render(format, &sets.added_modified)?;

    info!("All: {all}");
    info!("Added: {added}");
    info!("Modified: {modified}");
    info!("Removed: {removed}");
    info!("Renamed: {renamed}");
    info!("Added or modified: {added_modified}");

    sink.set_output("all", &all)?;
    sink.set_output("added", &added)?;
    sink.set_output("modified", &modified)?;
    sink.set_output("removed", &removed)?;
    sink.set_output("renamed", &renamed)?;
    sink.set_output("added_modified", &added_modified)?;
    sink.set_output("deleted", &removed)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_parse_accepts_the_three_formats() {
        assert_eq!(
            OutputFormat::parse("space-delimited").unwrap(),
            OutputFormat::SpaceDelimited
        );
        assert_eq!(OutputFormat::parse("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_parse_rejects_anything_else() {
        let err = OutputFormat::parse("unsupported format").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Format must be one of 'space-delimited', 'csv', or 'json', got 'unsupported format'."
        );
    }

    #[test]
    fn test_render_space_delimited() {
        let rendered = render(OutputFormat::SpaceDelimited, &files(&["a.txt", "b/c.txt"])).unwrap();
        assert_eq!(rendered, "a.txt b/c.txt");
    }

    #[test]
    fn test_render_csv() {
        let rendered = render(OutputFormat::Csv, &files(&["a.txt", "b/c.txt"])).unwrap();
        assert_eq!(rendered, "a.txt,b/c.txt");
    }

    #[test]
    fn test_render_json_handles_awkward_filenames() {
        let rendered = render(
            OutputFormat::Json,
            &files(&["dir3/file with space.js", "a,b.txt"]),
        )
        .unwrap();
        assert_eq!(rendered, r#"["dir3/file with space.js","a,b.txt"]"#);
    }

    #[test]
    fn test_render_empty_set() {
        assert_eq!(render(OutputFormat::Csv, &[]).unwrap(), "");
        assert_eq!(render(OutputFormat::Json, &[]).unwrap(), "[]");
    }
}
