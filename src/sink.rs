//! JSON serialization and output sinks.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::entry::ApiEntry;
use crate::error::{Error, Result};

/// Where the serialized JSON ends up. Exactly one sink is active per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Write pretty JSON to the named file.
    File(PathBuf),
    /// Write raw JSON to stdout.
    Stream,
}

/// Serialize the entries as pretty-printed JSON (two-space indentation).
pub fn to_json(entries: &[ApiEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Serialize and write the entries to the selected sink.
pub fn write_entries(entries: &[ApiEntry], mode: &OutputMode) -> Result<()> {
    let json = to_json(entries)?;
    match mode {
        OutputMode::File(path) => fs::write(path, json).map_err(|source| Error::Sink {
            path: path.clone(),
            source,
        }),
        OutputMode::Stream => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| Error::Sink {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ApiEntry> {
        vec![ApiEntry {
            name: "map".to_string(),
            aliases: vec!["collect".to_string()],
            arguments: vec!["list".to_string(), "iteratee".to_string()],
            description: "Produces a new array of values.".to_string(),
        }]
    }

    #[test]
    fn to_json_uses_two_space_indentation() {
        let json = to_json(&sample()).expect("serializes");
        assert!(json.starts_with("[\n  {\n    \"name\": \"map\""));
        assert!(json.ends_with("}\n]"));
    }

    #[test]
    fn to_json_empty_sequence_is_empty_array() {
        assert_eq!(to_json(&[]).expect("serializes"), "[]");
    }

    #[test]
    fn write_entries_creates_file_with_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("api.json");

        write_entries(&sample(), &OutputMode::File(path.clone())).expect("writes");

        let written = std::fs::read_to_string(&path).expect("file readable");
        let parsed: Vec<ApiEntry> = serde_json::from_str(&written).expect("round-trips");
        assert_eq!(parsed, sample());
    }

    #[test]
    fn write_entries_reports_unwritable_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("api.json");

        let result = write_entries(&sample(), &OutputMode::File(path));
        assert!(matches!(result, Err(Error::Sink { .. })));
    }
}
