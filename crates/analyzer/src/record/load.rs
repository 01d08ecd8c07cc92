//! Load — read a log collection from a JSON source file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{AnalyzeError, AnalyzeResult};

use super::model::LogRecord;

/// Read the whole source into memory and parse it as a JSON array of
/// records. The file handle is scoped to this function and released on
/// every path, parse failure included.
pub fn load_records(path: &Path) -> AnalyzeResult<Vec<LogRecord>> {
    let mut file = File::open(path).map_err(|source| AnalyzeError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| AnalyzeError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;

    let records: Vec<LogRecord> =
        serde_json::from_str(&contents).map_err(|source| AnalyzeError::MalformedSource {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(records = records.len(), "Loaded log collection from {}", path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("logsift-load-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_load_records_happy_path() {
        let path = temp_path("ok.json");
        std::fs::write(
            &path,
            r#"[
                {"user":"ana","action":"login","ip":"1.1.1.1","status":200,"timestamp":"2025-01-14T10:23:11"},
                {"user":"bob","action":"login","ip":"2.2.2.2","status":404,"timestamp":"2025-01-14T10:24:02"}
            ]"#,
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user, "ana");
        assert_eq!(records[1].status, 404);
    }

    #[test]
    fn test_load_records_empty_array() {
        let path = temp_path("empty.json");
        std::fs::write(&path, "[]").unwrap();
        let records = load_records(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records(Path::new("/nonexistent/logs.json")).unwrap_err();
        assert!(matches!(err, AnalyzeError::ReadSource { .. }));
    }

    #[test]
    fn test_load_records_malformed_json() {
        let path = temp_path("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_records(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, AnalyzeError::MalformedSource { .. }));
    }

    #[test]
    fn test_load_records_record_missing_key() {
        // A record without "action" fails the whole load, per the
        // precondition that records are well-formed.
        let path = temp_path("missing-key.json");
        std::fs::write(
            &path,
            r#"[{"user":"ana","ip":"1.1.1.1","status":200,"timestamp":"2025-01-14T10:23:11"}]"#,
        )
        .unwrap();
        let err = load_records(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, AnalyzeError::MalformedSource { .. }));
    }
}
