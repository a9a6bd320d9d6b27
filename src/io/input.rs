use std::path::Path;

use crate::error::{Result, TrendError};
use crate::models::RawRecord;

/// Parse a Takeout `watch-history.json` file
pub fn parse_history_file(path: &Path) -> Result<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| TrendError::io(path, e))?;
    parse_history_json(&content)
}

/// Parse the JSON array of a Takeout watch history
pub fn parse_history_json(json: &str) -> Result<Vec<RawRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_history_json() {
        let json = r#"[
            {"header": "YouTube", "title": "Watched Cat Video", "time": "2020-01-01T10:00:00.000Z"},
            {"header": "YouTube", "title": "Watched Dog Video", "time": "2020-01-02T10:00:00.000Z", "titleUrl": "https://www.youtube.com/watch?v=x"}
        ]"#;

        let records = parse_history_json(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title.as_deref(), Some("Watched Dog Video"));
    }

    #[test]
    fn test_empty_history() {
        assert!(parse_history_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_not_an_array() {
        let err = parse_history_json(r#"{"title": "x"}"#).unwrap_err();
        assert!(matches!(err, TrendError::Json(_)));
    }

    #[test]
    fn test_parse_history_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Watched Cat Video", "time": "2020-01-01T10:00:00Z"}}]"#).unwrap();

        let records = parse_history_file(file.path()).unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = parse_history_file(Path::new("/nonexistent/watch-history.json")).unwrap_err();
        assert!(matches!(err, TrendError::Io { .. }));
    }
}
