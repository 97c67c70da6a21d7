//! Loading the list of selectors to check.
//!
//! A checks file is a JSON array of strings:
//!
//! ```json
//! ["h1", "#header a", "div.grid > div"]
//! ```

use std::fs;
use std::path::Path;

use crate::error::{GraderError, Result};

/// Ordered sequence of selector strings as read from a checks file.
///
/// Duplicates are kept; the evaluator collapses them into one result key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSpec {
    selectors: Vec<String>,
}

impl CheckSpec {
    pub fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Selectors in lexicographic order, leaving `self` untouched.
    ///
    /// Strings compare by UTF-16 code units, the order JavaScript's
    /// `Array.prototype.sort` produces for checks files shared with web tooling.
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.selectors.iter().map(String::as_str).collect();
        sorted.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
        sorted
    }
}

impl From<Vec<String>> for CheckSpec {
    fn from(selectors: Vec<String>) -> Self {
        Self::new(selectors)
    }
}

impl<'a> From<&[&'a str]> for CheckSpec {
    fn from(selectors: &[&'a str]) -> Self {
        Self::new(selectors.iter().map(|s| s.to_string()).collect())
    }
}

/// Read and validate a checks file.
pub fn load_checks(path: &Path) -> Result<CheckSpec> {
    if !path.exists() {
        return Err(GraderError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read(path).map_err(|source| GraderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_checks_bytes(&content).map_err(|message| GraderError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Validate checks held in memory. `origin` names the source in errors.
pub fn parse_checks(text: &str, origin: &Path) -> Result<CheckSpec> {
    parse_checks_bytes(text.as_bytes()).map_err(|message| GraderError::Parse {
        path: origin.to_path_buf(),
        message,
    })
}

fn parse_checks_bytes(content: &[u8]) -> std::result::Result<CheckSpec, String> {
    let value: serde_json::Value =
        serde_json::from_slice(content).map_err(|e| format!("invalid JSON: {}", e))?;

    let items = value
        .as_array()
        .ok_or_else(|| format!("expected a JSON array of strings, found {}", kind_of(&value)))?;

    let mut selectors = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) => selectors.push(s.to_string()),
            None => {
                return Err(format!(
                    "element {} is {}, expected a string",
                    index,
                    kind_of(item)
                ))
            }
        }
    }

    Ok(CheckSpec::new(selectors))
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_checks_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checks.json");
        fs::write(&path, r##"["h1", "#header a", "div.grid > div"]"##).unwrap();

        let checks = load_checks(&path).unwrap();
        assert_eq!(checks.selectors(), ["h1", "#header a", "div.grid > div"]);
    }

    #[test]
    fn test_load_checks_missing_file() {
        let err = load_checks(Path::new("/no/such/checks.json")).unwrap_err();
        assert!(matches!(err, GraderError::NotFound { .. }));
    }

    #[test]
    fn test_load_checks_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checks.json");
        fs::write(&path, "[\"h1\",").unwrap();

        let err = load_checks(&path).unwrap_err();
        assert!(matches!(err, GraderError::Parse { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_parse_checks_rejects_non_array() {
        let err = parse_checks(r#"{"h1": true}"#, Path::new("inline")).unwrap_err();
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn test_parse_checks_rejects_non_string_element() {
        let err = parse_checks(r#"["h1", 42]"#, Path::new("inline")).unwrap_err();
        match err {
            GraderError::Parse { message, .. } => {
                assert_eq!(message, "element 1 is a number, expected a string");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_checks_empty_array() {
        let checks = parse_checks("[]", Path::new("inline")).unwrap();
        assert!(checks.is_empty());
    }

    #[test]
    fn test_sorted_keeps_duplicates_and_input_order() {
        let checks = CheckSpec::from(&["h1", "a", "div", "a"][..]);
        assert_eq!(checks.sorted(), vec!["a", "a", "div", "h1"]);
        assert_eq!(checks.selectors(), ["h1", "a", "div", "a"]);
    }

    #[test]
    fn test_sorted_compares_utf16_code_units() {
        // U+1F600 encodes as surrogates 0xD83D 0xDE00, below U+FF61
        let checks = CheckSpec::from(&["p.\u{FF61}", "p.\u{1F600}", "p.a"][..]);
        assert_eq!(checks.sorted(), vec!["p.a", "p.\u{1F600}", "p.\u{FF61}"]);
    }
}
