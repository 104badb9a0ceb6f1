//! Generic YAML tree adapter.
//!
//! Text <-> `serde_yml::Value` (map / sequence / scalar), plus the single
//! open-read-close and open-write-close file cycles used by the editor.
//! Knows nothing about frames.

use std::fs;
use std::path::Path;

use log::trace;
use serde_yml::Value;

use crate::error::{EditorError, Result};

/// Parse YAML text into a generic tree.
pub fn parse(text: &str) -> Result<Value> {
    serde_yml::from_str(text).map_err(|e| EditorError::InvalidDocument(format!("YAML parse error: {}", e)))
}

/// Serialize a generic tree back to YAML text.
pub fn emit(value: &Value) -> Result<String> {
    serde_yml::to_string(value).map_err(|e| EditorError::Emit(e.to_string()))
}

/// Read and parse a YAML file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| EditorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    trace!("Read {} bytes from {}", text.len(), path.display());
    parse(&text)
}

/// Serialize a tree and write it to `path`, replacing any existing file.
pub fn write_file<P: AsRef<Path>>(path: P, value: &Value) -> Result<()> {
    let path = path.as_ref();
    let text = emit(value)?;
    fs::write(path, &text).map_err(|source| EditorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    trace!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: Broken YAML is an invalid document
    /// Validates: syntax errors map to InvalidDocument, not a panic
    #[test]
    fn test_parse_syntax_error() {
        let result = parse("- [unclosed\n- {a: ");
        assert!(matches!(result, Err(EditorError::InvalidDocument(_))));
    }

    /// Test: Tree survives emit + parse
    /// Validates: emitted text parses back to an equal tree
    #[test]
    fn test_emit_parse_equal() {
        let tree = parse("- a: 1\n  b: [x, y]\n- 2.5\n- null\n").unwrap();
        let text = emit(&tree).unwrap();
        assert_eq!(parse(&text).unwrap(), tree);
    }

    /// Test: Missing file
    /// Validates: read failure is reported as Io with the path
    #[test]
    fn test_read_missing_file() {
        let result = read_file("/nonexistent/dir/motion.yaml");
        match result {
            Err(EditorError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/dir/motion.yaml"))
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    /// Test: Unwritable destination
    /// Validates: write failure is reported as Io
    #[test]
    fn test_write_bad_destination() {
        let tree = parse("- 1\n").unwrap();
        let result = write_file("/nonexistent/dir/out.yaml", &tree);
        assert!(matches!(result, Err(EditorError::Io { .. })));
    }
}
