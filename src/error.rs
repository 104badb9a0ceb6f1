//! Error taxonomy for loading, editing and saving motion documents.
//!
//! Every failure is returned to the caller of the operation that caused it.
//! Nothing here is retried and nothing is logged by the library itself.

use std::path::PathBuf;

/// Motion editor errors
#[derive(Debug)]
pub enum EditorError {
    /// File could not be opened, read or written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Text is not YAML, or the top level is not a sequence
    InvalidDocument(String),
    /// A frame candidate violates the frame shape.
    /// `frame` is the frame name, or `#<index>` when the name is unreadable.
    MalformedFrame { frame: String, reason: String },
    /// Edit addressed to a frame name that does not exist
    FrameNotFound(String),
    /// Strict edit referenced a joint name missing from the joint map
    UnknownJoint(String),
    /// Rebuilt tree could not be serialized
    Emit(String),
}

impl EditorError {
    pub(crate) fn malformed(frame: impl Into<String>, reason: impl Into<String>) -> Self {
        EditorError::MalformedFrame {
            frame: frame.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            EditorError::InvalidDocument(msg) => write!(f, "Invalid motion document: {}", msg),
            EditorError::MalformedFrame { frame, reason } => {
                write!(f, "Malformed frame '{}': {}", frame, reason)
            }
            EditorError::FrameNotFound(name) => write!(f, "Frame not found: {}", name),
            EditorError::UnknownJoint(name) => write!(f, "Unknown joint name: {}", name),
            EditorError::Emit(msg) => write!(f, "YAML emit error: {}", msg),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: Display names the offending frame
    /// Validates: MalformedFrame message carries frame and reason
    #[test]
    fn test_malformed_display() {
        let err = EditorError::malformed("#3", "'dxl' is not a sequence");
        assert_eq!(err.to_string(), "Malformed frame '#3': 'dxl' is not a sequence");
    }

    /// Test: Io error exposes its source
    /// Validates: error chain is preserved for anyhow callers
    #[test]
    fn test_io_source() {
        use std::error::Error;
        let err = EditorError::Io {
            path: PathBuf::from("/nope/motion.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/nope/motion.yaml"));
    }
}
