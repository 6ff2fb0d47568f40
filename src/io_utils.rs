//! Error reporting helpers for the command-line binary.

use std::fmt;
use std::io;
use std::path::Path;

/// Failure surfaced to the CLI user, with an optional underlying cause.
#[derive(Debug)]
pub struct CliError {
    msg: String,
    source: Option<io::Error>,
}

impl CliError {
    /// Wrap an I/O failure with the operation and path that caused it,
    /// plus a short suggestion keyed on the error kind.
    pub fn io(operation: &str, path: &Path, err: io::Error) -> Self {
        let suggestion = match err.kind() {
            io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
            io::ErrorKind::PermissionDenied => "Check permissions or run as a different user.",
            io::ErrorKind::InvalidData => "The file does not look like plain text.",
            _ => "Check permissions and that the file is readable.",
        };
        CliError {
            msg: format!(
                "Error {} '{}': {}. {}",
                operation,
                path.display(),
                err,
                suggestion
            ),
            source: Some(err),
        }
    }

    /// Plain message without an underlying cause.
    pub fn msg(msg: impl Into<String>) -> Self {
        CliError {
            msg: msg.into(),
            source: None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_carry_path_suggestion_and_source() {
        let err = CliError::io(
            "reading corpus from",
            Path::new("missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("Check that the file exists"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn plain_messages_have_no_source() {
        let err = CliError::msg("search failed");
        assert_eq!(err.to_string(), "search failed");
        assert!(std::error::Error::source(&err).is_none());
    }
}
