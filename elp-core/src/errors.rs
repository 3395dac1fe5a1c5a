//! Error types for loading and validating ELP2000-82B coefficient data.
//!
//! Evaluating the lunar series cannot fail. Everything that can go wrong
//! happens at the data boundary: the ELP files are missing or unreadable, a
//! record does not match the published layout, or a table set has the wrong
//! shape.
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`DataError`](ElpError::DataError) | File I/O, missing data directory, network | Yes |
//! | [`ParseError`](ElpError::ParseError) | Malformed record in an ELP file | No |
//! | [`TableError`](ElpError::TableError) | Table numbering or family mismatch | No |
//!
//! ```
//! use elp_core::ElpError;
//!
//! let err = ElpError::parse_error(4, 12, "phase field is not a number");
//! assert_eq!(
//!     err.to_string(),
//!     "Parse error in ELP4 line 12: phase field is not a number"
//! );
//! ```

use thiserror::Error;

/// Unified error type for the ELP2000-82B data layer.
#[derive(Error, Debug)]
pub enum ElpError {
    /// Data access failure (file I/O, lookup of the data directory, download).
    ///
    /// This is the only recoverable variant: pointing at another directory or
    /// fetching the files again may succeed.
    #[error("Data error ({file_type} - {operation}): {message}")]
    DataError {
        file_type: String,
        operation: String,
        message: String,
    },

    /// A record in table `ELP{table}` does not follow the published layout.
    #[error("Parse error in ELP{table} line {line}: {message}")]
    ParseError {
        table: u8,
        line: usize,
        message: String,
    },

    /// A table set violates the 36-table catalog.
    #[error("Table error for ELP{table}: {message}")]
    TableError { table: u8, message: String },
}

/// Convenience alias for `Result<T, ElpError>`.
pub type ElpResult<T> = Result<T, ElpError>;

impl ElpError {
    /// Creates a [`DataError`](Self::DataError).
    pub fn data_error(file_type: &str, operation: &str, reason: &str) -> Self {
        Self::DataError {
            file_type: file_type.to_string(),
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`ParseError`](Self::ParseError) for a 1-based line number.
    pub fn parse_error(table: u8, line: usize, reason: &str) -> Self {
        Self::ParseError {
            table,
            line,
            message: reason.to_string(),
        }
    }

    /// Creates a [`TableError`](Self::TableError).
    pub fn table_error(table: u8, reason: &str) -> Self {
        Self::TableError {
            table,
            message: reason.to_string(),
        }
    }

    /// Returns `true` if retrying with other data might succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DataError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error() {
        let err = ElpError::data_error("ELP7", "read", "permission denied");
        assert_eq!(
            err.to_string(),
            "Data error (ELP7 - read): permission denied"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = ElpError::parse_error(21, 3, "expected 11 multipliers");
        assert!(err.to_string().contains("ELP21 line 3"));
        assert!(err.to_string().contains("expected 11 multipliers"));
    }

    #[test]
    fn test_table_error() {
        let err = ElpError::table_error(10, "expected a planetary table");
        assert_eq!(
            err.to_string(),
            "Table error for ELP10: expected a planetary table"
        );
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(ElpError::data_error("ELP1", "open", "not found").is_recoverable());
        assert!(!ElpError::parse_error(1, 1, "bad").is_recoverable());
        assert!(!ElpError::table_error(1, "bad").is_recoverable());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<ElpError>();
        _assert_sync::<ElpError>();
    }
}
