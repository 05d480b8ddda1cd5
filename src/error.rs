//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while classifying scans and
//! calculating session hours.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the host application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/boundaries.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/boundaries.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The engine configuration is internally inconsistent.
    ///
    /// This is a programmer/deployment error (e.g. a session window whose
    /// end precedes its start), never a runtime data condition.
    #[error("Invalid engine configuration: {message}")]
    Configuration {
        /// A description of the inconsistency.
        message: String,
    },

    /// The attendance store rejected or failed an operation.
    #[error("Attendance store failure during {operation}: {message}")]
    Store {
        /// The store operation that failed (e.g. "append").
        operation: String,
        /// A description of the failure.
        message: String,
    },

    /// A scan could not be processed into a valid clock event.
    #[error("Invalid scan for employee '{employee_id}': {message}")]
    InvalidScan {
        /// The employee whose scan was rejected.
        employee_id: String,
        /// A description of what made the scan invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/boundaries.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/boundaries.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_configuration_displays_message() {
        let error = EngineError::Configuration {
            message: "morning window ends before it starts".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid engine configuration: morning window ends before it starts"
        );
    }

    #[test]
    fn test_store_displays_operation_and_message() {
        let error = EngineError::Store {
            operation: "append".to_string(),
            message: "duplicate pending clock-in".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Attendance store failure during append: duplicate pending clock-in"
        );
    }

    #[test]
    fn test_invalid_scan_displays_employee_and_message() {
        let error = EngineError::InvalidScan {
            employee_id: "emp_001".to_string(),
            message: "scan predates last accepted event".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid scan for employee 'emp_001': scan predates last accepted event"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
