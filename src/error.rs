//! Error handling for the stdcoll library
//!
//! Every fallible container operation reports a [`CollError`]. Caller mistakes
//! that would be undefined behavior in a pointer-based container (erasing
//! through `end()`, reading the front of an empty list) are reported here as
//! well, so a failed call never leaves a container half-modified.

use thiserror::Error;

/// Main error type for the stdcoll library
#[derive(Error, Debug)]
pub enum CollError {
    /// I/O related errors (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Positional access beyond the current size
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Keyed access to a key that is not stored
    #[error("Out of range: key not found")]
    KeyNotFound,

    /// Cursor is `end()`, stale, or does not refer to a live element
    #[error("Invalid cursor passed to {operation}")]
    InvalidCursor {
        /// The operation that rejected the cursor
        operation: &'static str,
    },

    /// Element access or removal on an empty container
    #[error("Container is empty: cannot {operation}")]
    EmptyContainer {
        /// The operation that needed an element
        operation: &'static str,
    },

    /// Memory or slot-space exhaustion
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes (or slots) requested
        size: usize,
    },

    /// A structural invariant does not hold
    #[error("Corrupt structure: {message}")]
    CorruptStructure {
        /// Description of the first violated invariant
        message: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl CollError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a key not found error
    pub fn key_not_found() -> Self {
        Self::KeyNotFound
    }

    /// Create an invalid cursor error
    pub fn invalid_cursor(operation: &'static str) -> Self {
        Self::InvalidCursor { operation }
    }

    /// Create an empty container error
    pub fn empty(operation: &'static str) -> Self {
        Self::EmptyContainer { operation }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create a corrupt structure error
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        Self::CorruptStructure {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Positional or keyed access outside the stored range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::KeyNotFound)
    }

    /// The caller broke an operation's precondition
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCursor { .. } | Self::EmptyContainer { .. }
        )
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::OutOfMemory { .. } => true,
            Self::OutOfBounds { .. } => false,
            Self::KeyNotFound => false,
            Self::InvalidCursor { .. } => false,
            Self::EmptyContainer { .. } => false,
            Self::CorruptStructure { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::OutOfBounds { .. } => "bounds",
            Self::KeyNotFound => "bounds",
            Self::InvalidCursor { .. } => "precondition",
            Self::EmptyContainer { .. } => "precondition",
            Self::OutOfMemory { .. } => "memory",
            Self::CorruptStructure { .. } => "invariant",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CollError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(CollError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that an insertion position is within `0..=size`
#[inline]
pub fn check_position(index: usize, size: usize) -> Result<()> {
    if index > size {
        Err(CollError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that a range is within bounds
#[inline]
pub fn check_range(start: usize, end: usize, size: usize) -> Result<()> {
    if start > end {
        return Err(CollError::out_of_bounds(start, end));
    }
    if end > size {
        return Err(CollError::out_of_bounds(end, size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CollError::key_not_found();
        assert_eq!(err.category(), "bounds");
        assert!(err.is_out_of_range());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_bounds_checking() {
        assert!(check_bounds(5, 10).is_ok());
        assert!(check_bounds(10, 10).is_err());
        assert!(check_bounds(15, 10).is_err());
        assert!(check_bounds(0, 0).is_err());
    }

    #[test]
    fn test_position_checking() {
        assert!(check_position(0, 0).is_ok());
        assert!(check_position(10, 10).is_ok());
        assert!(check_position(11, 10).is_err());
    }

    #[test]
    fn test_range_checking() {
        assert!(check_range(2, 8, 10).is_ok());
        assert!(check_range(5, 5, 5).is_ok());
        assert!(check_range(8, 2, 10).is_err());
        assert!(check_range(2, 15, 10).is_err());
    }

    #[test]
    fn test_classification() {
        let cursor = CollError::invalid_cursor("erase");
        assert!(cursor.is_precondition_violation());
        assert!(!cursor.is_out_of_range());
        assert_eq!(cursor.category(), "precondition");

        let empty = CollError::empty("pop");
        assert!(empty.is_precondition_violation());

        let bounds = CollError::out_of_bounds(3, 1);
        assert!(bounds.is_out_of_range());
        assert!(!bounds.is_precondition_violation());

        let memory = CollError::out_of_memory(1024);
        assert_eq!(memory.category(), "memory");
        assert!(memory.is_recoverable());

        let corrupt = CollError::corrupt("height mismatch");
        assert_eq!(corrupt.category(), "invariant");
        assert!(!corrupt.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let bounds_display = format!("{}", CollError::out_of_bounds(10, 5));
        assert!(bounds_display.contains("Out of bounds"));
        assert!(bounds_display.contains("10"));
        assert!(bounds_display.contains("5"));

        let cursor_display = format!("{}", CollError::invalid_cursor("erase"));
        assert!(cursor_display.contains("erase"));

        let config_display = format!("{}", CollError::configuration("growth factor"));
        assert!(config_display.contains("Invalid configuration"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CollError = io_error.into();
        assert_eq!(err.category(), "io");
        assert!(err.is_recoverable());
        assert!(format!("{}", err).contains("I/O error"));
    }
}
