// Copyright 2025 Cowboy AI, LLC.

//! Error types for logic operations

use thiserror::Error;

/// Errors that can occur in logic operations
///
/// Every combinator in this crate is a total function over `bool`, so the
/// error surface is deliberately small: a guard for the non-instantiable
/// namespace type and a parse failure for operator mnemonics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LogicError {
    /// Attempted to construct a namespace type that has no instances
    #[error("Unsupported construction: {type_name} is a namespace of free functions and cannot be instantiated")]
    UnsupportedConstruction {
        /// Name of the type whose construction was attempted
        type_name: String,
    },

    /// An operator mnemonic did not match any known operator
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

/// Result type for logic operations
pub type LogicResult<T> = Result<T, LogicError>;

impl LogicError {
    /// Create an unsupported-construction error for the named type
    pub fn unsupported_construction(type_name: impl Into<String>) -> Self {
        LogicError::UnsupportedConstruction {
            type_name: type_name.into(),
        }
    }

    /// Check if this is a construction guard error
    pub fn is_unsupported_construction(&self) -> bool {
        matches!(self, LogicError::UnsupportedConstruction { .. })
    }
}
