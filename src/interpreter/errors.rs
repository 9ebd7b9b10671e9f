//! Evaluation error types
//!
//! This module defines [`EvalError`], which represents every way an expression
//! can fail to produce a value. The evaluator's public soft-failure entry point
//! logs these and returns `None`; callers that need the detail use
//! [`try_evaluate`](super::evaluator::try_evaluate).

use crate::parser::ast::SourceLocation;
use crate::parser::parse::ParseError;
use thiserror::Error;

/// Errors that can occur while evaluating an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Text is not in the expression grammar
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Undefined variable '{name}' at column {}", .location.column)]
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },

    #[error("Type error at column {}: expected {expected}, got {got}", .location.column)]
    TypeError {
        expected: String,
        got: String,
        location: SourceLocation,
    },

    #[error("Invalid array index {index} at column {}", .location.column)]
    InvalidIndex { index: f64, location: SourceLocation },

    #[error("Index {index} out of bounds for length {len} at column {}", .location.column)]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        location: SourceLocation,
    },

    /// Array elements must be numbers; arrays of arrays are rejected
    #[error("Nested arrays are not supported (column {})", .location.column)]
    NestedArray { location: SourceLocation },

    /// Neither the grammar nor the structural literal parser accepted the text
    #[error("Cannot evaluate `{expression}`: {primary}; as a literal: {fallback}")]
    Unevaluable {
        expression: String,
        primary: Box<EvalError>,
        fallback: String,
    },
}

impl EvalError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            EvalError::Parse(err) => Some(err.location),
            EvalError::UndefinedVariable { location, .. }
            | EvalError::TypeError { location, .. }
            | EvalError::InvalidIndex { location, .. }
            | EvalError::IndexOutOfBounds { location, .. }
            | EvalError::NestedArray { location } => Some(*location),
            EvalError::Unevaluable { primary, .. } => primary.location(),
        }
    }
}
