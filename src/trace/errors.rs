//! Trace generation errors
//!
//! Every variant is a hard failure: generation stops and no partial trace is
//! returned. The `Display` text is the message shown to the user.

use super::Language;
use crate::interpreter::errors::EvalError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    #[error("{language} execution is not supported. Please switch to JavaScript to trace this program.")]
    UnsupportedLanguage { language: Language },

    #[error("Only bubble sort is supported: expected nested `for` loops comparing `arr[j]` with `arr[j + 1]`.")]
    UnsupportedShape,

    #[error("No array initialization found: expected a statement like `let arr = [5, 3, 1];`")]
    NoArrayInitialization,

    #[error("The array cannot be named `{name}`: that name is used by the sort itself")]
    ReservedName { name: String },

    #[error("Could not evaluate the initial value of `{name}`: {source}")]
    ArrayEvaluation {
        name: String,
        #[source]
        source: EvalError,
    },

    #[error("`{name}` must be initialized with an array of numbers, got a {got}")]
    NotAnArray { name: String, got: &'static str },
}
