//! Trace generation
//!
//! Turns source text into the ordered list of [`ExecutionStep`]s a viewer
//! replays:
//! - [`rules`]: named pattern rules mapping events to source lines
//! - [`locator`]: first-match line lookup with a fallback
//! - [`generator`]: the bubble-sort replay itself
//! - [`errors`]: hard failures surfaced to the caller
//!
//! Only one program shape in one language is supported. [`generate_trace`]
//! checks both before any replay happens.

pub mod errors;
pub mod generator;
pub mod locator;
pub mod rules;

use crate::snapshot::ExecutionStep;
use errors::TraceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bundled program traced when no file is given
pub const DEMO_SOURCE: &str = include_str!("../../demos/bubble_sort.js");

/// Source language the caller claims the text is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::JavaScript => write!(f, "JavaScript"),
            Language::Python => write!(f, "Python"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{0}' (expected javascript or python)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::JavaScript),
            "python" | "py" => Ok(Language::Python),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Produce the execution trace of `source`.
///
/// Fails without replaying anything when `language` is not JavaScript or the
/// text is not recognisably a bubble sort. On success the caller owns the
/// returned steps.
pub fn generate_trace(source: &str, language: Language) -> Result<Vec<ExecutionStep>, TraceError> {
    if language != Language::JavaScript {
        return Err(TraceError::UnsupportedLanguage { language });
    }

    if !rules::looks_like_bubble_sort(source) {
        return Err(TraceError::UnsupportedShape);
    }

    generator::generate(source)
}
