//! Runtime value representation
//!
//! This module defines the [`Value`] enum, the values a traced program binds
//! to names in its [`Scope`](super::scope::Scope).
//!
//! # Value Types
//!
//! - [`Value::Number`]: IEEE-754 double, matching the traced language's numbers
//! - [`Value::Bool`]: result of a comparison or logical operator
//! - [`Value::Array`]: ordered list of numbers (one level deep)
//!
//! Values own their data, so cloning one produces a structurally independent
//! copy. Step snapshots rely on this.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime values in the evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Array(Vec<f64>),
}

impl Value {
    /// Get the numeric value, returns None if not a Number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the array elements, returns None if not an Array
    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Truthiness as the traced language defines it for numbers and booleans.
    /// Arrays are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Bool(b) => *b,
            Value::Array(_) => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
        }
    }
}

/// Render a number the way the traced language prints it: integral values
/// carry no fractional part, and magnitudes outside `[1e-6, 1e21)` use
/// exponent notation with an explicit sign (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // Covers -0.0 as well
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", n)
    }
}

/// Render a list of numbers as `[a, b, c]`
pub fn format_array(items: &[f64]) -> String {
    let rendered: Vec<String> = items.iter().map(|n| format_number(*n)).collect();
    format!("[{}]", rendered.join(", "))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Array(items) => f.write_str(&format_array(items)),
        }
    }
}
