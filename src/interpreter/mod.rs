//! Expression evaluation
//!
//! This module provides the evaluator the trace generator uses to
//! materialise values from source text:
//! - [`evaluator`]: tree-walking evaluation with a structural literal fallback
//! - [`errors`]: evaluation error types
//!
//! # Failure Model
//!
//! [`evaluator::evaluate`] never fails loudly: it logs and returns `None`.
//! Callers decide whether a missing value is load-bearing.

pub mod errors;
pub mod evaluator;
