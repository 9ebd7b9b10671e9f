//! Expression parser
//!
//! This module transforms expression text into an [`ast::Expr`] tree:
//! - [`lexer`]: Tokenization (text → tokens)
//! - [`parse`]: Parser state, helpers, and the entry point (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Grammar
//!
//! A closed set of forms, enough to describe the values a traced program
//! manipulates:
//! - Number and boolean literals, identifiers
//! - Array literals of one level (`[1, 2, 3]`)
//! - Indexing (`arr[j + 1]`) and the `.length` property
//! - Arithmetic, comparison, and logical operators
//!
//! Nothing here executes code; the tree is interpreted by
//! [`crate::interpreter::evaluator`].

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
