//! # Introduction
//!
//! bubbletrace turns a small bubble-sort program into an execution trace: an
//! ordered list of steps, each holding a source line, a private copy of every
//! variable, a description, and any printed output. The trace can then be
//! scrubbed forward and backward in a terminal viewer built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → pattern rules → literal evaluation → bubble-sort replay → steps → TUI
//! ```
//!
//! 1. [`trace`]: recognises the supported program shape, attributes each
//!    event to a source line, and replays the sort. Entry point:
//!    [`trace::generate_trace`].
//! 2. [`parser`] and [`interpreter`]: a restricted expression grammar and its
//!    evaluator, used to materialise the initial array. Nothing is executed as
//!    code.
//! 3. [`memory`]: [`memory::value::Value`] and the insertion-ordered
//!    [`memory::scope::Scope`].
//! 4. [`snapshot`]: the [`snapshot::ExecutionStep`] record and
//!    [`snapshot::Playback`], a random-access cursor with breakpoints.
//! 5. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! ## Supported program
//!
//! JavaScript only. The text must declare an array with `let`, `const`, or
//! `var`, and contain the nested `for` loops of a bubble sort comparing
//! `arr[j]` with `arr[j + 1]`. See `demos/bubble_sort.js`.

pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod snapshot;
pub mod trace;
pub mod ui;
