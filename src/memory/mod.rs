//! Value model for traced programs
//!
//! - [`value`]: Runtime value representation (Number, Bool, Array)
//! - [`scope`]: Insertion-ordered name → value bindings and their snapshots

pub mod scope;
pub mod value;
