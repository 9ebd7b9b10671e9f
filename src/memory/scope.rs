//! Variable scope for a single trace run
//!
//! Names keep their first insertion position for the whole run: rebinding a
//! name replaces its value in place and nothing is ever removed. Snapshot
//! order is therefore stable from step to step.

use super::value::Value;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Insertion-ordered variable map captured into every execution step.
pub type Variables = IndexMap<String, Value, FxBuildHasher>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    variables: Variables,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind or rebind a name
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.variables.iter()
    }

    /// Structurally independent copy of the current bindings
    pub fn snapshot(&self) -> Variables {
        self.variables.clone()
    }
}
