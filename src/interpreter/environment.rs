use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The single flat variable store of an interpreter.
///
/// Names are bound by `sun` and rebound by a later `sun` on the same name.
/// Bindings are never removed and there are no nested scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    store: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no name is bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
