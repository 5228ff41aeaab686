//! Variable store for an interpreter session.
//!
//! One flat name → value map; there are no nested scopes in the notation.
//! The store belongs to a single `Session` and is never shared.

use rustc_hash::FxHashMap;

use cla_ir::Value;

/// All variables of one session.
#[derive(Clone, Debug, Default)]
pub struct VariableStore {
    /// `FxHashMap` for faster hashing of short variable names.
    bindings: FxHashMap<String, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        VariableStore {
            bindings: FxHashMap::default(),
        }
    }

    /// Declare or overwrite a variable, returning the previous value.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings sorted by name.
    ///
    /// Hash order is not stable across runs; anything user-visible goes
    /// through this.
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// The longest declared name that `text` starts with.
    ///
    /// Two distinct names that both prefix `text` differ in length, so the
    /// result does not depend on iteration order.
    pub fn longest_prefix_of<'a>(&'a self, text: &str) -> Option<(&'a str, &'a Value)> {
        self.bindings
            .iter()
            .filter(|(name, _)| !name.is_empty() && text.starts_with(name.as_str()))
            .max_by_key(|(name, _)| name.len())
            .map(|(name, value)| (name.as_str(), value))
    }
}
