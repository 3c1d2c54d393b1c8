//! The global symbol table.
//!
//! There is exactly one scope. Bindings live in a vector in insertion order,
//! with an `FxHashMap` from name to slot for lookup. Every stored value is a
//! private copy: `put` clones its argument and `get` hands back a clone.

use rustc_hash::FxHashMap;
use tracing::debug;

use notlisp_value::{unbound_symbol, Builtin, Value};

#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: Vec<Binding>,
    index: FxHashMap<String, usize>,
}

#[derive(Clone, Debug)]
struct Binding {
    name: String,
    value: Value,
}

impl Environment {
    /// Create an empty environment with no built-ins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment with every built-in bound under each of its
    /// names.
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        crate::builtins::register_builtins(&mut env);
        env
    }

    /// Copy of the value bound to `name`, or an error value if unbound.
    pub fn get(&self, name: &str) -> Value {
        match self.lookup(name) {
            Some(value) => value.clone(),
            None => Value::error(unbound_symbol(name)),
        }
    }

    /// Borrow the value bound to `name`.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let slot = *self.index.get(name)?;
        self.bindings.get(slot).map(|binding| &binding.value)
    }

    /// Bind `name` to a copy of `value`, replacing any previous binding.
    pub fn put(&mut self, name: &str, value: &Value) {
        if let Some(&slot) = self.index.get(name) {
            if let Some(binding) = self.bindings.get_mut(slot) {
                debug!(name, "rebinding");
                binding.value = value.clone();
                return;
            }
        }
        self.index.insert(name.to_string(), self.bindings.len());
        self.bindings.push(Binding {
            name: name.to_string(),
            value: value.clone(),
        });
    }

    pub fn register_builtin(&mut self, name: &str, builtin: Builtin) {
        self.put(name, &Value::function(builtin));
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in the order they were first defined.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|binding| binding.name.as_str())
    }
}

#[cfg(test)]
mod tests;
