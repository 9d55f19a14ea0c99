use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The global variable store of a single program run.
///
/// There is exactly one namespace: blocks and loop bodies read and write the
/// same bindings as the top level. Each run should get its own `Environment`;
/// nothing here is shared between instances.
///
/// # Example
/// ```
/// use rscript::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.assign("x", Value::Integer(1));
/// env.assign("x", Value::from("one"));
///
/// assert_eq!(env.get("x"), Some(&Value::from("one")));
/// assert_eq!(env.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, Value>,
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
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding of any kind.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}
