//! Schema registry for named checkers.

use std::collections::HashMap;

use crate::checker::Checker;

/// Registry of named checkers, resolved at check time by
/// [`reference`](crate::primitives::reference).
///
/// Registering under a name that already exists replaces the old checker.
/// Self-referential schemas are expressed by registering a checker that
/// references its own name.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Checker>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a checker, returning the one it replaces.
    pub fn register(&mut self, name: impl Into<String>, checker: Checker) -> Option<Checker> {
        self.schemas.insert(name.into(), checker)
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, checker: Checker) -> Self {
        self.register(name, checker);
        self
    }

    pub fn resolve(&self, name: &str) -> Option<&Checker> {
        self.schemas.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{boolean, string};

    #[test]
    fn test_register_and_resolve() {
        let registry = SchemaRegistry::new()
            .with("flag", boolean())
            .with("name", string());

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("flag"));
        assert!(registry.resolve("missing").is_none());
        assert_eq!(registry.names(), vec!["flag", "name"]);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.register("x", boolean()).is_none());
        assert!(registry.register("x", string()).is_some());
        assert_eq!(registry.len(), 1);
    }
}
