//! Registry of synthesized types and the dependency-ordered view over them.

use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

/// One inferred object shape; becomes one interface/class/record in the
/// output. Finalized before the walker returns from the node that produced
/// it, so `dependencies` only ever names already-registered types.
#[derive(Debug, Clone)]
pub struct SynthesizedType {
    pub name: String,
    /// JSON key enumeration order.
    pub fields: Vec<Field>,
    /// Names of other synthesized types referenced by fields; arrays of
    /// references contribute their element type.
    pub dependencies: IndexSet<String>,
}

#[derive(Debug, Clone)]
pub struct Field {
    /// camelCased field name used in the emitted source.
    pub name: String,
    /// The key as it appeared in the JSON document.
    pub original_key: String,
    /// Rendered type text, e.g. `string`, `IAddress`, `List<ItemDto>`.
    pub ty: String,
    /// True when the field's type is directly another synthesized type.
    pub is_reference: bool,
}

/// Owns every [`SynthesizedType`] for one generation run. Keyed by name;
/// structurally identical shapes at different paths stay distinct entries.
#[derive(Debug, Default)]
pub struct Registry {
    types: IndexMap<String, SynthesizedType>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&SynthesizedType> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// First registration wins; a name collision leaves the existing entry
    /// untouched.
    pub fn insert(&mut self, ty: SynthesizedType) {
        self.types.entry(ty.name.clone()).or_insert(ty);
    }

    /// Dependency-first ordering: every type appears after all types it
    /// depends on. Roots are visited in insertion order, so identical input
    /// yields identical output across runs.
    pub fn ordered(&self) -> Vec<&SynthesizedType> {
        let mut ordered = Vec::with_capacity(self.types.len());
        let mut visited: HashSet<&str> = HashSet::new();
        let mut visiting: HashSet<&str> = HashSet::new();
        for name in self.types.keys() {
            self.visit(name, &mut visiting, &mut visited, &mut ordered);
        }
        ordered
    }

    fn visit<'a>(
        &'a self,
        name: &'a str,
        visiting: &mut HashSet<&'a str>,
        visited: &mut HashSet<&'a str>,
        ordered: &mut Vec<&'a SynthesizedType>,
    ) {
        // An in-progress visit counts as satisfied; JSON input is acyclic,
        // but the guard keeps the walk finite if that ever stops holding.
        if visiting.contains(name) || visited.contains(name) {
            return;
        }
        let Some(ty) = self.types.get(name) else {
            return;
        };
        visiting.insert(name);
        for dep in &ty.dependencies {
            self.visit(dep, visiting, visited, ordered);
        }
        visiting.remove(name);
        visited.insert(name);
        ordered.push(ty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: &str, deps: &[&str]) -> SynthesizedType {
        SynthesizedType {
            name: name.to_string(),
            fields: Vec::new(),
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn names(ordered: &[&SynthesizedType]) -> Vec<String> {
        ordered.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn dependencies_come_first() {
        let mut registry = Registry::new();
        registry.insert(ty("Root", &["Leaf", "Mid"]));
        registry.insert(ty("Leaf", &[]));
        registry.insert(ty("Mid", &["Leaf"]));
        assert_eq!(names(&registry.ordered()), ["Leaf", "Mid", "Root"]);
    }

    #[test]
    fn insertion_order_breaks_ties() {
        let mut registry = Registry::new();
        registry.insert(ty("B", &[]));
        registry.insert(ty("A", &[]));
        registry.insert(ty("C", &[]));
        assert_eq!(names(&registry.ordered()), ["B", "A", "C"]);
    }

    #[test]
    fn first_registration_wins() {
        let mut registry = Registry::new();
        registry.insert(ty("X", &["Y"]));
        registry.insert(ty("X", &[]));
        assert_eq!(registry.get("X").unwrap().dependencies.len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_dependency_is_skipped() {
        let mut registry = Registry::new();
        registry.insert(ty("Root", &["Ghost"]));
        assert_eq!(names(&registry.ordered()), ["Root"]);
    }

    #[test]
    fn cycle_terminates_without_recursing_forever() {
        let mut registry = Registry::new();
        registry.insert(ty("A", &["B"]));
        registry.insert(ty("B", &["A"]));
        let ordered = registry.ordered();
        assert_eq!(ordered.len(), 2);
    }
}
