// SPDX-License-Identifier: MIT OR Apache-2.0
//! Definition storage keyed by animation key and property.

use crate::definition::AnimationDefinition;
use crate::host::TargetId;
use indexmap::IndexMap;

/// Definitions of one animation key, in registration order
pub type PropertyDefinitions = IndexMap<String, AnimationDefinition>;

/// Where a definition is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Shared by every target
    Global,
    /// Specific to one target
    Target(TargetId),
}

/// Definitions grouped by animation key
#[derive(Debug, Clone, Default)]
pub struct DefinitionStore {
    animations: IndexMap<String, PropertyDefinitions>,
}

impl DefinitionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a definition, replacing any previous one for the same key and property.
    /// A replaced property keeps its original position.
    pub fn set(&mut self, key: &str, property: &str, definition: AnimationDefinition) {
        self.animations
            .entry(key.to_string())
            .or_default()
            .insert(property.to_string(), definition);
    }

    /// Get the definitions registered under a key
    pub fn get(&self, key: &str) -> Option<&PropertyDefinitions> {
        self.animations.get(key)
    }

    /// Get a single definition
    pub fn definition(&self, key: &str, property: &str) -> Option<&AnimationDefinition> {
        self.get(key).and_then(|definitions| definitions.get(property))
    }

    /// Get all animation keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    /// Number of animation keys
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Whether no key is registered
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::AnimationOptions;

    fn definition(value: &str) -> AnimationDefinition {
        AnimationDefinition::new(value.into(), AnimationOptions::default(), None)
    }

    #[test]
    fn test_set_and_get() {
        let mut store = DefinitionStore::new();
        store.set("grow", "width", definition("20px"));
        store.set("grow", "height", definition("30px"));

        let grow = store.get("grow").unwrap();
        assert_eq!(grow.len(), 2);
        assert!(store.get("shrink").is_none());
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["grow"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut store = DefinitionStore::new();
        store.set("grow", "width", definition("20px"));
        store.set("grow", "height", definition("30px"));
        store.set("grow", "width", definition("25px"));

        let grow = store.get("grow").unwrap();
        let properties: Vec<_> = grow.keys().map(String::as_str).collect();
        assert_eq!(properties, vec!["width", "height"]);
        assert_eq!(store.definition("grow", "width").unwrap().value.to_string(), "25px");
    }
}
