// SPDX-License-Identifier: MIT OR Apache-2.0
//! Registry of named animations and the playback entry points.

use crate::boxing;
use crate::classify::classify;
use crate::definition::{AnimationDefinition, AnimationOptions, Condition, DefinitionArgs};
use crate::dispatch::{dispatch, Playback};
use crate::error::Result;
use crate::host::{AnimationHost, TargetId};
use crate::reverse;
use crate::store::{DefinitionStore, PropertyDefinitions, Scope};
use crate::value::AnimationValue;
use std::collections::HashMap;

/// Split a comma-separated key list into trimmed, non-empty keys
pub fn split_keys(keys: &str) -> impl Iterator<Item = &str> {
    keys.split(',').map(str::trim).filter(|key| !key.is_empty())
}

/// Named animations, shared by all targets or attached to one.
///
/// Build one registry per animation context and pass it to every call; nothing is
/// kept in process-wide state.
#[derive(Debug, Clone, Default)]
pub struct AnimationRegistry {
    global: DefinitionStore,
    targets: HashMap<TargetId, DefinitionStore>,
}

impl AnimationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an animation for every target.
    ///
    /// `args` takes `()`, [`AnimationOptions`], a [`Condition`] or both as a tuple.
    pub fn add_animation(
        &mut self,
        key: &str,
        property: &str,
        value: impl Into<AnimationValue>,
        args: impl Into<DefinitionArgs>,
    ) -> &mut Self {
        let (options, condition) = args.into().normalize();
        self.register(Scope::Global, key, property, value.into(), options, condition);
        self
    }

    /// Register an animation on each of the given targets
    pub fn add_target_animation(
        &mut self,
        targets: &[TargetId],
        key: &str,
        property: &str,
        value: impl Into<AnimationValue>,
        args: impl Into<DefinitionArgs>,
    ) -> &mut Self {
        let (options, condition) = args.into().normalize();
        let value = value.into();
        for &target in targets {
            self.register(
                Scope::Target(target),
                key,
                property,
                value.clone(),
                options,
                condition.clone(),
            );
        }
        self
    }

    /// Register at a scope, expanding box shorthands
    pub fn register(
        &mut self,
        scope: Scope,
        key: &str,
        property: &str,
        value: AnimationValue,
        options: AnimationOptions,
        condition: Option<Condition>,
    ) {
        if let Some(sides) = boxing::expand(property, &value) {
            tracing::trace!(key, property, "Expanding box property");
            for side in sides {
                self.store_mut(scope).set(
                    key,
                    &side.property,
                    AnimationDefinition::new(side.value, options, condition.clone()),
                );
            }
            return;
        }

        tracing::debug!(?scope, key, property, %value, "Registered animation");
        self.store_mut(scope)
            .set(key, property, AnimationDefinition::new(value, options, condition));
    }

    fn store_mut(&mut self, scope: Scope) -> &mut DefinitionStore {
        match scope {
            Scope::Global => &mut self.global,
            Scope::Target(target) => self.targets.entry(target).or_default(),
        }
    }

    /// Get the store of a scope
    pub fn store(&self, scope: Scope) -> Option<&DefinitionStore> {
        match scope {
            Scope::Global => Some(&self.global),
            Scope::Target(target) => self.targets.get(&target),
        }
    }

    /// Resolve the definitions a key plays on a target.
    ///
    /// Definitions registered on the target win; the global definitions of the key are
    /// used only when the target has none. The two are never merged.
    pub fn resolve(&self, target: TargetId, key: &str) -> Option<&PropertyDefinitions> {
        self.targets
            .get(&target)
            .and_then(|store| store.get(key))
            .filter(|definitions| !definitions.is_empty())
            .or_else(|| self.global.get(key))
    }

    /// Play the comma-separated `keys` on each target.
    ///
    /// Targets are processed in order; a failing condition stops the call before the
    /// failing target is modified.
    pub fn play<H: AnimationHost + ?Sized>(
        &self,
        host: &mut H,
        targets: &[TargetId],
        keys: &str,
        playback: &Playback,
    ) -> Result<()> {
        for &target in targets {
            let plan = classify(self, &*host, target, keys)?;
            tracing::debug!(
                %target,
                keys,
                fixed = plan.fixed.len(),
                synchronous = plan.synchronous.len(),
                delayed = plan.delayed.len(),
                "Playing animation"
            );
            dispatch(&mut *host, target, plan, playback);
        }
        Ok(())
    }

    /// Restore what playing `keys` changed on each target
    pub fn play_back<H: AnimationHost + ?Sized>(
        &self,
        host: &mut H,
        targets: &[TargetId],
        keys: &str,
        playback: &Playback,
    ) {
        for &target in targets {
            reverse::play_back(&mut *host, target, keys, playback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::Delay;

    #[test]
    fn test_split_keys() {
        let keys: Vec<_> = split_keys(" grow, fade ,,").collect();
        assert_eq!(keys, vec!["grow", "fade"]);
    }

    #[test]
    fn test_box_property_registers_sides_only() {
        let mut registry = AnimationRegistry::new();
        registry.add_animation("stretch", "padding", "+=5", ());

        let global = registry.store(Scope::Global).unwrap();
        let stretch = global.get("stretch").unwrap();
        assert_eq!(stretch.len(), 4);
        assert!(!stretch.contains_key("padding"));
        assert!(stretch.values().all(|d| d.value.to_string() == "+=5"));
    }

    #[test]
    fn test_options_carried_to_sides() {
        let mut registry = AnimationRegistry::new();
        registry.add_animation(
            "border",
            "borderRadius",
            "5,10,15,20",
            AnimationOptions::new().with_delay(Delay::Millis(100)),
        );

        let global = registry.store(Scope::Global).unwrap();
        let corner = global.definition("border", "borderBottomRightRadius").unwrap();
        assert_eq!(corner.value.to_string(), "15");
        assert_eq!(corner.options.delay, Some(Delay::Millis(100)));
    }

    #[test]
    fn test_target_definitions_take_precedence() {
        let mut registry = AnimationRegistry::new();
        let card = TargetId::new();
        let other = TargetId::new();

        registry
            .add_animation("grow", "width", "20px", ())
            .add_animation("grow", "height", "20px", ())
            .add_target_animation(&[card], "grow", "width", "99px", ());

        let resolved = registry.resolve(card, "grow").unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved["width"].value.to_string(), "99px");

        let fallback = registry.resolve(other, "grow").unwrap();
        assert_eq!(fallback.len(), 2);
        assert!(registry.resolve(card, "missing").is_none());
    }

    #[test]
    fn test_multiple_targets_registered_independently() {
        let mut registry = AnimationRegistry::new();
        let a = TargetId::new();
        let b = TargetId::new();

        registry.add_target_animation(&[a, b], "fade", "opacity", 0.2, ());
        assert!(registry.store(Scope::Target(a)).unwrap().get("fade").is_some());
        assert!(registry.store(Scope::Target(b)).unwrap().get("fade").is_some());
        assert!(registry.store(Scope::Global).unwrap().is_empty());
    }
}
