// SPDX-License-Identifier: MIT OR Apache-2.0
//! Partitioning of resolved definitions into playback buckets.

use crate::definition::AnimationDefinition;
use crate::error::{AnimationError, Result};
use crate::host::{AnimationHost, PropertyTargets, TargetId};
use crate::registry::{split_keys, AnimationRegistry};
use crate::snapshot::Snapshot;
use indexmap::IndexMap;

/// How a definition is played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Assigned directly, immediately or after its delay
    Fixed,
    /// Part of the call's single transition
    Synchronous,
    /// Own transition, started by a timer
    Delayed,
}

impl Bucket {
    /// Classify a definition.
    ///
    /// Values with a purely alphabetic token and definitions with an animation time
    /// of zero are fixed. Anything else is delayed when it carries a delay or its own
    /// animation time, and synchronous otherwise.
    pub fn of(definition: &AnimationDefinition) -> Self {
        let options = &definition.options;
        if definition.value.has_named_token() || options.forces_fixed() {
            Self::Fixed
        } else if options.effective_delay().is_some() || options.explicit_time().is_some() {
            Self::Delayed
        } else {
            Self::Synchronous
        }
    }
}

/// Work produced for one target by one playback call
#[derive(Debug, Clone, Default)]
pub struct PlaybackPlan {
    /// Properties assigned directly
    pub fixed: IndexMap<String, AnimationDefinition>,
    /// Properties transitioned together
    pub synchronous: PropertyTargets,
    /// Properties transitioned on their own timer
    pub delayed: IndexMap<String, AnimationDefinition>,
    /// Pre-play values, one record per resolved key
    pub snapshots: Vec<(String, Snapshot)>,
}

impl PlaybackPlan {
    /// Whether no property will change
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.synchronous.is_empty() && self.delayed.is_empty()
    }

    /// Number of properties that will change
    pub fn len(&self) -> usize {
        self.fixed.len() + self.synchronous.len() + self.delayed.len()
    }

    /// Place a property in a bucket. A property classified by an earlier key of the
    /// same call is moved.
    fn insert(&mut self, property: &str, bucket: Bucket, definition: &AnimationDefinition) {
        self.fixed.shift_remove(property);
        self.synchronous.shift_remove(property);
        self.delayed.shift_remove(property);

        match bucket {
            Bucket::Fixed => {
                self.fixed.insert(property.to_string(), definition.clone());
            }
            Bucket::Synchronous => {
                self.synchronous
                    .insert(property.to_string(), definition.value.clone());
            }
            Bucket::Delayed => {
                self.delayed.insert(property.to_string(), definition.clone());
            }
        }
    }
}

/// Classify every definition resolved for `keys` on one target.
///
/// Keys resolve per target first and fall back to the global scope. A condition
/// that returns `false` stops the remaining properties of that key; properties
/// already classified for the key are kept. Nothing is mutated here, so a failing
/// condition leaves the target untouched.
pub fn classify<H: AnimationHost + ?Sized>(
    registry: &AnimationRegistry,
    host: &H,
    target: TargetId,
    keys: &str,
) -> Result<PlaybackPlan> {
    let mut plan = PlaybackPlan::default();

    for key in split_keys(keys) {
        let Some(definitions) = registry.resolve(target, key) else {
            tracing::trace!(%target, key, "No definitions for animation key");
            continue;
        };

        let mut snapshot = Snapshot::new();
        for (property, definition) in definitions {
            let current = host.read_style(target, property);

            if let Some(condition) = &definition.condition {
                let passed = condition.evaluate(&current).map_err(|source| {
                    AnimationError::Condition {
                        key: key.to_string(),
                        property: property.clone(),
                        source,
                    }
                })?;
                if !passed {
                    tracing::debug!(
                        %target,
                        key,
                        property,
                        "Condition not met, skipping rest of key"
                    );
                    break;
                }
            }

            let bucket = Bucket::of(definition);
            if bucket == Bucket::Fixed {
                snapshot.textual.insert(property.clone(), current);
            } else {
                snapshot.numeric.insert(property.clone(), current);
            }
            plan.insert(property, bucket, definition);
        }

        tracing::debug!(%target, key, properties = snapshot.len(), "Classified animation key");
        plan.snapshots.push((key.to_string(), snapshot));
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{AnimationOptions, Condition, Delay};
    use crate::sim::SimulatedHost;
    use crate::value::AnimationValue;

    fn definition(
        value: impl Into<AnimationValue>,
        options: AnimationOptions,
    ) -> AnimationDefinition {
        AnimationDefinition::new(value.into(), options, None)
    }

    #[test]
    fn test_bucket_rules() {
        let none = AnimationOptions::new();
        assert_eq!(Bucket::of(&definition("solid", none)), Bucket::Fixed);
        assert_eq!(Bucket::of(&definition(1, none)), Bucket::Synchronous);
        assert_eq!(Bucket::of(&definition("+=5", none)), Bucket::Synchronous);
        assert_eq!(
            Bucket::of(&definition("10px", none.with_animation_time(0))),
            Bucket::Fixed
        );
        assert_eq!(
            Bucket::of(&definition("10px", none.with_delay(Delay::Millis(100)))),
            Bucket::Delayed
        );
        assert_eq!(
            Bucket::of(&definition("10px", none.with_animation_time(250))),
            Bucket::Delayed
        );
        assert_eq!(
            Bucket::of(&definition("10px", none.with_delay(Delay::Millis(0)))),
            Bucket::Synchronous
        );
        assert_eq!(
            Bucket::of(&definition("solid", none.with_delay(Delay::After))),
            Bucket::Fixed
        );
    }

    #[test]
    fn test_classify_buckets_and_snapshot() {
        let mut host = SimulatedHost::new();
        let target = TargetId::new();
        host.set_style(target, "width", "10px");
        host.set_style(target, "display", "none");

        let mut registry = AnimationRegistry::new();
        registry
            .add_animation("grow", "width", "20px", ())
            .add_animation("grow", "display", "block", ())
            .add_animation(
                "grow",
                "height",
                "5px",
                AnimationOptions::new().with_delay(Delay::After),
            );

        let plan = classify(&registry, &host, target, "grow").unwrap();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.synchronous["width"], AnimationValue::from("20px"));
        assert!(plan.fixed.contains_key("display"));
        assert!(plan.delayed.contains_key("height"));

        let (key, snapshot) = &plan.snapshots[0];
        assert_eq!(key, "grow");
        assert_eq!(snapshot.numeric["width"], "10px");
        assert_eq!(snapshot.numeric["height"], "");
        assert_eq!(snapshot.textual["display"], "none");
    }

    #[test]
    fn test_border_style_snapshots_each_side() {
        let mut host = SimulatedHost::new();
        let target = TargetId::new();
        host.set_style(target, "borderTopStyle", "none");
        host.set_style(target, "borderLeftStyle", "dotted");

        let mut registry = AnimationRegistry::new();
        registry.add_animation("border", "borderStyle", "solid", ());

        let plan = classify(&registry, &host, target, "border").unwrap();
        assert!(!plan.fixed.contains_key("borderStyle"));
        assert_eq!(plan.fixed.len(), 4);

        let snapshot = &plan.snapshots[0].1;
        assert!(!snapshot.textual.contains_key("borderStyle"));
        assert_eq!(snapshot.textual["borderTopStyle"], "none");
        assert_eq!(snapshot.textual["borderRightStyle"], "");
        assert_eq!(snapshot.textual["borderLeftStyle"], "dotted");
    }

    #[test]
    fn test_false_condition_stops_rest_of_key() {
        let host = SimulatedHost::new();
        let target = TargetId::new();

        let mut registry = AnimationRegistry::new();
        registry
            .add_animation("fade", "opacity", "0.5", ())
            .add_animation("fade", "width", "20px", Condition::new(|current| current == "never"))
            .add_animation("fade", "height", "20px", ())
            .add_animation("other", "top", "5px", ());

        let plan = classify(&registry, &host, target, "fade, other").unwrap();
        assert!(plan.synchronous.contains_key("opacity"));
        assert!(!plan.synchronous.contains_key("width"));
        assert!(!plan.synchronous.contains_key("height"));
        assert!(plan.synchronous.contains_key("top"));
        assert_eq!(plan.snapshots.len(), 2);
        assert_eq!(plan.snapshots[0].1.len(), 1);
    }

    #[test]
    fn test_condition_error_propagates() {
        let host = SimulatedHost::new();
        let target = TargetId::new();

        let mut registry = AnimationRegistry::new();
        registry.add_animation(
            "grow",
            "width",
            "20px",
            Condition::fallible(|current: &str| current.parse::<f64>().map(|w| w < 100.0)),
        );

        let err = classify(&registry, &host, target, "grow").unwrap_err();
        let AnimationError::Condition { key, property, .. } = err;
        assert_eq!(key, "grow");
        assert_eq!(property, "width");
    }

    #[test]
    fn test_later_key_moves_property() {
        let host = SimulatedHost::new();
        let target = TargetId::new();

        let mut registry = AnimationRegistry::new();
        registry
            .add_animation("a", "width", "20px", ())
            .add_animation("b", "width", "auto", ());

        let plan = classify(&registry, &host, target, "a,b").unwrap();
        assert!(plan.synchronous.is_empty());
        assert_eq!(plan.fixed["width"].value, AnimationValue::from("auto"));
    }
}
