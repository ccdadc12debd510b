// SPDX-License-Identifier: MIT OR Apache-2.0
//! Boundary to the environment that owns the animated targets.

use crate::dispatch::ScheduledTask;
use crate::snapshot::Snapshot;
use crate::value::{AnimationValue, Easing};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Property name to target value, in the order the properties were classified
pub type PropertyTargets = IndexMap<String, AnimationValue>;

/// Identifier of an animated target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub Uuid);

impl TargetId {
    /// Create a new random target ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TargetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Callback invoked once per finished transition
#[derive(Clone)]
pub struct Completion(Arc<dyn Fn(TargetId) + Send + Sync>);

impl Completion {
    /// Wrap a callback
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(TargetId) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invoke the callback
    pub fn call(&self, target: TargetId) {
        (self.0)(target);
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Completion(<fn>)")
    }
}

/// Services the registry needs from its environment.
///
/// All methods are synchronous. Asynchrony comes from [`AnimationHost::transition`]
/// finishing later and from tasks handed to [`AnimationHost::schedule`]; the host
/// runs each scheduled task exactly once via [`ScheduledTask::run`].
pub trait AnimationHost {
    /// Read a property's current value. Unset properties read as an empty string.
    fn read_style(&self, target: TargetId, property: &str) -> String;

    /// Assign a property immediately
    fn write_style(&mut self, target: TargetId, property: &str, value: &str);

    /// Transition the given properties from their current values over `duration_ms`,
    /// invoking `on_complete` once when finished
    fn transition(
        &mut self,
        target: TargetId,
        properties: PropertyTargets,
        duration_ms: u64,
        easing: &Easing,
        on_complete: Option<Completion>,
    );

    /// Read data attached to the target
    fn data(&self, target: TargetId, name: &str) -> Option<Snapshot>;

    /// Attach data to the target, replacing any previous value under `name`
    fn set_data(&mut self, target: TargetId, name: &str, snapshot: Snapshot);

    /// Run `task` once after `delay_ms`
    fn schedule(&mut self, delay_ms: u64, task: ScheduledTask);
}
