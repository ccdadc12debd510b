// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation definitions and their registration arguments.

use crate::value::AnimationValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Boxed error returned by a fallible condition
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// When a delayed property starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delay {
    /// Fixed delay in milliseconds
    Millis(u64),
    /// Start once the call's main duration has elapsed
    After,
}

impl Delay {
    /// Resolve to milliseconds for a playback of the given duration
    pub fn resolve(self, duration_ms: u64) -> u64 {
        match self {
            Self::Millis(ms) => ms,
            Self::After => duration_ms,
        }
    }
}

/// Timing options of a definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationOptions {
    /// Delay before the property starts changing
    #[serde(default)]
    pub delay: Option<Delay>,
    /// Own animation time in milliseconds; `Some(0)` assigns the value directly
    #[serde(default)]
    pub animation_time: Option<u64>,
}

impl AnimationOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay
    pub fn with_delay(mut self, delay: Delay) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the animation time
    pub fn with_animation_time(mut self, animation_time: u64) -> Self {
        self.animation_time = Some(animation_time);
        self
    }

    /// Delay that actually postpones the property. A zero delay counts as none.
    pub fn effective_delay(&self) -> Option<Delay> {
        self.delay.filter(|delay| *delay != Delay::Millis(0))
    }

    /// Explicit non-zero animation time
    pub fn explicit_time(&self) -> Option<u64> {
        self.animation_time.filter(|time| *time > 0)
    }

    /// Whether an animation time of zero was requested
    pub fn forces_fixed(&self) -> bool {
        self.animation_time == Some(0)
    }
}

/// Predicate evaluated against a property's current value before it is played
#[derive(Clone)]
pub struct Condition(Arc<dyn Fn(&str) -> Result<bool, BoxError> + Send + Sync>);

impl Condition {
    /// Create an infallible condition
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(move |current| Ok(predicate(current))))
    }

    /// Create a condition that may fail; failures abort the playback call
    pub fn fallible<F, E>(predicate: F) -> Self
    where
        F: Fn(&str) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self(Arc::new(move |current| predicate(current).map_err(Into::into)))
    }

    /// Evaluate against the current value
    pub fn evaluate(&self, current: &str) -> Result<bool, BoxError> {
        (self.0)(current)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(<fn>)")
    }
}

/// Optional trailing arguments of a registration call.
///
/// Options and condition may each be given alone or together; the pair is
/// resolved once by [`DefinitionArgs::normalize`].
#[derive(Debug, Clone, Default)]
pub enum DefinitionArgs {
    /// Neither options nor condition
    #[default]
    None,
    /// Options only
    Options(AnimationOptions),
    /// Condition only
    Condition(Condition),
    /// Both options and condition
    Both(AnimationOptions, Condition),
}

impl DefinitionArgs {
    /// Split into options (empty when absent) and condition
    pub fn normalize(self) -> (AnimationOptions, Option<Condition>) {
        match self {
            Self::None => (AnimationOptions::default(), None),
            Self::Options(options) => (options, None),
            Self::Condition(condition) => (AnimationOptions::default(), Some(condition)),
            Self::Both(options, condition) => (options, Some(condition)),
        }
    }
}

impl From<()> for DefinitionArgs {
    fn from(_: ()) -> Self {
        Self::None
    }
}

impl From<AnimationOptions> for DefinitionArgs {
    fn from(options: AnimationOptions) -> Self {
        Self::Options(options)
    }
}

impl From<Condition> for DefinitionArgs {
    fn from(condition: Condition) -> Self {
        Self::Condition(condition)
    }
}

impl From<(AnimationOptions, Condition)> for DefinitionArgs {
    fn from((options, condition): (AnimationOptions, Condition)) -> Self {
        Self::Both(options, condition)
    }
}

/// A registered property animation
#[derive(Debug, Clone)]
pub struct AnimationDefinition {
    /// Target value
    pub value: AnimationValue,
    /// Timing options
    pub options: AnimationOptions,
    /// Activation condition
    pub condition: Option<Condition>,
}

impl AnimationDefinition {
    /// Create a definition
    pub fn new(
        value: AnimationValue,
        options: AnimationOptions,
        condition: Option<Condition>,
    ) -> Self {
        Self {
            value,
            options,
            condition,
        }
    }
}
