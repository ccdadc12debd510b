// SPDX-License-Identifier: MIT OR Apache-2.0
//! Execution of a playback plan against the host.

use crate::classify::PlaybackPlan;
use crate::host::{AnimationHost, Completion, PropertyTargets, TargetId};
use crate::snapshot::snapshot_name;
use crate::value::Easing;

/// Parameters shared by every transition of one call
#[derive(Debug, Clone, Default)]
pub struct Playback {
    /// Main duration in milliseconds
    pub duration_ms: u64,
    /// Easing handed to the transition primitive
    pub easing: Easing,
    /// Invoked once per finished transition
    pub on_complete: Option<Completion>,
}

impl Playback {
    /// Create playback parameters with the default easing
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Set the easing
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the completion callback
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(TargetId) + Send + Sync + 'static,
    {
        self.on_complete = Some(Completion::new(callback));
        self
    }
}

/// Work deferred by a timer. Each task owns everything it needs.
#[derive(Debug, Clone)]
pub enum ScheduledTask {
    /// Assign a property directly
    Assign {
        /// Target to modify
        target: TargetId,
        /// Property name
        property: String,
        /// Value to assign
        value: String,
    },
    /// Start a transition
    Transition {
        /// Target to animate
        target: TargetId,
        /// Properties and their target values
        properties: PropertyTargets,
        /// Transition duration in milliseconds
        duration_ms: u64,
        /// Easing
        easing: Easing,
        /// Completion callback
        on_complete: Option<Completion>,
    },
}

impl ScheduledTask {
    /// Target the task applies to
    pub fn target(&self) -> TargetId {
        match self {
            Self::Assign { target, .. } | Self::Transition { target, .. } => *target,
        }
    }

    /// Carry out the task
    pub fn run<H: AnimationHost + ?Sized>(self, host: &mut H) {
        match self {
            Self::Assign {
                target,
                property,
                value,
            } => host.write_style(target, &property, &value),
            Self::Transition {
                target,
                properties,
                duration_ms,
                easing,
                on_complete,
            } => host.transition(target, properties, duration_ms, &easing, on_complete),
        }
    }
}

/// Run a plan: record snapshots, assign fixed properties, start the synchronous
/// transition, then schedule delayed transitions.
///
/// An empty plan only records its snapshots.
pub fn dispatch<H: AnimationHost + ?Sized>(
    host: &mut H,
    target: TargetId,
    plan: PlaybackPlan,
    playback: &Playback,
) {
    let PlaybackPlan {
        fixed,
        synchronous,
        delayed,
        snapshots,
    } = plan;
    let has_work = !(fixed.is_empty() && synchronous.is_empty() && delayed.is_empty());

    for (key, snapshot) in snapshots {
        host.set_data(target, &snapshot_name(&key), snapshot);
    }

    if !has_work {
        return;
    }

    for (property, definition) in fixed {
        let value = definition.value.to_string();
        match definition.options.effective_delay() {
            Some(delay) => {
                let delay_ms = delay.resolve(playback.duration_ms);
                tracing::trace!(%target, property, delay_ms, "Scheduling fixed property");
                host.schedule(
                    delay_ms,
                    ScheduledTask::Assign {
                        target,
                        property,
                        value,
                    },
                );
            }
            None => host.write_style(target, &property, &value),
        }
    }

    host.transition(
        target,
        synchronous,
        playback.duration_ms,
        &playback.easing,
        playback.on_complete.clone(),
    );

    for (property, definition) in delayed {
        let delay_ms = definition
            .options
            .effective_delay()
            .map_or(0, |delay| delay.resolve(playback.duration_ms));
        let duration_ms = match definition.options.explicit_time() {
            Some(time) => time,
            None => {
                if delay_ms > playback.duration_ms {
                    tracing::warn!(
                        %target,
                        property,
                        delay_ms,
                        duration_ms = playback.duration_ms,
                        "Delay exceeds duration, property will jump to its value"
                    );
                }
                playback.duration_ms.saturating_sub(delay_ms)
            }
        };

        tracing::trace!(%target, property, delay_ms, duration_ms, "Scheduling delayed property");
        let mut properties = PropertyTargets::new();
        properties.insert(property, definition.value);
        host.schedule(
            delay_ms,
            ScheduledTask::Transition {
                target,
                properties,
                duration_ms,
                easing: playback.easing.clone(),
                on_complete: playback.on_complete.clone(),
            },
        );
    }
}
