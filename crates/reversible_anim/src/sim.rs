// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-memory host driven by a virtual clock.
//!
//! Transitions do not interpolate: each one records itself and writes its target
//! values once its duration has elapsed. Relative targets (`+=5`, `-=2px`) are
//! resolved against the value current at that moment.

use crate::dispatch::ScheduledTask;
use crate::host::{AnimationHost, Completion, PropertyTargets, TargetId};
use crate::snapshot::Snapshot;
use crate::value::{AnimationValue, Easing};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A transition started on the simulated host
#[derive(Debug, Clone)]
pub struct TransitionRecord {
    /// Animated target
    pub target: TargetId,
    /// Properties and their target values
    pub properties: PropertyTargets,
    /// Duration in milliseconds
    pub duration_ms: u64,
    /// Easing
    pub easing: Easing,
    /// Clock time the transition started at
    pub started_at_ms: u64,
}

#[derive(Debug)]
enum TimerEvent {
    Task(ScheduledTask),
    Finish {
        target: TargetId,
        properties: PropertyTargets,
        on_complete: Option<Completion>,
    },
}

#[derive(Debug)]
struct PendingTimer {
    due_ms: u64,
    seq: u64,
    event: TimerEvent,
}

/// Host keeping styles, data and timers in memory
#[derive(Debug, Default)]
pub struct SimulatedHost {
    now_ms: u64,
    styles: HashMap<TargetId, IndexMap<String, String>>,
    data: HashMap<(TargetId, String), Snapshot>,
    timers: Vec<PendingTimer>,
    next_seq: u64,
    transitions: Vec<TransitionRecord>,
}

impl SimulatedHost {
    /// Create a host at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Set a style value directly
    pub fn set_style(&mut self, target: TargetId, property: &str, value: impl Into<String>) {
        self.styles
            .entry(target)
            .or_default()
            .insert(property.to_string(), value.into());
    }

    /// Get a style value; unset properties are empty
    pub fn style(&self, target: TargetId, property: &str) -> String {
        self.styles
            .get(&target)
            .and_then(|styles| styles.get(property))
            .cloned()
            .unwrap_or_default()
    }

    /// Get every style set on a target
    pub fn styles(&self, target: TargetId) -> Option<&IndexMap<String, String>> {
        self.styles.get(&target)
    }

    /// Transitions started so far
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Number of timers and running transitions
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Whether nothing is waiting to fire
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Move the clock forward, firing everything that falls due in order
    pub fn advance(&mut self, delta_ms: u64) {
        let until = self.now_ms.saturating_add(delta_ms);
        while let Some(timer) = self.pop_due(until) {
            self.now_ms = timer.due_ms;
            self.fire(timer.event);
        }
        self.now_ms = until;
    }

    /// Advance until no timer or transition remains
    pub fn run_until_idle(&mut self) {
        while let Some(due_ms) = self.timers.iter().map(|timer| timer.due_ms).min() {
            self.advance(due_ms.saturating_sub(self.now_ms));
        }
    }

    fn push_timer(&mut self, delay_ms: u64, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(PendingTimer {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            event,
        });
    }

    fn pop_due(&mut self, until_ms: u64) -> Option<PendingTimer> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
            .map(|(idx, _)| idx)?;
        Some(self.timers.swap_remove(idx))
    }

    fn fire(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Task(task) => task.run(self),
            TimerEvent::Finish {
                target,
                properties,
                on_complete,
            } => {
                for (property, value) in properties {
                    let resolved = resolve_target(&self.style(target, &property), &value);
                    self.set_style(target, &property, resolved);
                }
                if let Some(on_complete) = on_complete {
                    on_complete.call(target);
                }
            }
        }
    }
}

impl AnimationHost for SimulatedHost {
    fn read_style(&self, target: TargetId, property: &str) -> String {
        self.style(target, property)
    }

    fn write_style(&mut self, target: TargetId, property: &str, value: &str) {
        self.set_style(target, property, value);
    }

    fn transition(
        &mut self,
        target: TargetId,
        properties: PropertyTargets,
        duration_ms: u64,
        easing: &Easing,
        on_complete: Option<Completion>,
    ) {
        self.transitions.push(TransitionRecord {
            target,
            properties: properties.clone(),
            duration_ms,
            easing: easing.clone(),
            started_at_ms: self.now_ms,
        });
        self.push_timer(
            duration_ms,
            TimerEvent::Finish {
                target,
                properties,
                on_complete,
            },
        );
    }

    fn data(&self, target: TargetId, name: &str) -> Option<Snapshot> {
        self.data.get(&(target, name.to_string())).cloned()
    }

    fn set_data(&mut self, target: TargetId, name: &str, snapshot: Snapshot) {
        self.data.insert((target, name.to_string()), snapshot);
    }

    fn schedule(&mut self, delay_ms: u64, task: ScheduledTask) {
        self.push_timer(delay_ms, TimerEvent::Task(task));
    }
}

/// Final value of a transition target given the property's current value.
///
/// A list is taken as `[value, ...]` and resolves its first entry.
fn resolve_target(current: &str, value: &AnimationValue) -> String {
    let value = match value {
        AnimationValue::List(items) => items.first().map(ToString::to_string).unwrap_or_default(),
        other => other.to_string(),
    };

    let (sign, delta) = if let Some(rest) = value.strip_prefix("+=") {
        (1.0, rest)
    } else if let Some(rest) = value.strip_prefix("-=") {
        (-1.0, rest)
    } else {
        return value;
    };
    let Some((delta, delta_unit)) = split_number(delta) else {
        return value;
    };
    let (base, base_unit) = split_number(current).unwrap_or((0.0, ""));
    let unit = if delta_unit.is_empty() { base_unit } else { delta_unit };
    format!("{}{unit}", base + sign * delta)
}

/// Split "12.5px" into `(12.5, "px")`
fn split_number(text: &str) -> Option<(f64, &str)> {
    let text = text.trim();
    let end = text
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(text.len(), |(i, _)| i);
    let number = text[..end].parse().ok()?;
    Some((number, text[end..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_relative_targets() {
        assert_eq!(resolve_target("10px", &"+=5".into()), "15px");
        assert_eq!(resolve_target("10px", &"-=2.5".into()), "7.5px");
        assert_eq!(resolve_target("", &"+=5px".into()), "5px");
        assert_eq!(resolve_target("10px", &"20px".into()), "20px");
        assert_eq!(resolve_target("1", &AnimationValue::from(vec!["+=5", "swing"])), "6");
        assert_eq!(resolve_target("auto", &"+=4em".into()), "4em");
    }

    #[test]
    fn test_transition_completes_after_duration() {
        let mut host = SimulatedHost::new();
        let target = TargetId::new();
        host.set_style(target, "width", "10px");

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut properties = PropertyTargets::new();
        properties.insert("width".into(), "+=10".into());
        host.transition(
            target,
            properties,
            200,
            &Easing::Linear,
            Some(Completion::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        );

        host.advance(199);
        assert_eq!(host.style(target, "width"), "10px");
        host.advance(1);
        assert_eq!(host.style(target, "width"), "20px");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(host.is_idle());
    }

    #[test]
    fn test_timers_fire_in_order() {
        let mut host = SimulatedHost::new();
        let target = TargetId::new();
        let assign = |value: &str| ScheduledTask::Assign {
            target,
            property: "color".into(),
            value: value.into(),
        };

        host.schedule(50, assign("red"));
        host.schedule(20, assign("blue"));
        host.schedule(50, assign("green"));
        assert_eq!(host.pending(), 3);

        host.advance(30);
        assert_eq!(host.style(target, "color"), "blue");
        host.run_until_idle();
        assert_eq!(host.style(target, "color"), "green");
        assert_eq!(host.now_ms(), 50);
    }

    #[test]
    fn test_distant_timer_saturates_clock() {
        let mut host = SimulatedHost::new();
        let target = TargetId::new();
        host.advance(10);
        host.schedule(
            u64::MAX,
            ScheduledTask::Assign {
                target,
                property: "color".into(),
                value: "red".into(),
            },
        );

        host.advance(u64::MAX);
        assert_eq!(host.now_ms(), u64::MAX);
        assert_eq!(host.style(target, "color"), "red");
        assert!(host.is_idle());
    }
}
