// SPDX-License-Identifier: MIT OR Apache-2.0
//! Restoring the values a playback replaced.

use crate::dispatch::Playback;
use crate::host::{AnimationHost, PropertyTargets, TargetId};
use crate::registry::split_keys;
use crate::snapshot::{snapshot_name, Snapshot};
use crate::value::AnimationValue;

/// Restore the pre-play values recorded for the comma-separated `keys`.
///
/// Snapshots of all keys are merged (later keys win) and cleared. Directly assigned
/// properties are written back at once; transitioned properties are transitioned
/// back in a single call. Returns whether anything was restored; keys that were
/// never played are ignored.
pub fn play_back<H: AnimationHost + ?Sized>(
    host: &mut H,
    target: TargetId,
    keys: &str,
    playback: &Playback,
) -> bool {
    let mut restore = Snapshot::new();
    for key in split_keys(keys) {
        let name = snapshot_name(key);
        if let Some(snapshot) = host.data(target, &name) {
            restore.merge(snapshot);
            host.set_data(target, &name, Snapshot::new());
        }
    }

    if restore.is_empty() {
        tracing::trace!(%target, keys, "Nothing to play back");
        return false;
    }

    tracing::debug!(
        %target,
        keys,
        textual = restore.textual.len(),
        numeric = restore.numeric.len(),
        "Playing back animation"
    );

    for (property, value) in &restore.textual {
        host.write_style(target, property, value);
    }

    let properties: PropertyTargets = restore
        .numeric
        .into_iter()
        .map(|(property, value)| (property, AnimationValue::Text(value)))
        .collect();
    host.transition(
        target,
        properties,
        playback.duration_ms,
        &playback.easing,
        playback.on_complete.clone(),
    );
    true
}
