// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reversible property animations.
//!
//! This crate layers named, undoable animations over a host's transition primitive:
//! - Definitions registered globally or per target under an animation key
//! - Expansion of `margin`/`padding`/`border` shorthands into their four sides
//! - Playback split into fixed, synchronous and delayed properties
//! - Snapshots of pre-play values so a playback can be reversed
//!
//! ## Architecture
//!
//! The registry never touches a target directly. Everything goes through an
//! [`AnimationHost`]:
//! - Style reads and writes
//! - The transition primitive
//! - Per-target data (snapshots)
//! - One-shot timers carrying a [`ScheduledTask`]
//!
//! [`sim::SimulatedHost`] implements the host in memory on a virtual clock.
//!
//! ```
//! use reversible_anim::{AnimationRegistry, Playback, TargetId};
//! use reversible_anim::sim::SimulatedHost;
//!
//! let mut host = SimulatedHost::new();
//! let target = TargetId::new();
//! host.set_style(target, "paddingTop", "0px");
//!
//! let mut registry = AnimationRegistry::new();
//! registry.add_animation("stretch", "padding", "+=5", ());
//!
//! registry.play(&mut host, &[target], "stretch", &Playback::new(200)).unwrap();
//! host.run_until_idle();
//! assert_eq!(host.style(target, "paddingTop"), "5px");
//!
//! registry.play_back(&mut host, &[target], "stretch", &Playback::new(200));
//! host.run_until_idle();
//! assert_eq!(host.style(target, "paddingTop"), "0px");
//! ```

pub mod boxing;
pub mod classify;
pub mod definition;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod registry;
pub mod reverse;
pub mod sheet;
pub mod sim;
pub mod snapshot;
pub mod store;
pub mod value;

pub use boxing::{expand, is_box_property, BoxSide};
pub use classify::{classify, Bucket, PlaybackPlan};
pub use definition::{
    AnimationDefinition, AnimationOptions, BoxError, Condition, DefinitionArgs, Delay,
};
pub use dispatch::{dispatch, Playback, ScheduledTask};
pub use error::{AnimationError, Result};
pub use host::{AnimationHost, Completion, PropertyTargets, TargetId};
pub use registry::{split_keys, AnimationRegistry};
pub use sheet::{AnimationSheet, ConditionSpec, PlaybackDefaults, SheetEntry, SheetError};
pub use snapshot::{snapshot_name, Snapshot};
pub use store::{DefinitionStore, PropertyDefinitions, Scope};
pub use value::{AnimationValue, Easing};
