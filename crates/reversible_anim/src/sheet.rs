// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation sheets: definitions declared in RON.
//!
//! ```ron
//! (
//!     defaults: (duration_ms: 400, easing: Swing),
//!     animations: [
//!         (key: "stretch", property: "padding", value: Text("+=5")),
//!         (key: "border", property: "borderStyle", value: Text("solid"), when: Some(Equals("none"))),
//!     ],
//! )
//! ```
//!
//! A condition on a box shorthand is checked against each side property.

use crate::definition::{AnimationOptions, Condition};
use crate::dispatch::Playback;
use crate::host::TargetId;
use crate::registry::AnimationRegistry;
use crate::store::Scope;
use crate::value::{AnimationValue, Easing};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors reading or applying a sheet
#[derive(Debug, Error)]
pub enum SheetError {
    /// File could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sheet is not valid RON
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Sheet could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),

    /// Entry names a target alias the caller did not supply
    #[error("Unknown target `{alias}` for animation `{key}`")]
    UnknownTarget {
        /// Target alias
        alias: String,
        /// Animation key of the entry
        key: String,
    },
}

/// Declarative activation condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionSpec {
    /// Current value equals the text
    Equals(String),
    /// Current value differs from the text
    NotEquals(String),
    /// Property is unset
    IsEmpty,
    /// Property has a value
    NotEmpty,
}

impl ConditionSpec {
    /// Build the predicate
    pub fn to_condition(&self) -> Condition {
        match self.clone() {
            Self::Equals(expected) => Condition::new(move |current| current == expected),
            Self::NotEquals(expected) => Condition::new(move |current| current != expected),
            Self::IsEmpty => Condition::new(str::is_empty),
            Self::NotEmpty => Condition::new(|current| !current.is_empty()),
        }
    }
}

/// Playback parameters used when a caller gives none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackDefaults {
    /// Main duration in milliseconds
    pub duration_ms: u64,
    /// Easing
    pub easing: Easing,
}

impl Default for PlaybackDefaults {
    fn default() -> Self {
        Self {
            duration_ms: 400,
            easing: Easing::Swing,
        }
    }
}

impl PlaybackDefaults {
    /// Playback parameters without a completion callback
    pub fn playback(&self) -> Playback {
        Playback::new(self.duration_ms).with_easing(self.easing.clone())
    }
}

/// One declared definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetEntry {
    /// Animation key
    pub key: String,
    /// Property name; box shorthands are expanded on apply
    pub property: String,
    /// Target value
    pub value: AnimationValue,
    /// Timing options
    #[serde(default)]
    pub options: AnimationOptions,
    /// Activation condition
    #[serde(default)]
    pub when: Option<ConditionSpec>,
    /// Target alias; global when absent
    #[serde(default)]
    pub target: Option<String>,
}

/// A set of declared definitions plus playback defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationSheet {
    /// Playback defaults
    #[serde(default)]
    pub defaults: PlaybackDefaults,
    /// Declared definitions
    #[serde(default)]
    pub animations: Vec<SheetEntry>,
}

impl AnimationSheet {
    /// Parse from RON
    pub fn from_ron(s: &str) -> Result<Self, SheetError> {
        Ok(ron::from_str(s)?)
    }

    /// Serialize to RON
    pub fn to_ron(&self) -> Result<String, SheetError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let contents = std::fs::read_to_string(path)?;
        let sheet = Self::from_ron(&contents)?;
        tracing::debug!(
            path = %path.display(),
            entries = sheet.animations.len(),
            "Loaded animation sheet"
        );
        Ok(sheet)
    }

    /// Save to a file
    pub fn save(&self, path: &Path) -> Result<(), SheetError> {
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Target aliases referenced by entries, in first-use order
    pub fn target_aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = Vec::new();
        for alias in self.animations.iter().filter_map(|entry| entry.target.as_deref()) {
            if !aliases.contains(&alias) {
                aliases.push(alias);
            }
        }
        aliases
    }

    /// Register every entry. Entries with a target alias are registered on the
    /// target it maps to. Returns the number of entries applied.
    pub fn apply(
        &self,
        registry: &mut AnimationRegistry,
        targets: &HashMap<String, TargetId>,
    ) -> Result<usize, SheetError> {
        let mut scoped = Vec::with_capacity(self.animations.len());
        for entry in &self.animations {
            let scope = match &entry.target {
                None => Scope::Global,
                Some(alias) => match targets.get(alias) {
                    Some(&target) => Scope::Target(target),
                    None => {
                        return Err(SheetError::UnknownTarget {
                            alias: alias.clone(),
                            key: entry.key.clone(),
                        })
                    }
                },
            };
            scoped.push((scope, entry));
        }

        for (scope, entry) in &scoped {
            registry.register(
                *scope,
                &entry.key,
                &entry.property,
                entry.value.clone(),
                entry.options,
                entry.when.as_ref().map(ConditionSpec::to_condition),
            );
        }
        Ok(scoped.len())
    }
}
