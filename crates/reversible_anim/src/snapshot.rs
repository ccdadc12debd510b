// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pre-play values recorded for reversal.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of the data name a key's snapshot is stored under
pub const SNAPSHOT_PREFIX: &str = "beforeAnim_";

/// Data name of the snapshot for an animation key
pub fn snapshot_name(key: &str) -> String {
    format!("{SNAPSHOT_PREFIX}{key}")
}

/// Values properties had before a key was played
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Properties that were assigned directly
    pub textual: IndexMap<String, String>,
    /// Properties that were transitioned
    pub numeric: IndexMap<String, String>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.textual.is_empty() && self.numeric.is_empty()
    }

    /// Number of recorded properties
    pub fn len(&self) -> usize {
        self.textual.len() + self.numeric.len()
    }

    /// Union with another snapshot; entries of `other` win on conflict
    pub fn merge(&mut self, other: Snapshot) {
        self.textual.extend(other.textual);
        self.numeric.extend(other.numeric);
    }
}
