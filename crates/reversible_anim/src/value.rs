// SPDX-License-Identifier: MIT OR Apache-2.0
//! Target values and easing identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Easing identifier handed through to the transition primitive
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Easing {
    /// Slow start and end
    #[default]
    Swing,
    /// Constant speed
    Linear,
    /// Any other easing the host understands
    Named(String),
}

impl Easing {
    /// Get the identifier passed to the host
    pub fn name(&self) -> &str {
        match self {
            Self::Swing => "swing",
            Self::Linear => "linear",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value a property is animated or set to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimationValue {
    /// Bare number
    Number(f64),
    /// Text value ("10px", "+=5", "solid", "5,10,15,20")
    Text(String),
    /// Ordered sequence of values
    List(Vec<AnimationValue>),
}

impl AnimationValue {
    /// Whether the value contains a whitespace-delimited token made only of letters.
    ///
    /// Such values ("solid", "auto", "1px solid red") cannot be interpolated and are
    /// assigned directly instead.
    pub fn has_named_token(&self) -> bool {
        self.to_string()
            .split_whitespace()
            .any(|token| token.chars().all(|c| c.is_ascii_alphabetic()))
    }

    /// Split the value into the entries of a four-sided shorthand.
    ///
    /// Text is split on commas, lists are taken as-is and any other value
    /// becomes a single entry.
    pub fn box_entries(&self) -> Vec<AnimationValue> {
        match self {
            Self::Text(text) => text
                .split(',')
                .map(|entry| Self::Text(entry.trim().to_string()))
                .collect(),
            Self::List(items) => items.clone(),
            Self::Number(_) => vec![self.clone()],
        }
    }

    /// Get as number if possible
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as text if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for AnimationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<f64> for AnimationValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AnimationValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for AnimationValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnimationValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<AnimationValue>> From<Vec<T>> for AnimationValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
