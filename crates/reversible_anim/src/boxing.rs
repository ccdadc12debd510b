// SPDX-License-Identifier: MIT OR Apache-2.0
//! Expansion of four-sided shorthand properties.
//!
//! `margin`, `padding` and `border*` shorthands cannot be read back reliably, so
//! they are registered as their four side-specific counterparts instead:
//!
//! - `padding` → `paddingTop`, `paddingRight`, `paddingBottom`, `paddingLeft`
//! - `borderWidth` → `borderTopWidth`, ..., `borderLeftWidth`
//! - `borderRadius` → `borderTopLeftRadius`, ..., `borderBottomLeftRadius`

use crate::value::AnimationValue;

/// Leading words that mark a four-sided shorthand
const BOX_WORDS: [&str; 3] = ["margin", "padding", "border"];

/// Sides of edge properties, in shorthand order
const EDGE_SIDES: [&str; 4] = ["Top", "Right", "Bottom", "Left"];

/// Corners of radius properties, in shorthand order
const CORNER_SIDES: [&str; 4] = ["TopLeft", "TopRight", "BottomRight", "BottomLeft"];

/// One side-specific property produced from a shorthand
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSide {
    /// Concrete property name
    pub property: String,
    /// Value for this side
    pub value: AnimationValue,
}

/// Split a camel-case property at its first uppercase letter.
///
/// `"borderRadius"` → `("border", "Radius")`, `"padding"` → `("padding", "")`.
pub fn split_property(property: &str) -> (&str, &str) {
    match property.find(|c: char| c.is_ascii_uppercase()) {
        Some(idx) => property.split_at(idx),
        None => (property, ""),
    }
}

/// Whether a property is a shorthand that [`expand`] rewrites
pub fn is_box_property(property: &str) -> bool {
    let (base, suffix) = split_property(property);
    BOX_WORDS.iter().any(|word| base.eq_ignore_ascii_case(word))
        && !EDGE_SIDES.iter().any(|side| suffix.starts_with(side))
}

/// Pad or truncate shorthand entries to exactly four, following the CSS rule:
/// one value for all sides, two for vertical/horizontal, three for top/horizontal/bottom.
pub fn pad_entries(mut entries: Vec<AnimationValue>) -> [AnimationValue; 4] {
    if entries.is_empty() {
        entries.push(AnimationValue::Text(String::new()));
    }
    let v0 = entries[0].clone();
    let v1 = entries.get(1).cloned().unwrap_or_else(|| v0.clone());
    let v2 = entries.get(2).cloned().unwrap_or_else(|| v0.clone());
    let v3 = entries.get(3).cloned().unwrap_or_else(|| v1.clone());
    [v0, v1, v2, v3]
}

/// Expand a shorthand into its four side-specific properties.
///
/// Returns `None` when the property is not a shorthand. The result is never
/// expanded again.
pub fn expand(property: &str, value: &AnimationValue) -> Option<[BoxSide; 4]> {
    if !is_box_property(property) {
        return None;
    }

    let (base, suffix) = split_property(property);
    let sides = if suffix.eq_ignore_ascii_case("radius") {
        CORNER_SIDES
    } else {
        EDGE_SIDES
    };
    let [v0, v1, v2, v3] = pad_entries(value.box_entries());

    let side = |i: usize, value: AnimationValue| BoxSide {
        property: format!("{base}{}{suffix}", sides[i]),
        value,
    };
    Some([side(0, v0), side(1, v1), side(2, v2), side(3, v3)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded(property: &str, value: AnimationValue) -> Vec<(String, String)> {
        expand(property, &value)
            .unwrap()
            .into_iter()
            .map(|side| (side.property, side.value.to_string()))
            .collect()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(p, v)| (p.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_split_property() {
        assert_eq!(split_property("borderRadius"), ("border", "Radius"));
        assert_eq!(split_property("padding"), ("padding", ""));
        assert_eq!(split_property("borderTopWidth"), ("border", "TopWidth"));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(
            expanded("padding", "10px".into()),
            pairs(&[
                ("paddingTop", "10px"),
                ("paddingRight", "10px"),
                ("paddingBottom", "10px"),
                ("paddingLeft", "10px"),
            ])
        );
    }

    #[test]
    fn test_two_values() {
        assert_eq!(
            expanded("padding", vec!["1px", "2px"].into()),
            pairs(&[
                ("paddingTop", "1px"),
                ("paddingRight", "2px"),
                ("paddingBottom", "1px"),
                ("paddingLeft", "2px"),
            ])
        );
    }

    #[test]
    fn test_three_values() {
        assert_eq!(
            expanded("margin", "1px,2px,3px".into()),
            pairs(&[
                ("marginTop", "1px"),
                ("marginRight", "2px"),
                ("marginBottom", "3px"),
                ("marginLeft", "2px"),
            ])
        );
    }

    #[test]
    fn test_radius_corners() {
        assert_eq!(
            expanded("borderRadius", "5,10,15,20".into()),
            pairs(&[
                ("borderTopLeftRadius", "5"),
                ("borderTopRightRadius", "10"),
                ("borderBottomRightRadius", "15"),
                ("borderBottomLeftRadius", "20"),
            ])
        );
    }

    #[test]
    fn test_suffix_and_number() {
        assert_eq!(
            expanded("borderWidth", 1.into()),
            pairs(&[
                ("borderTopWidth", "1"),
                ("borderRightWidth", "1"),
                ("borderBottomWidth", "1"),
                ("borderLeftWidth", "1"),
            ])
        );
    }

    #[test]
    fn test_extra_values_truncated() {
        let sides = expanded("padding", "1,2,3,4,5".into());
        assert_eq!(sides.len(), 4);
        assert_eq!(sides[3], ("paddingLeft".to_string(), "4".to_string()));
    }

    #[test]
    fn test_not_expanded() {
        assert!(expand("width", &"10px".into()).is_none());
        assert!(expand("paddingTop", &"10px".into()).is_none());
        assert!(expand("borderTopWidth", &"1px".into()).is_none());
        assert!(expand("Padding", &"10px".into()).is_none());
        assert!(is_box_property("margin"));
    }
}
