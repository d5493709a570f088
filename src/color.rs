//! Color values assigned to entities.
//!
//! A [`ColorValue`] is plain data: an RGBA color plus a flag marking it as
//! rainbow-animated. The color-picker collaborator reports a whole new value
//! back to the screen (`Message::ColorPicked`); nothing in the core mutates a
//! color in place or shares one between rows.

use serde::{Deserialize, Serialize};

/// An RGBA color with an optional rainbow-animation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    /// Whether the color cycles hues on a global tick. Animated colors are
    /// handed to the [`RainbowRegistry`](crate::rainbow::RainbowRegistry)
    /// when picked; the registry drives the actual animation.
    #[serde(default)]
    pub rainbow: bool,
}

impl ColorValue {
    /// Opaque white, the default created when an entity's color is first edited.
    pub const WHITE: ColorValue = ColorValue::rgba(255, 255, 255, 255);

    /// Fully transparent black, what a swatch shows for an entity with no color.
    pub const TRANSPARENT: ColorValue = ColorValue::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a,
            rainbow: false,
        }
    }

    /// Mark the color as rainbow-animated.
    pub fn with_rainbow(mut self) -> Self {
        self.rainbow = true;
        self
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(ColorValue::WHITE.a, 255);
        assert_eq!(ColorValue::TRANSPARENT.a, 0);
        assert!(!ColorValue::WHITE.rainbow);
    }

    #[test]
    fn test_with_rainbow() {
        let color = ColorValue::rgba(10, 20, 30, 255).with_rainbow();
        assert!(color.rainbow);
        assert_eq!(color.r, 10);
    }

    #[test]
    fn test_json_round_trip() {
        let color = ColorValue::rgba(1, 2, 3, 4).with_rainbow();
        let json = serde_json::to_string(&color).expect("Failed to serialize");
        let back: ColorValue = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(color, back);
    }
}
