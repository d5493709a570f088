//! Screen configuration.
//!
//! Tunables the embedding application may want to override. Serializable so
//! it can ride along in an application config file.

use crate::color::ColorValue;
use crate::constants::EXPAND_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Configuration for an entity list screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// First-build expand policy: expand all non-empty sections when the
    /// total visible row count is at most this value.
    #[serde(default = "default_expand_threshold")]
    pub expand_threshold: usize,

    /// Color created for an entity the first time its color is edited.
    #[serde(default = "default_edit_color")]
    pub default_color: ColorValue,
}

fn default_expand_threshold() -> usize {
    EXPAND_THRESHOLD
}

fn default_edit_color() -> ColorValue {
    ColorValue::WHITE
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            expand_threshold: default_expand_threshold(),
            default_color: default_edit_color(),
        }
    }
}
