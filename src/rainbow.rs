//! Registry for rainbow-animated colors.
//!
//! When the user picks an animated color, the screen hands it to a
//! [`RainbowRegistry`] so something outside this crate can cycle its hue on
//! a global tick. The registry is injected into the screen instead of being
//! a process-wide singleton, so tests can substitute their own.

use crate::color::ColorValue;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives colors the user marked as rainbow-animated.
pub trait RainbowRegistry {
    fn register(&mut self, color: ColorValue);
}

/// Registry that ignores everything. Used when no animator is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRainbowRegistry;

impl RainbowRegistry for NoopRainbowRegistry {
    fn register(&mut self, _color: ColorValue) {}
}

/// Shared registry backed by `Rc<RefCell<..>>` so the owner keeps a handle
/// to the registered colors while the screen holds another.
#[derive(Debug, Clone, Default)]
pub struct SharedRainbowRegistry {
    colors: Rc<RefCell<Vec<ColorValue>>>,
}

impl SharedRainbowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the currently registered colors.
    pub fn colors(&self) -> Vec<ColorValue> {
        self.colors.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.colors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.borrow().is_empty()
    }
}

impl RainbowRegistry for SharedRainbowRegistry {
    fn register(&mut self, color: ColorValue) {
        self.colors.borrow_mut().push(color);
    }
}
