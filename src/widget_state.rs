//! Transient widget state that survives view-model rebuilds.
//!
//! The screen rebuilds its view model from scratch on every filter change,
//! bulk toggle, color edit, and reset. States kept here are carried across
//! those rebuilds instead of being re-derived.

/// State for a collapsible category section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollapsibleState {
    /// Whether the section is expanded
    pub is_expanded: bool,
}

impl CollapsibleState {
    pub fn new(expanded: bool) -> Self {
        Self {
            is_expanded: expanded,
        }
    }

    pub fn expanded() -> Self {
        Self::new(true)
    }

    pub fn collapsed() -> Self {
        Self::new(false)
    }

    pub fn toggle(&mut self) {
        self.is_expanded = !self.is_expanded;
    }
}
