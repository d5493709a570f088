//! Selection store: the mutable map from entity to active/color state.
//!
//! An entry exists if and only if the entity has ever been activated or had
//! a color assigned. Removing an entry is the full reset: deactivation plus
//! color clearing. The store has no side effects beyond the in-memory map;
//! change notification and persistence belong to the screen's owner.

use crate::catalog::EntityId;
use crate::color::ColorValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-entity selection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    /// Whether the entity is currently selected.
    pub active: bool,
    /// Assigned color, if one was ever edited.
    pub color: Option<ColorValue>,
}

/// Storage for the user's entity selection and color assignments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionStore {
    entries: HashMap<EntityId, SelectionEntry>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an entity active, creating its entry if needed. Idempotent;
    /// never touches an existing color.
    pub fn activate(&mut self, id: EntityId) {
        self.entries.entry(id).or_default().active = true;
    }

    /// Mark an entity inactive. Returns whether a real change occurred;
    /// a missing or already-inactive entry is a defined no-op.
    pub fn deactivate(&mut self, id: EntityId) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.active => {
                entry.active = false;
                true
            }
            _ => false,
        }
    }

    /// Get the entry for an entity, or the inactive/no-color default.
    pub fn get(&self, id: EntityId) -> SelectionEntry {
        self.entries.get(&id).copied().unwrap_or_default()
    }

    pub fn is_active(&self, id: EntityId) -> bool {
        self.entries.get(&id).is_some_and(|e| e.active)
    }

    /// Assign a color, creating the entry if needed. Does not change the
    /// active flag.
    pub fn set_color(&mut self, id: EntityId, color: ColorValue) {
        self.entries.entry(id).or_default().color = Some(color);
    }

    /// Delete the entry outright (full deactivation with color cleared).
    /// Returns whether an entry existed.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// All entries that currently exist.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, SelectionEntry)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, *entry))
    }

    /// Ids of all active entities.
    pub fn active_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.active)
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ========================================================================
    // Import/Export
    // ========================================================================

    /// Export the store to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import a store from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
