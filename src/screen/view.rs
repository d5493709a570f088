//! View model handed to the presentation layer.
//!
//! The screen rebuilds this from scratch on every filter change, bulk
//! toggle, color edit, and reset. Row toggles mutate the retained model in
//! place instead, mirroring how the checkbox widgets behave on screen.

use crate::catalog::{Category, EntityId};
use crate::color::ColorValue;

/// One rendered entity row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: EntityId,
    /// Display name shown in the row label.
    pub name: String,
    /// Per-entity checkbox state.
    pub checked: bool,
    /// Swatch color; [`ColorValue::TRANSPARENT`] when no color is assigned.
    pub swatch: ColorValue,
}

/// One visible category section with its aggregate checkbox.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub category: Category,
    /// Section header label.
    pub label: &'static str,
    /// Whether the section body is expanded.
    pub expanded: bool,
    /// Aggregate checkbox: checked iff the category has any active entity.
    pub aggregate_checked: bool,
    /// Rows in render order.
    pub rows: Vec<RowView>,
}

impl SectionView {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// The full visible row set, in fixed category order. Categories that ended
/// up with no rows are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub sections: Vec<SectionView>,
}

impl ViewModel {
    /// Get the visible section for a category, if it has any rows.
    pub fn section(&self, category: Category) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.category == category)
    }

    pub(crate) fn section_mut(&mut self, category: Category) -> Option<&mut SectionView> {
        self.sections.iter_mut().find(|s| s.category == category)
    }

    /// Find a visible row by entity id.
    pub fn row(&self, id: EntityId) -> Option<&RowView> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|r| r.id == id)
    }

    pub(crate) fn row_mut(&mut self, id: EntityId) -> Option<&mut RowView> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.rows.iter_mut())
            .find(|r| r.id == id)
    }

    /// Total visible row count across all sections.
    pub fn total_rows(&self) -> usize {
        self.sections.iter().map(SectionView::row_count).sum()
    }
}
