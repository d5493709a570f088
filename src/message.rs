//! Screen message types.
//!
//! Every user interaction the presentation layer can produce is a message;
//! the screen consumes them in `EntityListScreen::update` and mutates state
//! or rebuilds the view model in response.

use crate::catalog::{Category, EntityId};
use crate::color::ColorValue;
use crate::widget_state::CollapsibleState;

/// Messages that can be sent to update the entity list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Filter text box content changed
    FilterChanged(String),

    /// Per-entity row checkbox toggled to the given state
    RowToggled(EntityId, bool),

    /// Category aggregate checkbox toggled; affects every row currently
    /// visible in that category's section
    AggregateToggled(Category, bool),

    /// Category section expanded or collapsed
    SectionToggled(Category, CollapsibleState),

    /// Edit button pressed on a row; opens the color picker
    EditColor(EntityId),

    /// Color picker closed with a new color for the entity
    ColorPicked(EntityId, ColorValue),

    /// Reset button pressed on a row; clears selection and color
    ResetEntity(EntityId),
}
