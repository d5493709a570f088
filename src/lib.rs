//! mobpalette - categorized, searchable multi-select entity list editor.
//!
//! The core of a "select entities" screen: pick a subset of entity types
//! from a large catalog, assign each a color, and toggle whole categories
//! at once. This crate owns the selection/aggregation state machine and
//! the list-building algorithm; widget rendering, window chrome and the
//! color-picker sub-screen are external collaborators talking to the core
//! through [`Message`] and [`ViewModel`].

pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod message;
pub mod rainbow;
pub mod screen;
pub mod search;
pub mod selection;
pub mod widget_state;

pub use catalog::{Catalog, Category, EntityId, EntityInfo, SpawnGroup, StaticCatalog};
pub use color::ColorValue;
pub use config::ScreenConfig;
pub use message::Message;
pub use rainbow::{NoopRainbowRegistry, RainbowRegistry, SharedRainbowRegistry};
pub use screen::{
    ChangeHook, EntityListScreen, PickerRequest, RowView, ScreenError, SectionView, ViewModel,
};
pub use search::{FuzzyRanker, SearchRanker};
pub use selection::{SelectionEntry, SelectionStore};
pub use widget_state::CollapsibleState;
