//! The entity list screen: selection state, aggregation, and list building.
//!
//! [`EntityListScreen`] owns the selection store while the screen is open
//! and turns presentation events ([`Message`]) into store mutations and
//! view-model rebuilds. The actual widget rendering lives outside this
//! crate; it consumes [`ViewModel`] and feeds clicks back in as messages.

mod view;

pub use view::{RowView, SectionView, ViewModel};

use crate::catalog::{CATEGORY_COUNT, Catalog, Category, EntityId};
use crate::color::ColorValue;
use crate::config::ScreenConfig;
use crate::message::Message;
use crate::rainbow::{NoopRainbowRegistry, RainbowRegistry};
use crate::search::SearchRanker;
use crate::selection::SelectionStore;
use crate::widget_state::CollapsibleState;
use std::cmp::Reverse;
use thiserror::Error;

/// Contract violations surfaced by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// An entity id reached the screen that the catalog does not know.
    /// The catalog is the sole source of truth for categories, so this is
    /// a caller bug and fails fast instead of desyncing aggregate counts.
    #[error("entity {0:?} is not in the catalog")]
    UnknownEntity(EntityId),
}

/// A pending request to open the color-picker collaborator.
///
/// Produced by [`Message::EditColor`]; the shell presents the picker on
/// `color` and reports the result back via [`Message::ColorPicked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerRequest {
    pub id: EntityId,
    pub color: ColorValue,
}

/// Change-notification hook, fired once per logical mutation batch.
pub type ChangeHook = Box<dyn FnMut()>;

/// Categorized, searchable multi-select entity list with per-entity colors.
pub struct EntityListScreen<C: Catalog, R: SearchRanker> {
    catalog: C,
    ranker: R,
    config: ScreenConfig,
    selection: SelectionStore,
    /// Trimmed filter text; empty means no filtering.
    filter_text: String,
    /// Per-category expand state, preserved across rebuilds.
    expanded: [CollapsibleState; CATEGORY_COUNT],
    /// Live per-category active counts.
    counts: [usize; CATEGORY_COUNT],
    /// Whether the first-build expand policy has already been applied.
    expand_decided: bool,
    view: ViewModel,
    on_changed: Option<ChangeHook>,
    rainbow: Box<dyn RainbowRegistry>,
    picker_request: Option<PickerRequest>,
}

impl<C: Catalog, R: SearchRanker> EntityListScreen<C, R> {
    /// Open a screen over a catalog with an existing selection.
    ///
    /// Fails fast if the selection references an entity the catalog does
    /// not know.
    pub fn new(catalog: C, ranker: R, selection: SelectionStore) -> Result<Self, ScreenError> {
        for (id, _) in selection.iter() {
            if catalog.get(id).is_none() {
                return Err(ScreenError::UnknownEntity(id));
            }
        }

        let mut screen = Self {
            catalog,
            ranker,
            config: ScreenConfig::default(),
            selection,
            filter_text: String::new(),
            expanded: [CollapsibleState::collapsed(); CATEGORY_COUNT],
            counts: [0; CATEGORY_COUNT],
            expand_decided: false,
            view: ViewModel::default(),
            on_changed: None,
            rainbow: Box::new(NoopRainbowRegistry),
            picker_request: None,
        };
        screen.rebuild();
        Ok(screen)
    }

    /// Override the default configuration. Re-applies the first-build
    /// expand policy under the new threshold.
    pub fn with_config(mut self, config: ScreenConfig) -> Self {
        self.config = config;
        self.expand_decided = false;
        self.rebuild();
        self
    }

    /// Install the change-notification hook. Called exactly once per
    /// logical mutation batch (a bulk toggle that changes N entities fires
    /// it once).
    pub fn with_change_hook(mut self, hook: ChangeHook) -> Self {
        self.on_changed = Some(hook);
        self
    }

    /// Install the registry that receives rainbow-animated colors.
    pub fn with_rainbow_registry(mut self, registry: Box<dyn RainbowRegistry>) -> Self {
        self.rainbow = registry;
        self
    }

    /// The current visible row set.
    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// The selection store, e.g. for serialization by the owner.
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Close the screen and hand the selection back to its owner.
    pub fn into_selection(self) -> SelectionStore {
        self.selection
    }

    /// Live count of active entities in a category.
    pub fn active_count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    pub fn is_expanded(&self, category: Category) -> bool {
        self.expanded[category.index()].is_expanded
    }

    /// Take the pending color-picker request, if any.
    pub fn take_picker_request(&mut self) -> Option<PickerRequest> {
        self.picker_request.take()
    }

    /// Apply one presentation event.
    pub fn update(&mut self, message: Message) -> Result<(), ScreenError> {
        match message {
            Message::FilterChanged(text) => {
                self.filter_text = text.trim().to_string();
                log::debug!("🔎 Filter changed: {:?}", self.filter_text);
                self.rebuild();
            }
            Message::RowToggled(id, checked) => self.handle_row_toggled(id, checked)?,
            Message::AggregateToggled(category, checked) => {
                self.handle_aggregate_toggled(category, checked);
            }
            Message::SectionToggled(category, state) => {
                self.expanded[category.index()] = state;
                if let Some(section) = self.view.section_mut(category) {
                    section.expanded = state.is_expanded;
                }
            }
            Message::EditColor(id) => self.handle_edit_color(id)?,
            Message::ColorPicked(id, color) => self.handle_color_picked(id, color)?,
            Message::ResetEntity(id) => self.handle_reset(id)?,
        }
        Ok(())
    }

    fn category_of(&self, id: EntityId) -> Result<Category, ScreenError> {
        self.catalog
            .get(id)
            .map(|info| info.category())
            .ok_or(ScreenError::UnknownEntity(id))
    }

    /// Per-row checkbox toggle. Adjusts the live count, flips the category
    /// aggregate on 0→1 and 1→0 transitions, and mutates the retained view
    /// in place; no rebuild.
    fn handle_row_toggled(&mut self, id: EntityId, checked: bool) -> Result<(), ScreenError> {
        let category = self.category_of(id)?;
        let idx = category.index();

        if checked {
            if !self.selection.is_active(id) {
                self.selection.activate(id);
                if self.counts[idx] == 0 {
                    if let Some(section) = self.view.section_mut(category) {
                        section.aggregate_checked = true;
                    }
                }
                self.counts[idx] += 1;
            }
        } else if self.selection.deactivate(id) {
            self.counts[idx] -= 1;
            if self.counts[idx] == 0 {
                if let Some(section) = self.view.section_mut(category) {
                    section.aggregate_checked = false;
                }
            }
        }

        // Keep the retained row in sync with the widget the user clicked.
        if let Some(row) = self.view.row_mut(id) {
            row.checked = self.selection.is_active(id);
        }

        log::debug!(
            "☑️  {:?} toggled {}: {} now has {} active",
            id,
            checked,
            category.name(),
            self.counts[idx]
        );
        self.notify_changed();
        Ok(())
    }

    /// Aggregate checkbox toggle: bulk-activate or bulk-deactivate every
    /// row currently visible in the section. Rebuilds and notifies only if
    /// at least one entity actually changed state.
    fn handle_aggregate_toggled(&mut self, category: Category, checked: bool) {
        let ids: Vec<EntityId> = self
            .view
            .section(category)
            .map(|section| section.rows.iter().map(|row| row.id).collect())
            .unwrap_or_default();

        let mut changed = false;
        for id in ids {
            if checked {
                self.selection.activate(id);
                changed = true;
            } else if self.selection.deactivate(id) {
                changed = true;
            }
        }

        if changed {
            log::debug!(
                "☑️  Bulk {} on {}",
                if checked { "select" } else { "deselect" },
                category.name()
            );
            self.rebuild();
            self.notify_changed();
        }
    }

    /// Edit button: ensure the entity has a color (opaque white on first
    /// edit), then ask the shell to open the picker on it. Rebuilds so the
    /// swatch reflects a freshly created default.
    fn handle_edit_color(&mut self, id: EntityId) -> Result<(), ScreenError> {
        self.category_of(id)?;

        let color = match self.selection.get(id).color {
            Some(color) => color,
            None => {
                let color = self.config.default_color;
                self.selection.set_color(id, color);
                color
            }
        };
        self.picker_request = Some(PickerRequest { id, color });
        self.rebuild();
        Ok(())
    }

    /// Picker result: store the new color, register it for animation if
    /// rainbow, and rebuild so the swatch updates.
    fn handle_color_picked(&mut self, id: EntityId, color: ColorValue) -> Result<(), ScreenError> {
        self.category_of(id)?;

        self.selection.set_color(id, color);
        if color.rainbow {
            self.rainbow.register(color);
        }
        log::debug!("🎨 {:?} color set to {:?}", id, color);
        self.rebuild();
        self.notify_changed();
        Ok(())
    }

    /// Reset button: delete the entry outright.
    fn handle_reset(&mut self, id: EntityId) -> Result<(), ScreenError> {
        self.category_of(id)?;

        self.selection.remove(id);
        log::debug!("🔄 {:?} reset", id);
        self.rebuild();
        self.notify_changed();
        Ok(())
    }

    fn notify_changed(&mut self) {
        if let Some(hook) = self.on_changed.as_mut() {
            hook();
        }
    }

    /// Full recomputation of the visible row set. Synchronous and
    /// idempotent: unchanged inputs produce an identical view model.
    fn rebuild(&mut self) {
        // Live counts from the current selection.
        let mut counts = [0usize; CATEGORY_COUNT];
        for info in self.catalog.entities() {
            if self.selection.is_active(info.id) {
                counts[info.category().index()] += 1;
            }
        }
        self.counts = counts;

        // Render order: catalog order, or ranked matches when filtering.
        let entities = self.catalog.entities();
        let ordered: Vec<&crate::catalog::EntityInfo> = if self.filter_text.is_empty() {
            entities.iter().collect()
        } else {
            let mut scored: Vec<_> = entities
                .iter()
                .filter_map(|info| {
                    let score = self.ranker.score(&info.name, &self.filter_text);
                    (score > 0).then_some((info, score))
                })
                .collect();
            // Stable sort: catalog order is the tie-break for equal scores.
            scored.sort_by_key(|(_, score)| Reverse(*score));
            scored.into_iter().map(|(info, _)| info).collect()
        };

        // Route every surviving entity into its category bucket.
        let mut buckets: [Vec<RowView>; CATEGORY_COUNT] = Default::default();
        for info in ordered {
            let entry = self.selection.get(info.id);
            buckets[info.category().index()].push(RowView {
                id: info.id,
                name: info.name.clone(),
                checked: entry.active,
                swatch: entry.color.unwrap_or(ColorValue::TRANSPARENT),
            });
        }

        // First build only: expand everything when the list is short,
        // collapse everything when it is long. Later rebuilds preserve
        // whatever the user did.
        if !self.expand_decided {
            let total: usize = buckets.iter().map(Vec::len).sum();
            let expand = total <= self.config.expand_threshold;
            for (idx, bucket) in buckets.iter().enumerate() {
                if !bucket.is_empty() {
                    self.expanded[idx] = CollapsibleState::new(expand);
                }
            }
            self.expand_decided = true;
            log::debug!(
                "📋 Initial build: {} rows, sections {}",
                total,
                if expand { "expanded" } else { "collapsed" }
            );
        }

        // Sections in fixed category order; empty categories are hidden.
        let mut sections = Vec::new();
        for category in Category::all() {
            let idx = category.index();
            let rows = std::mem::take(&mut buckets[idx]);
            if rows.is_empty() {
                continue;
            }
            sections.push(SectionView {
                category: *category,
                label: category.name(),
                expanded: self.expanded[idx].is_expanded,
                aggregate_checked: self.counts[idx] > 0,
                rows,
            });
        }
        self.view = ViewModel { sections };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EntityInfo, SpawnGroup, StaticCatalog};
    use crate::rainbow::SharedRainbowRegistry;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    const COW: EntityId = EntityId(1);
    const PIG: EntityId = EntityId(2);
    const ZOMBIE: EntityId = EntityId(3);
    const SQUID: EntityId = EntityId(4);
    const BAT: EntityId = EntityId(5);

    /// Ranker with a fixed score per display name; unlisted names score 0.
    struct TableRanker {
        scores: HashMap<&'static str, u32>,
    }

    impl TableRanker {
        fn new(scores: &[(&'static str, u32)]) -> Self {
            Self {
                scores: scores.iter().copied().collect(),
            }
        }
    }

    impl SearchRanker for TableRanker {
        fn score(&self, name: &str, _query: &str) -> u32 {
            self.scores.get(name).copied().unwrap_or(0)
        }
    }

    fn small_catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            EntityInfo::new(1, "Cow", SpawnGroup::Creature),
            EntityInfo::new(2, "Pig", SpawnGroup::Creature),
            EntityInfo::new(3, "Zombie", SpawnGroup::Monster),
            EntityInfo::new(4, "Squid", SpawnGroup::WaterCreature),
            EntityInfo::new(5, "Bat", SpawnGroup::Ambient),
        ])
    }

    fn screen_with(
        ranker: TableRanker,
    ) -> EntityListScreen<StaticCatalog, TableRanker> {
        EntityListScreen::new(small_catalog(), ranker, SelectionStore::new())
            .expect("catalog and selection agree")
    }

    fn screen() -> EntityListScreen<StaticCatalog, TableRanker> {
        screen_with(TableRanker::new(&[]))
    }

    /// Hook that counts invocations.
    fn counting_hook() -> (ChangeHook, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (Box::new(move || handle.set(handle.get() + 1)), count)
    }

    #[test]
    fn test_end_to_end_scenario() {
        // Catalog {Cow, Pig: Animals; Zombie: Monsters; Squid: Water
        // Animals}, all inactive.
        let mut screen = screen_with(TableRanker::new(&[("Cow", 2)]));

        screen.update(Message::RowToggled(COW, true)).unwrap();
        assert_eq!(screen.active_count(Category::Animals), 1);
        assert!(screen.view().section(Category::Animals).unwrap().aggregate_checked);

        screen.update(Message::RowToggled(PIG, true)).unwrap();
        assert_eq!(screen.active_count(Category::Animals), 2);
        assert!(screen.view().section(Category::Animals).unwrap().aggregate_checked);

        screen.update(Message::RowToggled(COW, false)).unwrap();
        assert_eq!(screen.active_count(Category::Animals), 1);
        assert!(screen.view().section(Category::Animals).unwrap().aggregate_checked);

        screen.update(Message::RowToggled(PIG, false)).unwrap();
        assert_eq!(screen.active_count(Category::Animals), 0);
        assert!(!screen.view().section(Category::Animals).unwrap().aggregate_checked);

        // Filter "co" scores Cow=2, everything else 0: only the Animals
        // section remains, containing only Cow.
        screen.update(Message::FilterChanged("co".into())).unwrap();
        let view = screen.view();
        assert_eq!(view.sections.len(), 1);
        let animals = &view.sections[0];
        assert_eq!(animals.category, Category::Animals);
        assert_eq!(animals.rows.len(), 1);
        assert_eq!(animals.rows[0].name, "Cow");
    }

    #[test]
    fn test_aggregate_checked_iff_any_active() {
        let mut screen = screen();
        let ops = [
            (COW, true),
            (SQUID, true),
            (COW, false),
            (PIG, true),
            (SQUID, false),
            (PIG, false),
            (ZOMBIE, true),
        ];

        for (id, checked) in ops {
            screen.update(Message::RowToggled(id, checked)).unwrap();
            for category in Category::all() {
                let expected = screen.active_count(*category) > 0;
                let shown = screen
                    .view()
                    .section(*category)
                    .map(|s| s.aggregate_checked)
                    .unwrap_or(false);
                assert_eq!(shown, expected, "category {:?}", category);
            }
        }
    }

    #[test]
    fn test_deactivate_is_idempotent_and_never_underflows() {
        let mut screen = screen();
        screen.update(Message::RowToggled(COW, true)).unwrap();
        screen.update(Message::RowToggled(COW, false)).unwrap();
        screen.update(Message::RowToggled(COW, false)).unwrap();
        screen.update(Message::RowToggled(PIG, false)).unwrap();

        assert_eq!(screen.active_count(Category::Animals), 0);
        assert!(!screen.view().section(Category::Animals).unwrap().aggregate_checked);
    }

    #[test]
    fn test_double_check_does_not_drift_counts() {
        let mut screen = screen();
        screen.update(Message::RowToggled(COW, true)).unwrap();
        screen.update(Message::RowToggled(COW, true)).unwrap();
        screen.update(Message::RowToggled(COW, false)).unwrap();

        assert_eq!(screen.active_count(Category::Animals), 0);
        assert!(!screen.view().section(Category::Animals).unwrap().aggregate_checked);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut screen = screen_with(TableRanker::new(&[("Cow", 2), ("Pig", 1)]));
        screen.update(Message::RowToggled(COW, true)).unwrap();

        screen.update(Message::FilterChanged("p".into())).unwrap();
        let first = screen.view().clone();
        screen.update(Message::FilterChanged("p".into())).unwrap();
        assert_eq!(first, *screen.view());
    }

    #[test]
    fn test_filter_ranking_order_and_exclusion() {
        // Pig outscores Cow; Zombie, Squid and Bat score 0 and disappear.
        let mut screen = screen_with(TableRanker::new(&[("Cow", 1), ("Pig", 5)]));
        screen.update(Message::FilterChanged("x".into())).unwrap();

        let view = screen.view();
        assert_eq!(view.sections.len(), 1);
        let names: Vec<&str> = view.sections[0].rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pig", "Cow"]);
    }

    #[test]
    fn test_filter_tie_break_is_catalog_order() {
        let mut screen = screen_with(TableRanker::new(&[("Cow", 3), ("Pig", 3)]));
        screen.update(Message::FilterChanged("x".into())).unwrap();

        let names: Vec<&str> = screen.view().sections[0]
            .rows
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Cow", "Pig"]);
    }

    #[test]
    fn test_empty_categories_are_hidden() {
        let screen = screen();
        // Unfiltered: every category with entities shows, none are empty.
        for section in &screen.view().sections {
            assert!(!section.rows.is_empty());
        }
        // Misc has no entities in the test catalog.
        assert!(screen.view().section(Category::Misc).is_none());
    }

    #[test]
    fn test_bulk_check_activates_whole_category_only() {
        let (hook, fired) = counting_hook();
        let mut screen = EntityListScreen::new(
            small_catalog(),
            TableRanker::new(&[]),
            SelectionStore::new(),
        )
        .unwrap()
        .with_change_hook(hook);

        screen
            .update(Message::AggregateToggled(Category::Animals, true))
            .unwrap();

        assert_eq!(fired.get(), 1);
        assert!(screen.selection().is_active(COW));
        assert!(screen.selection().is_active(PIG));
        assert!(!screen.selection().is_active(ZOMBIE));
        assert!(!screen.selection().is_active(SQUID));
        assert_eq!(screen.active_count(Category::Animals), 2);
        assert!(screen.view().section(Category::Animals).unwrap().aggregate_checked);
    }

    #[test]
    fn test_bulk_uncheck_noop_fires_nothing() {
        let (hook, fired) = counting_hook();
        let mut screen = EntityListScreen::new(
            small_catalog(),
            TableRanker::new(&[]),
            SelectionStore::new(),
        )
        .unwrap()
        .with_change_hook(hook);

        // Nothing active: unchecking changes nothing, so no hook.
        screen
            .update(Message::AggregateToggled(Category::Animals, false))
            .unwrap();
        assert_eq!(fired.get(), 0);

        // A real bulk deselect fires exactly once for the whole batch.
        screen
            .update(Message::AggregateToggled(Category::Animals, true))
            .unwrap();
        screen
            .update(Message::AggregateToggled(Category::Animals, false))
            .unwrap();
        assert_eq!(fired.get(), 2);
        assert_eq!(screen.active_count(Category::Animals), 0);
    }

    #[test]
    fn test_bulk_toggle_respects_filter() {
        // Only Cow is visible; bulk check must not touch hidden Pig.
        let mut screen = screen_with(TableRanker::new(&[("Cow", 2)]));
        screen.update(Message::FilterChanged("co".into())).unwrap();
        screen
            .update(Message::AggregateToggled(Category::Animals, true))
            .unwrap();

        assert!(screen.selection().is_active(COW));
        assert!(!screen.selection().is_active(PIG));
    }

    #[test]
    fn test_row_toggle_fires_hook_without_rebuild() {
        let (hook, fired) = counting_hook();
        let mut screen = EntityListScreen::new(
            small_catalog(),
            TableRanker::new(&[]),
            SelectionStore::new(),
        )
        .unwrap()
        .with_change_hook(hook);

        screen.update(Message::RowToggled(COW, true)).unwrap();
        assert_eq!(fired.get(), 1);
        // Retained view was updated in place.
        assert!(screen.view().row(COW).unwrap().checked);
        assert!(screen.view().section(Category::Animals).unwrap().aggregate_checked);

        // Unchecking an inactive row is a no-op store-wise but still a
        // click the owner hears about.
        screen.update(Message::RowToggled(PIG, false)).unwrap();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_first_build_expands_small_lists() {
        let screen = screen();
        for category in [Category::Animals, Category::WaterAnimals, Category::Monsters] {
            assert!(screen.is_expanded(category), "category {:?}", category);
            assert!(screen.view().section(category).unwrap().expanded);
        }
    }

    #[test]
    fn test_first_build_collapses_long_lists() {
        let entities = (0..30)
            .map(|i| EntityInfo::new(i, format!("Mob {i}"), SpawnGroup::Monster))
            .collect();
        let screen = EntityListScreen::new(
            StaticCatalog::new(entities),
            TableRanker::new(&[]),
            SelectionStore::new(),
        )
        .unwrap();

        assert!(!screen.is_expanded(Category::Monsters));
        assert!(!screen.view().section(Category::Monsters).unwrap().expanded);
    }

    #[test]
    fn test_expand_threshold_is_configurable() {
        let screen = screen().with_config(ScreenConfig {
            expand_threshold: 2,
            ..ScreenConfig::default()
        });
        // 5 visible rows > threshold 2: collapsed.
        assert!(!screen.is_expanded(Category::Animals));
    }

    #[test]
    fn test_expand_state_preserved_across_rebuilds() {
        let mut screen = screen_with(TableRanker::new(&[("Cow", 2)]));
        assert!(screen.is_expanded(Category::Animals));

        screen
            .update(Message::SectionToggled(
                Category::Animals,
                CollapsibleState::collapsed(),
            ))
            .unwrap();
        assert!(!screen.view().section(Category::Animals).unwrap().expanded);

        // Typing in the filter rebuilds; the collapse must survive.
        screen.update(Message::FilterChanged("co".into())).unwrap();
        assert!(!screen.view().section(Category::Animals).unwrap().expanded);

        screen.update(Message::FilterChanged(String::new())).unwrap();
        assert!(!screen.view().section(Category::Animals).unwrap().expanded);
        assert!(screen.is_expanded(Category::Monsters));
    }

    #[test]
    fn test_edit_creates_default_white_color() {
        let mut screen = screen();
        assert_eq!(screen.view().row(COW).unwrap().swatch, ColorValue::TRANSPARENT);

        screen.update(Message::EditColor(COW)).unwrap();

        let request = screen.take_picker_request().expect("picker requested");
        assert_eq!(request.id, COW);
        assert_eq!(request.color, ColorValue::WHITE);
        // The freshly created default is visible in the swatch already.
        assert_eq!(screen.view().row(COW).unwrap().swatch, ColorValue::WHITE);
        assert!(screen.take_picker_request().is_none());
    }

    #[test]
    fn test_edit_preserves_existing_color() {
        let color = ColorValue::rgba(10, 20, 30, 255);
        let mut screen = screen();
        screen.update(Message::ColorPicked(COW, color)).unwrap();
        screen.update(Message::EditColor(COW)).unwrap();

        assert_eq!(screen.take_picker_request().unwrap().color, color);
    }

    #[test]
    fn test_color_picked_updates_swatch_and_notifies() {
        let (hook, fired) = counting_hook();
        let mut screen = EntityListScreen::new(
            small_catalog(),
            TableRanker::new(&[]),
            SelectionStore::new(),
        )
        .unwrap()
        .with_change_hook(hook);

        let color = ColorValue::rgba(200, 100, 50, 255);
        screen.update(Message::ColorPicked(BAT, color)).unwrap();

        assert_eq!(fired.get(), 1);
        assert_eq!(screen.view().row(BAT).unwrap().swatch, color);
        // Color alone does not activate the entity.
        assert!(!screen.selection().is_active(BAT));
    }

    #[test]
    fn test_rainbow_color_is_registered() {
        let registry = SharedRainbowRegistry::new();
        let mut screen = screen().with_rainbow_registry(Box::new(registry.clone()));

        screen
            .update(Message::ColorPicked(COW, ColorValue::rgba(1, 1, 1, 255)))
            .unwrap();
        assert!(registry.is_empty());

        let rainbow = ColorValue::rgba(255, 0, 0, 255).with_rainbow();
        screen.update(Message::ColorPicked(COW, rainbow)).unwrap();
        assert_eq!(registry.colors(), vec![rainbow]);
    }

    #[test]
    fn test_reset_clears_row_completely() {
        let mut screen = screen();
        screen.update(Message::RowToggled(COW, true)).unwrap();
        screen
            .update(Message::ColorPicked(COW, ColorValue::rgba(9, 9, 9, 255)))
            .unwrap();

        screen.update(Message::ResetEntity(COW)).unwrap();

        let row = screen.view().row(COW).unwrap();
        assert!(!row.checked);
        assert_eq!(row.swatch, ColorValue::TRANSPARENT);
        assert_eq!(screen.active_count(Category::Animals), 0);
        assert!(screen.selection().is_empty());
    }

    #[test]
    fn test_unknown_entity_fails_fast() {
        let mut screen = screen();
        let bogus = EntityId(999);

        assert_eq!(
            screen.update(Message::RowToggled(bogus, true)),
            Err(ScreenError::UnknownEntity(bogus))
        );
        assert_eq!(
            screen.update(Message::ResetEntity(bogus)),
            Err(ScreenError::UnknownEntity(bogus))
        );
    }

    #[test]
    fn test_new_rejects_selection_outside_catalog() {
        let mut selection = SelectionStore::new();
        selection.activate(EntityId(999));

        let result = EntityListScreen::new(small_catalog(), TableRanker::new(&[]), selection);
        assert_eq!(result.err(), Some(ScreenError::UnknownEntity(EntityId(999))));
    }

    #[test]
    fn test_selection_survives_filter_round_trip() {
        let mut screen = screen_with(TableRanker::new(&[("Zombie", 4)]));
        screen.update(Message::RowToggled(COW, true)).unwrap();

        // Cow vanishes from view while filtered, but stays selected.
        screen.update(Message::FilterChanged("zom".into())).unwrap();
        assert!(screen.view().row(COW).is_none());
        assert!(screen.selection().is_active(COW));

        screen.update(Message::FilterChanged(String::new())).unwrap();
        let row = screen.view().row(COW).unwrap();
        assert!(row.checked);
        assert!(screen.view().section(Category::Animals).unwrap().aggregate_checked);
    }

    #[test]
    fn test_filter_text_is_trimmed() {
        let mut screen = screen();
        screen
            .update(Message::FilterChanged("  cow  ".into()))
            .unwrap();
        assert_eq!(screen.filter_text(), "cow");
    }

    #[test]
    fn test_into_selection_hands_back_the_store() {
        let mut screen = screen();
        screen.update(Message::RowToggled(SQUID, true)).unwrap();

        let store = screen.into_selection();
        assert!(store.is_active(SQUID));
    }
}
