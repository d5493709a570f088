//! Entity catalog: the read-only source of all selectable entities.
//!
//! The catalog enumerates every known entity type with its display name and
//! spawn group. The core never creates or destroys entities; it only reads
//! them from here. The raw [`SpawnGroup`] tags coming from upstream are
//! folded into the small closed [`Category`] enumeration used for display
//! and bulk toggling, so upstream taxonomy changes stay out of the core.

use serde::{Deserialize, Serialize};

/// Opaque identity of a catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Raw spawn-group tag as supplied by the upstream catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnGroup {
    Creature,
    WaterAmbient,
    WaterCreature,
    UndergroundWaterCreature,
    Axolotls,
    Monster,
    Ambient,
    Misc,
}

/// One of the fixed display categories entities are partitioned into.
///
/// The variant order is the fixed section order on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Animals,
    WaterAnimals,
    Monsters,
    Ambient,
    Misc,
}

/// Number of display categories, for per-category arrays.
pub const CATEGORY_COUNT: usize = 5;

impl Category {
    /// Get the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Animals => "Animals",
            Category::WaterAnimals => "Water Animals",
            Category::Monsters => "Monsters",
            Category::Ambient => "Ambient",
            Category::Misc => "Misc",
        }
    }

    /// Get all categories in display order.
    pub fn all() -> &'static [Category; CATEGORY_COUNT] {
        &[
            Category::Animals,
            Category::WaterAnimals,
            Category::Monsters,
            Category::Ambient,
            Category::Misc,
        ]
    }

    /// Index into per-category arrays (matches `all()` order).
    pub fn index(&self) -> usize {
        match self {
            Category::Animals => 0,
            Category::WaterAnimals => 1,
            Category::Monsters => 2,
            Category::Ambient => 3,
            Category::Misc => 4,
        }
    }

    /// Fold a raw spawn group into its display category.
    pub fn from_spawn_group(group: SpawnGroup) -> Self {
        match group {
            SpawnGroup::Creature => Category::Animals,
            SpawnGroup::WaterAmbient
            | SpawnGroup::WaterCreature
            | SpawnGroup::UndergroundWaterCreature
            | SpawnGroup::Axolotls => Category::WaterAnimals,
            SpawnGroup::Monster => Category::Monsters,
            SpawnGroup::Ambient => Category::Ambient,
            SpawnGroup::Misc => Category::Misc,
        }
    }
}

/// Immutable metadata for one catalog entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityInfo {
    /// Unique identifier for the entity type.
    pub id: EntityId,
    /// Human-readable display name.
    pub name: String,
    /// Raw spawn-group tag from the upstream catalog.
    pub spawn_group: SpawnGroup,
}

impl EntityInfo {
    pub fn new(id: u32, name: impl Into<String>, spawn_group: SpawnGroup) -> Self {
        Self {
            id: EntityId(id),
            name: name.into(),
            spawn_group,
        }
    }

    /// The display category this entity belongs to.
    pub fn category(&self) -> Category {
        Category::from_spawn_group(self.spawn_group)
    }
}

/// Read-only source of all selectable entities.
///
/// `entities()` must enumerate in a stable, deterministic order; that order
/// is the natural render order when no filter is active and the tie-break
/// when ranking filter matches.
pub trait Catalog {
    /// All entities in registry order.
    fn entities(&self) -> &[EntityInfo];

    /// Look up one entity by id. `None` means the id is not a catalog
    /// entity at all, which callers treat as a contract violation.
    fn get(&self, id: EntityId) -> Option<&EntityInfo>;
}

/// Slice-backed catalog used by the demo and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entities: Vec<EntityInfo>,
}

impl StaticCatalog {
    pub fn new(entities: Vec<EntityInfo>) -> Self {
        Self { entities }
    }

    /// Find an entity by display name (case-insensitive). Demo convenience.
    pub fn find_by_name(&self, name: &str) -> Option<&EntityInfo> {
        self.entities
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }
}

impl Catalog for StaticCatalog {
    fn entities(&self) -> &[EntityInfo] {
        &self.entities
    }

    fn get(&self, id: EntityId) -> Option<&EntityInfo> {
        self.entities.iter().find(|e| e.id == id)
    }
}
