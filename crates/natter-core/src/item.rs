//! The fixed held-item catalog.

/// How an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    /// Used up when used.
    Consumable,
    /// Worn or wielded.
    Equippable,
    /// Thrown at something.
    Throwable,
}

/// An entry in the held-item catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    /// Stable identifier.
    pub id: &'static str,
    /// Name used in dialogue text.
    pub name: &'static str,
    /// How the item is used.
    pub category: ItemCategory,
}

/// Items a character may be holding when an encounter starts.
pub static CATALOG: [Item; 3] = [
    Item {
        id: "coffee",
        name: "coffee",
        category: ItemCategory::Consumable,
    },
    Item {
        id: "sword",
        name: "sword",
        category: ItemCategory::Equippable,
    },
    Item {
        id: "water_balloon",
        name: "water balloon",
        category: ItemCategory::Throwable,
    },
];

impl Item {
    /// Look up a catalog item by id.
    pub fn by_id(id: &str) -> Option<&'static Item> {
        CATALOG.iter().find(|item| item.id == id)
    }
}
