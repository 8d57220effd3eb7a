use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type ItemId = i64;

/// Whole contents of the item store in insertion order. Serializes as a JSON
/// object keyed by the decimal id.
pub type ItemSnapshot = IndexMap<ItemId, String>;

/// Priced item, validated from the request body and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub item_id: ItemId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsChanged {
    pub msg: String,
    pub db: ItemSnapshot,
}

impl ItemsChanged {
    pub fn added(db: ItemSnapshot) -> Self {
        Self {
            msg: "Item added".into(),
            db,
        }
    }

    pub fn updated(db: ItemSnapshot) -> Self {
        Self {
            msg: "Item updated".into(),
            db,
        }
    }

    pub fn deleted(db: ItemSnapshot) -> Self {
        Self {
            msg: "Item deleted".into(),
            db,
        }
    }
}
