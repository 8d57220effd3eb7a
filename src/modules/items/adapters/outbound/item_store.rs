use crate::modules::items::core::item::{ItemId, ItemSnapshot};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemStoreError {
    #[error("Item already exists")]
    AlreadyExists(ItemId),

    #[error("Item not found")]
    NotFound(ItemId),

    #[error("item store backend error: {0}")]
    Backend(String),
}

/// Key/value store of item names. Mutations return a snapshot of the whole
/// store taken atomically with the change.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn insert(&self, id: ItemId, name: String) -> Result<ItemSnapshot, ItemStoreError>;

    async fn get(&self, id: ItemId) -> Result<String, ItemStoreError>;

    async fn update(&self, id: ItemId, name: String) -> Result<ItemSnapshot, ItemStoreError>;

    async fn remove(&self, id: ItemId) -> Result<ItemSnapshot, ItemStoreError>;
}
