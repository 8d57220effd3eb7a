use crate::modules::items::adapters::outbound::item_store::{ItemStore, ItemStoreError};
use crate::modules::items::core::item::{ItemId, ItemSnapshot};
use async_trait::async_trait;
use indexmap::map::Entry;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryItemStore {
    items: Mutex<ItemSnapshot>,
    is_offline: bool,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), ItemStoreError> {
        if self.is_offline {
            return Err(ItemStoreError::Backend("Item store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn insert(&self, id: ItemId, name: String) -> Result<ItemSnapshot, ItemStoreError> {
        self.ensure_online()?;
        let mut items = self.items.lock().await;
        match items.entry(id) {
            Entry::Occupied(_) => Err(ItemStoreError::AlreadyExists(id)),
            Entry::Vacant(slot) => {
                slot.insert(name);
                Ok(items.clone())
            }
        }
    }

    async fn get(&self, id: ItemId) -> Result<String, ItemStoreError> {
        self.ensure_online()?;
        self.items
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(ItemStoreError::NotFound(id))
    }

    async fn update(&self, id: ItemId, name: String) -> Result<ItemSnapshot, ItemStoreError> {
        self.ensure_online()?;
        let mut items = self.items.lock().await;
        let slot = items.get_mut(&id).ok_or(ItemStoreError::NotFound(id))?;
        *slot = name;
        Ok(items.clone())
    }

    async fn remove(&self, id: ItemId) -> Result<ItemSnapshot, ItemStoreError> {
        self.ensure_online()?;
        let mut items = self.items.lock().await;
        items.shift_remove(&id).ok_or(ItemStoreError::NotFound(id))?;
        Ok(items.clone())
    }
}
