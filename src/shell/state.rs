use axum::http::HeaderValue;
use std::sync::Arc;
use std::time::Duration;

use crate::modules::items::adapters::outbound::item_store::ItemStore;
use crate::modules::items::adapters::outbound::item_store_in_memory::InMemoryItemStore;
use crate::shared::infrastructure::password_hasher::PasswordHasher;
use crate::shared::infrastructure::password_hasher::argon2_hasher::Argon2PasswordHasher;
use crate::shell::config::{Credentials, PlaygroundConfig};

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemStore>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub api_token: Arc<str>,
    pub admin: Arc<Credentials>,
    pub greeting_delay: Duration,
    pub app_name: HeaderValue,
}

impl AppState {
    /// Wires the in-memory store and the Argon2 hasher.
    pub fn from_config(config: &PlaygroundConfig) -> Self {
        Self {
            items: Arc::new(InMemoryItemStore::new()),
            password_hasher: Arc::new(Argon2PasswordHasher::new()),
            api_token: Arc::from(config.api_token.as_str()),
            admin: Arc::new(config.admin.clone()),
            greeting_delay: config.greeting_delay,
            app_name: config.app_name.clone(),
        }
    }

    pub fn with_item_store(mut self, items: Arc<dyn ItemStore>) -> Self {
        self.items = items;
        self
    }
}
