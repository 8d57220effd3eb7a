use std::time::Duration;

use crate::shell::config::PlaygroundConfig;
use crate::shell::state::AppState;

pub const TEST_TOKEN: &str = "secret123";

pub fn make_test_config() -> PlaygroundConfig {
    PlaygroundConfig {
        greeting_delay: Duration::ZERO,
        ..PlaygroundConfig::default()
    }
}

pub fn make_test_state() -> AppState {
    AppState::from_config(&make_test_config())
}
