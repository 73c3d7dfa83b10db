//! Application state for the Net Pay Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded scheme configuration. It is immutable once the server
/// starts, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded scheme configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::new(ConfigLoader::load("./config/hu_2025").unwrap());
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
