//! Application state for the rental pricing engine API.

use std::sync::Arc;

use crate::pricing::RuleRegistry;

/// Shared application state.
///
/// Holds the rule registry, which is populated before the server starts and
/// only read by request handlers.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RuleRegistry>,
}

impl AppState {
    /// Creates a new application state around a populated registry.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the rule registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_registry() {
        let state = AppState::new(RuleRegistry::standard());
        let clone = state.clone();
        assert!(std::ptr::eq(state.registry(), clone.registry()));
    }
}
