// src/application/navigation.rs
//
// Outgoing navigation intents
//
// RULES:
// - Controllers never render; they only ask the presentation layer to move
// - The transport is whatever implements Navigator

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;
use serde::{Deserialize, Serialize};

/// Screen changes the core asks the presentation layer to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "movie_id", rename_all = "snake_case")]
pub enum NavigationIntent {
    ShowDetail(String),
    ShowAddFlow,
    Back,
}

/// Presentation-side receiver of navigation intents
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}

/// Navigator that only records what was asked of it.
/// Used by the headless binary and by integration tests.
#[derive(Debug, Default, Clone)]
pub struct NavigationLog {
    intents: Arc<RwLock<Vec<NavigationIntent>>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intents(&self) -> Vec<NavigationIntent> {
        self.intents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<NavigationIntent> {
        self.intents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, intent: NavigationIntent) {
        debug!("[NAV] {:?}", intent);
        self.intents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_log_records_in_order() {
        let log = NavigationLog::new();
        log.navigate(NavigationIntent::ShowAddFlow);
        log.navigate(NavigationIntent::Back);

        assert_eq!(
            log.intents(),
            vec![NavigationIntent::ShowAddFlow, NavigationIntent::Back]
        );
        assert_eq!(log.last(), Some(NavigationIntent::Back));
    }

    #[test]
    fn test_intent_serialization() {
        let json = serde_json::to_string(&NavigationIntent::ShowDetail("7".to_string())).unwrap();
        assert_eq!(json, r#"{"intent":"show_detail","movie_id":"7"}"#);
    }
}
