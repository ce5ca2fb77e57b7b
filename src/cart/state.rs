//! Shopping Cart State Management
//!
//! This module manages the application state shared by the HTTP handlers:
//! the catalog, the order sink and one cart manager per browser session.

use super::manager::CartManager;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::StorefrontError;
use crate::sinks::{LoggingOrderSink, NotificationQueue, OrderSink};
use dashmap::DashMap;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// One browser session: its cart manager and pending toasts
pub type Session = CartManager<NotificationQueue>;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog and sessions
pub struct AppState {
    /// Read-only menu
    pub catalog: Arc<Catalog>,

    /// Cart managers keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, Session>,

    /// Receiver of placed orders
    pub order_sink: Arc<dyn OrderSink>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl AppState {
    /// Creates state with no sessions and a logging order sink
    pub fn new(catalog: Catalog) -> Self {
        Self::with_order_sink(catalog, Arc::new(LoggingOrderSink))
    }

    pub fn with_order_sink(catalog: Catalog, order_sink: Arc<dyn OrderSink>) -> Self {
        tracing::info!(
            "Catalog ready: {} items in {} categories",
            catalog.items().len(),
            catalog.categories().len()
        );

        Self {
            catalog: Arc::new(catalog),
            sessions: DashMap::new(),
            order_sink,
        }
    }

    /// Builds state from configuration, loading the menu file when one is set
    pub fn from_config(config: &Config) -> Result<Self, StorefrontError> {
        let catalog = match &config.menu_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::builtin(),
        };
        Ok(Self::new(catalog))
    }

    /// Runs `f` against the session's cart manager, creating it on first use.
    ///
    /// The map entry stays locked only for the duration of `f`. A session
    /// that is back in its default state afterwards (empty cart, whole menu,
    /// panel closed, no pending toasts) is dropped, so read-only requests and
    /// completed orders leave nothing behind.
    pub fn with_session<R>(&self, session_id: &str, f: impl FnOnce(&mut Session) -> R) -> R {
        let (result, idle) = {
            let mut session = self
                .sessions
                .entry(session_id.to_string())
                .or_insert_with(Session::default);
            let result = f(session.value_mut());
            (result, is_idle(session.value()))
        };

        if idle {
            self.sessions.remove_if(session_id, |_, session| is_idle(session));
        }

        result
    }
}

fn is_idle(session: &Session) -> bool {
    session.is_pristine() && session.notifier().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::models::ContactInfo;

    fn contact() -> ContactInfo {
        ContactInfo {
            name: "Иван Иванов".into(),
            phone: "+7 (999) 123-45-67".into(),
            address: "Улица, дом, квартира".into(),
        }
    }

    #[test]
    fn read_only_access_stores_nothing() {
        let state = AppState::default();

        let total = state.with_session("reader", |session| session.total());

        assert_eq!(total, 0);
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn failed_order_on_fresh_session_stores_nothing() {
        let state = AppState::default();

        let result = state.with_session("fresh", |session| {
            session.submit_order(ContactInfo::default(), state.order_sink.as_ref())
        });

        assert!(result.is_err());
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn mutated_session_is_kept_until_order_completes() {
        let state = AppState::default();
        let borscht = state.catalog.get(1).unwrap().clone();

        state.with_session("buyer", |session| {
            session.add_item(&borscht);
            session.notifier_mut().drain();
        });
        assert_eq!(state.sessions.len(), 1);

        state.with_session("buyer", |session| {
            session.submit_order(contact(), state.order_sink.as_ref()).unwrap();
            session.notifier_mut().drain();
        });
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn pending_notifications_keep_session() {
        let state = AppState::default();
        let borscht = state.catalog.get(1).unwrap().clone();

        state.with_session("buyer", |session| {
            session.add_item(&borscht);
            session.remove_item(borscht.id);
        });

        assert_eq!(state.sessions.len(), 1);
    }

    #[test]
    fn selected_category_keeps_session() {
        let state = AppState::default();
        let catalog = state.catalog.clone();

        state.with_session("browser", |session| {
            session.select_category(&catalog, "Салаты").unwrap();
        });

        assert_eq!(state.sessions.len(), 1);
    }
}
