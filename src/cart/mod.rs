//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Cart, CartLine, ContactInfo, inputs, responses)
//! - The cart manager (line operations, category filter, review panel, ordering)
//! - Session helpers and formatting
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod manager;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use manager::CartManager;
pub use models::{Cart, CartLine, CartView, ContactInfo};
pub use state::{AppState, Session, SharedState};
