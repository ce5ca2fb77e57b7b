//! Canteen Storefront Library
//!
//! This library provides the menu catalog, the per-session cart manager and
//! the HTTP surface of the Столовая №7 storefront.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod sinks;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
