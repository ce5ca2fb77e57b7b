//! Shopping Cart Domain Models
//!
//! This module contains the cart aggregate and the request/response shapes
//! used by the cart endpoints.

use crate::catalog::{CategoryFilter, MenuItem};
use crate::sinks::{Notification, OrderReceipt};
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A menu item together with the quantity ordered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,

    /// Always at least 1; a line that would reach 0 is removed instead
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> u32 {
        self.item.id
    }

    /// `price × quantity` for this line
    pub fn subtotal(&self) -> u64 {
        u64::from(self.item.price) * u64::from(self.quantity)
    }
}

/// Ordered collection of cart lines, at most one per item id.
///
/// The total is never stored; every read recomputes it from the lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities over all lines
    pub fn unit_count(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(u64::from(l.quantity)))
    }

    /// Σ price × quantity over the current lines; 0 for an empty cart.
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.subtotal()))
    }

    /// Increments the matching line or appends a new one with quantity 1
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id() == item.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::new(item.clone()));
        }
    }

    /// Deletes the line with `id`; absent ids are ignored
    pub fn remove(&mut self, id: u32) {
        self.lines.retain(|l| l.id() != id);
    }

    /// Replaces the quantity of an existing line. `0` removes the line and
    /// an absent id is left alone; no line is ever created here.
    pub fn set_quantity(&mut self, id: u32, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id() == id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// State of the cart-review panel
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CartView {
    Closed,
    OpenEmpty,
    OpenWithItems,
}

/// Customer details required to place an order.
///
/// Missing fields deserialize as empty strings so that validation reports
/// which one is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub address: String,
}

impl ContactInfo {
    /// Name of the first blank required field, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

// =============================================================================
// Request / Response Models
// =============================================================================

/// Input for POST /cart/items
#[derive(Debug, Deserialize)]
pub struct AddItemInput {
    /// Catalog id of the item to add
    pub id: u32,
}

/// Input for PUT /cart/items/:id
#[derive(Debug, Deserialize)]
pub struct SetQuantityInput {
    /// Requested quantity; zero or negative removes the line
    pub quantity: i64,
}

/// Query for GET /menu
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
}

/// Snapshot of a session's cart
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub line_count: usize,
    pub unit_count: u64,
    pub view: CartView,
    pub notifications: Vec<Notification>,
}

/// Menu visible under the session's category filter
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub category: CategoryFilter,
    pub items: Vec<MenuItem>,
}

/// Response for POST /order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub status: String,
    pub receipt: OrderReceipt,
    pub cart: CartResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn line_serializes_flat() {
        let catalog = Catalog::builtin();
        let line = CartLine::new(catalog.get(10).unwrap().clone());
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["id"], 10);
        assert_eq!(json["price"], 60);
        assert_eq!(json["quantity"], 1);
    }

    #[test]
    fn missing_field_reports_first_blank() {
        let mut contact = ContactInfo {
            name: "Иван".into(),
            phone: "   ".into(),
            address: String::new(),
        };
        assert_eq!(contact.missing_field(), Some("phone"));

        contact.phone = "+7 999".into();
        assert_eq!(contact.missing_field(), Some("address"));

        contact.address = "ул. Ленина".into();
        assert_eq!(contact.missing_field(), None);
    }

    #[test]
    fn subtotal_does_not_overflow() {
        let mut item = Catalog::builtin().get(1).unwrap().clone();
        item.price = u32::MAX;
        let line = CartLine {
            item,
            quantity: u32::MAX,
        };
        assert_eq!(line.subtotal(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn total_saturates_on_huge_lines() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        for id in [1, 2] {
            let mut item = catalog.get(id).unwrap().clone();
            item.price = u32::MAX;
            cart.add(&item);
            cart.set_quantity(id, u32::MAX);
        }

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total(), u64::MAX);
        assert_eq!(cart.unit_count(), 2 * u64::from(u32::MAX));
    }
}
