//! Notification and order-submission sinks
//!
//! The cart manager reports user-facing feedback through a
//! [`NotificationSink`] and hands completed orders to an [`OrderSink`].
//! Neither has a real transport: notifications are queued for the client to
//! render and orders are logged and acknowledged.

use crate::cart::models::{CartLine, ContactInfo};
use crate::catalog::info::qualifies_for_free_delivery;
use crate::error::StorefrontError;
use serde::Serialize;
use std::collections::VecDeque;
use uuid::Uuid;

// =============================================================================
// Notifications
// =============================================================================

/// A short toast-style message
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Fire-and-forget receiver of user feedback
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// In-memory queue of notifications waiting to be shown
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every pending notification, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }
}

// =============================================================================
// Order submission
// =============================================================================

/// A completed order handed off for placement
#[derive(Debug, Clone, Serialize)]
pub struct OrderSubmission {
    pub contact: ContactInfo,
    pub lines: Vec<CartLine>,
    pub total: u64,
}

/// Acknowledgement returned by an [`OrderSink`]
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: String,
    pub total: u64,
    pub free_delivery: bool,
}

/// One-shot receiver of completed orders
pub trait OrderSink: Send + Sync {
    fn accept(&self, order: &OrderSubmission) -> Result<OrderReceipt, StorefrontError>;
}

/// Accepts every order and records it in the log
#[derive(Debug, Default)]
pub struct LoggingOrderSink;

impl OrderSink for LoggingOrderSink {
    fn accept(&self, order: &OrderSubmission) -> Result<OrderReceipt, StorefrontError> {
        let order_id = Uuid::new_v4().simple().to_string();
        let free_delivery = qualifies_for_free_delivery(order.total);

        tracing::info!(
            order_id = %order_id,
            customer = %order.contact.name,
            phone = %order.contact.phone,
            total = order.total,
            free_delivery,
            "Order placed: {}",
            crate::cart::helpers::format_item_summary(&order.lines)
        );

        Ok(OrderReceipt {
            order_id,
            total: order.total,
            free_delivery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drains_in_order() {
        let mut queue = NotificationQueue::new();
        queue.notify(Notification::new("a", "1"));
        queue.notify(Notification::new("b", "2"));
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0].title, "a");
        assert_eq!(drained[1].title, "b");
        assert!(queue.is_empty());
    }

    #[test]
    fn logging_sink_acknowledges_order() {
        let order = OrderSubmission {
            contact: ContactInfo {
                name: "Иван Иванов".into(),
                phone: "+7 (999) 123-45-67".into(),
                address: "ул. Ленина, 7".into(),
            },
            lines: Vec::new(),
            total: 1200,
        };

        let receipt = LoggingOrderSink.accept(&order).unwrap();
        assert_eq!(receipt.total, 1200);
        assert!(receipt.free_delivery);
        assert_eq!(receipt.order_id.len(), 32);
    }
}
