//! Venue information displayed next to the menu

use serde::Serialize;

/// Orders totalling at least this amount are delivered for free
pub const FREE_DELIVERY_THRESHOLD: u64 = 1000;

/// Static details about the cafeteria
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub opening_hours: &'static str,
    pub free_delivery_threshold: u64,
}

impl StorefrontInfo {
    pub const fn canteen() -> Self {
        Self {
            name: "Столовая №7",
            tagline: "Блюда, как из детства",
            address: "г. Москва, ул. Ленина, д. 7",
            phone: "+7 (495) 123-45-67",
            opening_hours: "Ежедневно с 9:00 до 21:00",
            free_delivery_threshold: FREE_DELIVERY_THRESHOLD,
        }
    }
}

/// Whether an order of `total` qualifies for free delivery
pub fn qualifies_for_free_delivery(total: u64) -> bool {
    total >= FREE_DELIVERY_THRESHOLD
}
