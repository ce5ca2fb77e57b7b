//! Shopping Cart Helpers
//!
//! This module contains session resolution and formatting helpers used by the
//! cart handlers.

use super::models::{CartLine, CartResponse};
use super::state::Session;
use axum::http::{header, HeaderMap, HeaderValue};
use uuid::Uuid;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "cart_session";

/// Returns the session id from the `cart_session` cookie, or a fresh UUID.
///
/// The boolean is `true` when a new session id was minted and the response
/// must set the cookie.
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string());

    match existing {
        Some(id) => (id, false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}

/// `Set-Cookie` value binding the browser to `session_id`
pub fn session_cookie(session_id: &str) -> Option<HeaderValue> {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly")
        .parse()
        .ok()
}

/// Snapshot of the session's cart, draining its pending notifications
pub fn cart_response(session: &mut Session) -> CartResponse {
    let cart = session.cart();
    let (lines, total, line_count, unit_count) = (
        cart.lines().to_vec(),
        cart.total(),
        cart.line_count(),
        cart.unit_count(),
    );

    CartResponse {
        lines,
        total,
        line_count,
        unit_count,
        view: session.view(),
        notifications: session.notifier_mut().drain(),
    }
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Борщ с говядиной, 1x Оливье"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.item.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn reads_session_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; cart_session=abc123; other=1"),
        );

        assert_eq!(resolve_session_id(&headers), ("abc123".to_string(), false));
    }

    #[test]
    fn mints_session_when_cookie_missing() {
        let (id, is_new) = resolve_session_id(&HeaderMap::new());
        assert!(is_new);
        assert_eq!(id.len(), 32);
    }

    #[test]
    fn cookie_value_is_http_only() {
        let cookie = session_cookie("abc").unwrap();
        assert_eq!(cookie, "cart_session=abc; Path=/; HttpOnly");
    }

    #[test]
    fn summary_lists_quantities() {
        let catalog = Catalog::builtin();
        let lines = vec![
            CartLine {
                item: catalog.get(1).unwrap().clone(),
                quantity: 2,
            },
            CartLine::new(catalog.get(8).unwrap().clone()),
        ];
        assert_eq!(
            format_item_summary(&lines),
            "2x Борщ с говядиной, 1x Оливье"
        );
    }

    #[test]
    fn cart_response_drains_notifications() {
        let catalog = Catalog::builtin();
        let mut session = Session::default();
        session.add_item(catalog.get(1).unwrap());

        let first = cart_response(&mut session);
        assert_eq!(first.total, 180);
        assert_eq!(first.notifications.len(), 1);

        let second = cart_response(&mut session);
        assert!(second.notifications.is_empty());
    }
}
