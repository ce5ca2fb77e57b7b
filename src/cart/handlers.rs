//! REST API handlers for shopping cart operations
//!
//! Every handler resolves the caller's session from the `cart_session`
//! cookie, runs one cart manager operation and answers with a cart snapshot.
//! A cookie is set whenever a new session is minted.

use super::{helpers::*, models::*, state::SharedState};
use crate::error::{AppError, StorefrontError};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/menu", get(menu))
        .route("/cart", get(show_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/:id", put(set_quantity).delete(remove_item))
        .route("/cart/open", post(open_cart))
        .route("/cart/close", post(close_cart))
        .route("/cart/toggle", post(toggle_cart))
        .route("/order", post(submit_order))
}

/// Serializes `body` and attaches the session cookie for new sessions
fn respond<T: Serialize>(body: T, session_id: &str, is_new_session: bool) -> Response {
    let mut response = Json(body).into_response();

    if is_new_session {
        if let Some(cookie) = session_cookie(session_id) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }

    response
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// Endpoint: GET /menu
/// Lists the items visible under the session's category, selecting
/// `?category=` first when given.
async fn menu(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<MenuQuery>,
) -> Result<Response, AppError> {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let catalog = &state.catalog;

    let body = state.with_session(&session_id, |session| {
        if let Some(category) = query.category.as_deref() {
            session.select_category(catalog, category)?;
            tracing::debug!("Session {} selected category {}", session_id, category);
        }

        Ok::<_, StorefrontError>(MenuResponse {
            category: session.selected_category().clone(),
            items: session.visible_items(catalog).into_iter().cloned().collect(),
        })
    })?;

    Ok(respond(body, &session_id, is_new_session))
}

/// Endpoint: GET /cart
async fn show_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let body = state.with_session(&session_id, cart_response);
    respond(body, &session_id, is_new_session)
}

/// Endpoint: POST /cart/items
/// Adds one unit of a catalog item to the cart.
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<AddItemInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let input = json_body(body)?;
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let item = state
        .catalog
        .get(input.id)
        .ok_or(StorefrontError::UnknownItem(input.id))?;

    let body = state.with_session(&session_id, |session| {
        session.add_item(item);
        cart_response(session)
    });
    tracing::info!("Session {} added {} ({})", session_id, item.name, item.id);

    Ok(respond(body, &session_id, is_new_session))
}

/// Endpoint: PUT /cart/items/:id
/// Replaces the quantity of an existing line; zero or below removes it.
async fn set_quantity(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<u32>,
    body: Result<Json<SetQuantityInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let input = json_body(body)?;
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let body = state.with_session(&session_id, |session| {
        session.set_quantity(id, input.quantity);
        cart_response(session)
    });

    Ok(respond(body, &session_id, is_new_session))
}

/// Endpoint: DELETE /cart/items/:id
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<u32>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let body = state.with_session(&session_id, |session| {
        session.remove_item(id);
        cart_response(session)
    });

    respond(body, &session_id, is_new_session)
}

/// Endpoint: POST /cart/open
async fn open_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let body = state.with_session(&session_id, |session| {
        session.open_cart();
        cart_response(session)
    });

    respond(body, &session_id, is_new_session)
}

/// Endpoint: POST /cart/close
async fn close_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let body = state.with_session(&session_id, |session| {
        session.close_cart();
        cart_response(session)
    });

    respond(body, &session_id, is_new_session)
}

/// Endpoint: POST /cart/toggle
async fn toggle_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let body = state.with_session(&session_id, |session| {
        session.toggle_cart();
        cart_response(session)
    });

    respond(body, &session_id, is_new_session)
}

/// Endpoint: POST /order
/// Places the cart as an order and empties it.
async fn submit_order(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<ContactInfo>, JsonRejection>,
) -> Result<Response, AppError> {
    let contact = json_body(body)?;
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let body = state.with_session(&session_id, |session| {
        let receipt = session.submit_order(contact, state.order_sink.as_ref())?;
        Ok::<_, StorefrontError>(OrderResponse {
            status: "ordered".to_string(),
            receipt,
            cart: cart_response(session),
        })
    })?;
    tracing::info!(
        "Session {} placed order {} for {}",
        session_id,
        body.receipt.order_id,
        body.receipt.total
    );

    Ok(respond(body, &session_id, is_new_session))
}
