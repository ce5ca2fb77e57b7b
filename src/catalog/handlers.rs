//! REST API handlers for static storefront data

use super::info::StorefrontInfo;
use crate::cart::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// Creates routes for catalog and venue information
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/storefront", get(storefront))
        .route("/categories", get(categories))
}

#[derive(Serialize)]
struct CategoriesResponse {
    categories: Vec<String>,
}

/// Endpoint: GET /storefront
async fn storefront() -> Json<StorefrontInfo> {
    Json(StorefrontInfo::canteen())
}

/// Endpoint: GET /categories
/// Fixed categories in menu order, without the "all" sentinel.
async fn categories(State(state): State<SharedState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state
            .catalog
            .categories()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}
