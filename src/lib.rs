//! # Recipes - In-Memory Recipe Service
//!
//! A small JSON API for listing, creating, replacing and deleting recipes.
//! The collection lives in memory for the lifetime of the server.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the recipe and health endpoints
//! - [`models`] - Recipe types, request payloads and shared application state
//! - [`services`] - The recipe store
//! - [`server`] - Start/stop lifecycle around the router
//! - [`config`] - Environment-driven configuration
//! - [`utils`] - Constants and validators

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{create_recipe, delete_recipe, health_check, list_recipes, replace_recipe};
use crate::models::AppState;
use crate::utils::constant::RECIPES_PATH;

/// Creates an Axum router with all application routes bound to `state`.
///
/// # Routes
///
/// - `GET /health-check`
/// - `GET /recipes`, `POST /recipes`
/// - `PUT /recipes/{id}`, `DELETE /recipes/{id}`
pub fn app(state: Arc<AppState>) -> Router {
    let recipe_routes = Router::new()
        .route(RECIPES_PATH, get(list_recipes).post(create_recipe))
        .route(
            &format!("{RECIPES_PATH}/{{id}}"),
            put(replace_recipe).delete(delete_recipe),
        );

    Router::new()
        .route("/health-check", get(health_check))
        .merge(recipe_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
