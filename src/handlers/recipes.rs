//! # Recipe Handlers
//!
//! CRUD endpoints over the shared [`RecipeStore`](crate::services::store::RecipeStore).
//! Request bodies are deserialized into typed payloads and validated before
//! the store is touched, so a rejected request never mutates the collection.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{Span, debug, field, info, instrument, warn};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{AppState, NewRecipe, Recipe, RecipeId, RecipeUpdate};
use crate::utils::constant::RECIPES_PATH;

/// Lists every recipe in insertion order.
///
/// GET /recipes
///
/// # Returns
///
/// - `200 OK` - JSON array of recipes, possibly empty
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn list_recipes(State(state): State<Arc<AppState>>) -> Json<Vec<Recipe>> {
    let recipes = state.recipes.list();
    debug!(count = recipes.len(), "Listing recipes");
    Json(recipes)
}

/// Creates a recipe with a server-generated id.
///
/// POST /recipes NewRecipe
///
/// # Returns
///
/// - `201 Created` - The stored recipe, with `Location` pointing at it
/// - `400 Bad Request` - Malformed body or invalid fields
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewRecipe>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;

    let recipe = state.recipes.create(payload);
    let location = format!("{RECIPES_PATH}/{}", recipe.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(recipe),
    ))
}

/// Replaces name and ingredients of an existing recipe.
///
/// PUT /recipes/{id} RecipeUpdate
///
/// # Returns
///
/// - `204 No Content` - Recipe updated
/// - `400 Bad Request` - Malformed body, invalid fields, or body id differs from path id
/// - `404 Not Found` - No recipe with that id
#[instrument(skip_all, fields(id = field::Empty, request_id = %uuid::Uuid::new_v4()))]
pub async fn replace_recipe(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<RecipeUpdate>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    Span::current().record("id", id.as_str());
    let Json(payload) = payload?;
    payload.validate()?;

    let id = RecipeId::from(id);
    if payload.id != id {
        warn!(body_id = %payload.id, "Path id and body id differ");
        return Err(AppError::InvalidInput(format!(
            "request path id `{id}` and request body id `{}` must match",
            payload.id
        )));
    }

    state.recipes.replace(payload)?;
    info!("Updated recipe");
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a recipe.
///
/// DELETE /recipes/{id}
///
/// # Returns
///
/// - `204 No Content` - Recipe removed
/// - `404 Not Found` - No recipe with that id
#[instrument(skip_all, fields(id = field::Empty, request_id = %uuid::Uuid::new_v4()))]
pub async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    Span::current().record("id", id.as_str());

    let removed = state.recipes.delete(&RecipeId::from(id))?;
    info!(name = %removed.name, "Deleted recipe");
    Ok(StatusCode::NO_CONTENT)
}
