use tracing::info;

use crate::services::store::RecipeStore;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// The recipe collection served by this instance.
    pub recipes: RecipeStore,
}

impl AppState {
    /// Creates application state around an existing store.
    pub fn new(recipes: RecipeStore) -> Self {
        info!(recipes = recipes.len(), "Initializing application state");
        Self { recipes }
    }
}
