//! # Recipe Store
//!
//! In-memory recipe collection owned by [`AppState`](crate::models::AppState).
//! Records keep their insertion order; replace edits a record in place and
//! delete closes the gap without reordering the rest.
//!
//! Every operation runs entirely under the collection lock, so a reader never
//! sees a record that is only partly written.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, instrument};

use crate::error::{AppError, AppResult};
use crate::models::{NewRecipe, Recipe, RecipeId, RecipeUpdate};

#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the two fixture recipes the service ships with.
    pub fn with_seed() -> Self {
        let store = Self::new();
        store.create(NewRecipe::new(
            "boiled white rice",
            &["1 cup white rice", "2 cups water", "pinch of salt"],
        ));
        store.create(NewRecipe::new(
            "milkshake",
            &["2 tbsp cocoa", "2 cups vanilla ice cream", "1 cup milk"],
        ));
        store
    }

    /// Returns a snapshot of every recipe, in insertion order.
    pub fn list(&self) -> Vec<Recipe> {
        self.read().clone()
    }

    pub fn get(&self, id: &RecipeId) -> Option<Recipe> {
        self.read().iter().find(|r| &r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Appends a new recipe under a freshly generated id and returns it.
    ///
    /// The input is expected to have been validated by the caller.
    #[instrument(skip_all, fields(name = %new.name))]
    pub fn create(&self, new: NewRecipe) -> Recipe {
        let mut recipes = self.write();

        let mut id = RecipeId::generate();
        while recipes.iter().any(|r| r.id == id) {
            debug!(%id, "Generated id already taken, retrying");
            id = RecipeId::generate();
        }

        let recipe = Recipe::new(id, new);
        recipes.push(recipe.clone());

        info!(id = %recipe.id, total = recipes.len(), "Recipe created");
        recipe
    }

    /// Overwrites name and ingredients of the recipe with `update.id`,
    /// keeping its position in the collection.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] if no recipe has that id.
    #[instrument(skip_all, fields(id = %update.id))]
    pub fn replace(&self, update: RecipeUpdate) -> AppResult<()> {
        let mut recipes = self.write();

        let Some(recipe) = recipes.iter_mut().find(|r| r.id == update.id) else {
            return Err(not_found(&update.id));
        };

        recipe.name = update.name;
        recipe.ingredients = update.ingredients;

        info!("Recipe replaced");
        Ok(())
    }

    /// Removes the recipe with `id` and returns it.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] if no recipe has that id.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &RecipeId) -> AppResult<Recipe> {
        let mut recipes = self.write();

        let Some(index) = recipes.iter().position(|r| &r.id == id) else {
            return Err(not_found(id));
        };
        let removed = recipes.remove(index);

        info!(total = recipes.len(), "Recipe deleted");
        Ok(removed)
    }

    // Each critical section leaves the vector consistent, so a poisoned lock
    // still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Recipe>> {
        self.recipes.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Recipe>> {
        self.recipes.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn not_found(id: &RecipeId) -> AppError {
    AppError::NotFound(format!("recipe `{id}` does not exist"))
}
