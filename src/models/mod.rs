mod recipe;
mod state;

pub use recipe::{NewRecipe, Recipe, RecipeId, RecipeUpdate};
pub use state::AppState;
