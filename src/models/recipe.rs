use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::constant::*;
use crate::utils::validator::{validate_ingredients, validate_not_blank};

/// Server-assigned recipe identifier, serialized as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(id: RecipeId, new: NewRecipe) -> Self {
        Self {
            id,
            name: new.name,
            ingredients: new.ingredients,
        }
    }
}

/// Request payload for creating a recipe.
///
/// POST /recipes NewRecipe
///
/// Any `id` sent by the client is ignored; ids are always generated.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRecipe {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = MAX_NAME_LENGTH, message = "name is too long")
    )]
    pub name: String,
    #[validate(
        custom(function = "validate_ingredients"),
        length(max = MAX_INGREDIENTS, message = "too many ingredients")
    )]
    pub ingredients: Vec<String>,
}

impl NewRecipe {
    pub fn new(name: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| (*i).to_owned()).collect(),
        }
    }
}

/// Request payload for replacing a recipe.
///
/// PUT /recipes/{id} RecipeUpdate
///
/// `id` must equal the id in the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecipeUpdate {
    pub id: RecipeId,
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = MAX_NAME_LENGTH, message = "name is too long")
    )]
    pub name: String,
    #[validate(
        custom(function = "validate_ingredients"),
        length(max = MAX_INGREDIENTS, message = "too many ingredients")
    )]
    pub ingredients: Vec<String>,
}
