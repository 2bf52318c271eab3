//! # Application Constants
//!
//! Defaults for the server configuration and limits applied to recipe input.

/// Collection path for recipe resources
pub const RECIPES_PATH: &str = "/recipes";

/// Host the server binds to when `APP_HOST` is unset
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the server binds to when `APP_PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Maximum length of a recipe name, in characters
pub const MAX_NAME_LENGTH: u64 = 200;

/// Maximum number of ingredients a single recipe may list
pub const MAX_INGREDIENTS: u64 = 100;

/// Maximum length of a single ingredient, in characters
pub const MAX_INGREDIENT_LENGTH: usize = 200;
