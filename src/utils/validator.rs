//! # Recipe Input Validation Utilities
//!
//! Custom field validators used by the `#[derive(Validate)]` request models.
//! Length limits that the `validator` crate expresses directly live on the
//! struct attributes; the checks here cover what it cannot.

use std::borrow::Cow;

use validator::ValidationError;

use crate::utils::constant::MAX_INGREDIENT_LENGTH;

/// Rejects names that are empty or consist only of whitespace.
///
/// # Examples
///
/// - `"pancakes"` ✓ Valid
/// - `""` ✗ Invalid
/// - `"   "` ✗ Invalid
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("must not be empty")));
    }
    Ok(())
}

/// Checks every ingredient entry. The list itself may be empty, but each
/// entry must be non-blank and no longer than [`MAX_INGREDIENT_LENGTH`].
pub fn validate_ingredients(ingredients: &[String]) -> Result<(), ValidationError> {
    for ingredient in ingredients {
        if ingredient.trim().is_empty() {
            return Err(ValidationError::new("blank_ingredient")
                .with_message(Cow::Borrowed("ingredients must not contain empty entries")));
        }
        if ingredient.chars().count() > MAX_INGREDIENT_LENGTH {
            return Err(ValidationError::new("ingredient_too_long").with_message(Cow::Owned(
                format!("each ingredient cannot exceed {MAX_INGREDIENT_LENGTH} characters"),
            )));
        }
    }
    Ok(())
}
