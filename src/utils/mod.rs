//! # Utility Modules
//!
//! Constants and validators shared by the request models and the store.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Defaults and input limits
//! - **Validators** (`validator`) - Field-level validation functions

pub mod constant;
pub mod validator;
