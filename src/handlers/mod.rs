//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Recipes** (`recipes`) - List, create, replace and delete recipes

mod health_check;
mod recipes;

pub use health_check::*;
pub use recipes::*;
