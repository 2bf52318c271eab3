//! # Business Logic Services
//!
//! ## Available Services
//!
//! - **Store** (`store`) - The in-memory, insertion-ordered recipe collection

pub mod store;
