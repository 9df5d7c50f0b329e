// src/lib.rs
// Public library surface for integration tests (and the binary).

pub mod api;
pub mod config;
pub mod deadline;
pub mod error;
pub mod extract;
pub mod opportunity;
pub mod parse;
pub mod store;
pub mod summarize;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::error::ApiError;
pub use crate::opportunity::Opportunity;
