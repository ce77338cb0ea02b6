//! HTTP server module.
//!
//! An axum-based REST API over the query layer. Handlers parse filter
//! parameters, grab the current snapshot from the shared store, and delegate
//! to the services; the presentation layer (map, charts, table) lives in the
//! frontend and only ever sees the JSON result entities.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
