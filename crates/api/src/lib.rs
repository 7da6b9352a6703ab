//! Cragbook API server library.
//!
//! Exposes config, state, error handling, routes and handlers so the
//! integration tests and the binary entrypoint build the same app.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
