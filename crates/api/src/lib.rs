//! School site API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! bootstrap) so integration tests, the server binary and the operator
//! binaries can all share them.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
