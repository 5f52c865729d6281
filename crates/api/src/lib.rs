//! Resource planner API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! assignment normalizer) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod normalize;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
