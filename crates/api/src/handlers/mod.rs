//! Request handlers for the planner entities.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `planner_db` and
//! map errors via [`crate::error::AppError`].

pub mod assignment;
pub mod bulk;
pub mod client;
pub mod maintenance;
pub mod person;
pub mod project;
