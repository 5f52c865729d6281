//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO for inserts and full-field updates

pub mod assignment;
pub mod client;
pub mod person;
pub mod project;
