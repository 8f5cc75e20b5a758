//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where patches exist

pub mod achievement;
pub mod badge;
pub mod industry;
pub mod logistics;
pub mod progress;
pub mod session;
pub mod tour;
pub mod travel;
pub mod user;
