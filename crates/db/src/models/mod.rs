//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//! - Detail records combining the entity with its related collections
//!
//! Required create fields fall back to their zero value when omitted, so a
//! missing field fails its own rule and is reported alongside every other
//! failing field.

pub mod album;
pub mod artist;
pub mod playlist;
pub mod song;
pub mod user;
