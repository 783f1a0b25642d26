//! Domain primitives shared by the storage and HTTP layers.

pub mod error;
pub mod nullable;
pub mod ordering;
pub mod types;
pub mod validation;
