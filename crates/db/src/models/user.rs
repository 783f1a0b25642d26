use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use playlist_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email is too long")
    )]
    pub email: String,
}

/// DTO for updating an existing user. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email is too long")
    )]
    pub email: Option<String>,
}
