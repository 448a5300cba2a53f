//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub bio: Option<String>,
    pub is_staff: bool,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
