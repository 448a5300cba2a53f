//! UserModel → User mapper

use parlor_core::{Snowflake, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        // password_hash deliberately stays behind in the model
        Self {
            id: Snowflake::new(model.id),
            username: model.username,
            bio: model.bio,
            is_staff: model.is_staff,
            is_active: model.is_active,
            last_login: model.last_login,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
