//! Route definitions
//!
//! All routes organized by domain. Paths mirror the original application's
//! URL scheme rather than a nested REST hierarchy.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{admin, auth, health, messages, profile, rooms};
use crate::state::AppState;

/// Create the main router with all routes (excluding health, mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(rooms::home))
        .merge(auth_routes())
        .merge(room_routes())
        .merge(profile_routes())
        .merge(admin_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh_token))
        .route("/logout", post(auth::logout))
}

/// Room and message routes
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(rooms::list_rooms))
        .route("/create-room", post(rooms::create_room))
        .route("/room/:room_id", get(rooms::room_detail))
        .route("/room/:room_id/edit", post(rooms::edit_room))
        .route("/room/:room_id/delete", post(rooms::delete_room))
        .route("/room/:room_id/leave", post(rooms::leave_room))
        .route("/room/:room_id/send_message", post(messages::send_message))
        .route("/room/:room_id/messages", get(messages::get_messages))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::get_profile))
        .route("/profile", patch(profile::update_profile))
}

/// Staff moderation routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(admin::dashboard))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/rooms", get(admin::list_rooms))
        .route("/admin/ban_user", post(admin::ban_user))
        .route("/admin/unban_user", post(admin::unban_user))
        .route("/admin/clear_messages", post(admin::clear_messages))
        .route("/admin/users/:user_id/delete", post(admin::delete_user))
}
