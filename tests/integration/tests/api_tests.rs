//! API integration tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{
    assert_json, assert_status, backdate_message, check_test_env, fixtures::*, promote_to_staff,
    TestServer,
};
use reqwest::StatusCode;

/// Register a fresh user and return the auth payload
async fn register_user(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Register a fresh user and promote them to staff, returning a staff token
async fn register_staff(server: &TestServer) -> AuthResponse {
    let (request, _) = register_user(server).await;
    promote_to_staff(&request.username).await.unwrap();

    // Re-login so the auth payload reflects the staff flag
    let response = server
        .post("/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

/// Create a room and return its payload
async fn create_room(server: &TestServer, token: &str) -> RoomResponse {
    let request = CreateRoomRequest::unique();
    let response = server.post_auth("/create-room", token, &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_user(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert!(auth.user.is_active);
    assert!(!auth.user.is_staff);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register_user(&server).await;

    let response = server.post("/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_numeric_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        username: format!("user{}", unique_suffix()),
        password: "1234567890".to_string(),
    };

    let response = server.post("/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_records_last_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register_user(&server).await;

    let response = server
        .post("/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert!(auth.user.last_login.is_some());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register_user(&server).await;

    let login = LoginRequest {
        username: request.username,
        password: "definitely-wrong".to_string(),
    };
    let response = server.post("/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token_rotation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let refresh = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.post("/refresh", &refresh).await.unwrap();
    let rotated: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!rotated.access_token.is_empty());

    // The old refresh token was revoked by the rotation
    let response = server.post("/refresh", &refresh).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let logout = LogoutRequest {
        refresh_token: Some(auth.refresh_token.clone()),
    };
    let response = server
        .post_auth("/logout", &auth.access_token, &logout)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let refresh = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/refresh", &refresh).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_banned_user_cannot_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = register_staff(&server).await;
    let (target_req, _) = register_user(&server).await;

    let ban = BanUserRequest {
        username: target_req.username.clone(),
    };
    let response = server
        .post_auth("/admin/ban_user", &staff.access_token, &ban)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post("/login", &LoginRequest::from_register(&target_req))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Unban restores access
    let response = server
        .post_auth("/admin/unban_user", &staff.access_token, &ban)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post("/login", &LoginRequest::from_register(&target_req))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Rooms
// ============================================================================

#[tokio::test]
async fn test_create_room_owner_is_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let room = create_room(&server, &auth.access_token).await;
    assert_eq!(room.owner_id, auth.user.id);

    let response = server
        .get_auth(&format!("/room/{}", room.id), &auth.access_token)
        .await
        .unwrap();
    let detail: RoomDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(detail.is_owner);
    assert_eq!(detail.stats.participant_count, 1);
}

#[tokio::test]
async fn test_duplicate_room_name_yields_one_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CreateRoomRequest::unique();
    let first = server
        .post_auth("/create-room", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(first, StatusCode::CREATED).await.unwrap();

    let second = server
        .post_auth("/create-room", &auth.access_token, &request)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(second, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "ROOM_NAME_TAKEN");
}

#[tokio::test]
async fn test_create_room_blank_name_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    // Whitespace passes the length validator but trims to empty
    let request = CreateRoomRequest::named("   ");
    let response = server
        .post_auth("/create-room", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_visiting_a_room_joins_it() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;
    let (_, visitor) = register_user(&server).await;

    let room = create_room(&server, &owner.access_token).await;

    let response = server
        .get_auth(&format!("/room/{}", room.id), &visitor.access_token)
        .await
        .unwrap();
    let detail: RoomDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!detail.is_owner);
    assert_eq!(detail.stats.participant_count, 2);

    // A second visit changes nothing
    let response = server
        .get_auth(&format!("/room/{}", room.id), &visitor.access_token)
        .await
        .unwrap();
    let detail: RoomDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.stats.participant_count, 2);
}

#[tokio::test]
async fn test_owner_cannot_leave_room() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;
    let room = create_room(&server, &owner.access_token).await;

    let response = server
        .post_auth_empty(&format!("/room/{}/leave", room.id), &owner.access_token)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "CREATOR_CANNOT_LEAVE");
}

#[tokio::test]
async fn test_member_can_leave_but_not_twice() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;
    let (_, visitor) = register_user(&server).await;
    let room = create_room(&server, &owner.access_token).await;

    // Join by visiting
    let response = server
        .get_auth(&format!("/room/{}", room.id), &visitor.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/room/{}/leave", room.id), &visitor.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Leaving again: no membership row remains
    let response = server
        .post_auth_empty(&format!("/room/{}/leave", room.id), &visitor.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_edit_room_permissions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;
    let (_, other) = register_user(&server).await;
    let room = create_room(&server, &owner.access_token).await;

    let edit = UpdateRoomRequest {
        name: format!("Renamed {}", unique_suffix()),
        description: Some("new description".to_string()),
        is_private: None,
    };

    // A random member cannot edit
    let response = server
        .post_auth(&format!("/room/{}/edit", room.id), &other.access_token, &edit)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner can
    let response = server
        .post_auth(&format!("/room/{}/edit", room.id), &owner.access_token, &edit)
        .await
        .unwrap();
    let updated: RoomResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, edit.name);
    assert_eq!(updated.description, "new description");
}

#[tokio::test]
async fn test_edit_room_to_taken_name_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;

    let room_a = create_room(&server, &owner.access_token).await;
    let room_b = create_room(&server, &owner.access_token).await;

    let edit = UpdateRoomRequest {
        name: room_a.name.clone(),
        description: None,
        is_private: None,
    };
    let response = server
        .post_auth(&format!("/room/{}/edit", room_b.id), &owner.access_token, &edit)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_staff_can_delete_any_room() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = register_staff(&server).await;
    let (_, owner) = register_user(&server).await;
    let room = create_room(&server, &owner.access_token).await;

    let response = server
        .post_auth_empty(&format!("/room/{}/delete", room.id), &staff.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_private_room_hidden_from_other_listings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;
    let (_, other) = register_user(&server).await;

    let request = CreateRoomRequest {
        name: format!("Hidden {}", unique_suffix()),
        description: None,
        is_private: true,
    };
    let response = server
        .post_auth("/create-room", &owner.access_token, &request)
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/rooms", &other.access_token).await.unwrap();
    let listing: Vec<RoomResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!listing.iter().any(|r| r.id == room.id));

    let response = server.get_auth("/rooms", &owner.access_token).await.unwrap();
    let listing: Vec<RoomResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listing.iter().any(|r| r.id == room.id));
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn test_post_message_echoes_render_data() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_user(&server).await;
    let room = create_room(&server, &auth.access_token).await;

    let response = server
        .post_auth(
            &format!("/room/{}/send_message", room.id),
            &auth.access_token,
            &PostMessageRequest::simple("  hello world  "),
        )
        .await
        .unwrap();
    let echo: ChatMessageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(echo.success);
    assert!(echo.message_id > 0);
    assert_eq!(echo.username, request.username);
    assert!(!echo.is_admin);
    assert_eq!(echo.message_content, "hello world");
    // HH:MM
    assert_eq!(echo.timestamp.len(), 5);
    assert_eq!(&echo.timestamp[2..3], ":");
}

#[tokio::test]
async fn test_non_member_cannot_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;
    let (_, outsider) = register_user(&server).await;
    let room = create_room(&server, &owner.access_token).await;

    // The outsider never visited the room, so no membership exists
    let response = server
        .post_auth(
            &format!("/room/{}/send_message", room.id),
            &outsider.access_token,
            &PostMessageRequest::simple("sneaky"),
        )
        .await
        .unwrap();
    let err: ChatErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert!(!err.success);
    assert!(!err.error.is_empty());
}

#[tokio::test]
async fn test_non_member_cannot_read() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;
    let (_, outsider) = register_user(&server).await;
    let room = create_room(&server, &owner.access_token).await;

    let response = server
        .get_auth(&format!("/room/{}/messages", room.id), &outsider.access_token)
        .await
        .unwrap();
    let err: ChatErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert!(!err.success);
}

#[tokio::test]
async fn test_blank_message_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let room = create_room(&server, &auth.access_token).await;

    let response = server
        .post_auth(
            &format!("/room/{}/send_message", room.id),
            &auth.access_token,
            &PostMessageRequest::simple("   "),
        )
        .await
        .unwrap();
    let err: ChatErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(!err.success);
}

#[tokio::test]
async fn test_message_paging_window() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let room = create_room(&server, &auth.access_token).await;

    for i in 0..5 {
        let response = server
            .post_auth(
                &format!("/room/{}/send_message", room.id),
                &auth.access_token,
                &PostMessageRequest::simple(&format!("message {i}")),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    // Newest two, oldest-first within the page
    let response = server
        .get_auth(
            &format!("/room/{}/messages?limit=2&offset=0", room.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let page: MessagePageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.success);
    assert_eq!(page.messages.len(), 2);
    assert_eq!(page.messages[0].message_content, "message 3");
    assert_eq!(page.messages[1].message_content, "message 4");
    assert!(page.has_more);

    // Step back past the remaining three
    let response = server
        .get_auth(
            &format!("/room/{}/messages?limit=3&offset=2", room.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let page: MessagePageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.messages.len(), 3);
    assert_eq!(page.messages[0].message_content, "message 0");
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_room_stats_count_markers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let room = create_room(&server, &auth.access_token).await;

    for content in [
        "check http://example.com",
        "[media] vacation.png",
        "[file] notes.pdf",
        "just words",
    ] {
        let response = server
            .post_auth(
                &format!("/room/{}/send_message", room.id),
                &auth.access_token,
                &PostMessageRequest::simple(content),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_auth(&format!("/room/{}", room.id), &auth.access_token)
        .await
        .unwrap();
    let detail: RoomDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.stats.message_count, 4);
    assert_eq!(detail.stats.link_count, 1);
    assert_eq!(detail.stats.media_count, 1);
    assert_eq!(detail.stats.file_count, 1);
    assert_eq!(detail.stats.music_count, 0);
    assert_eq!(detail.stats.voice_count, 0);
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_profile_lists_joined_rooms() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let room = create_room(&server, &auth.access_token).await;

    let response = server
        .post_auth(
            &format!("/room/{}/send_message", room.id),
            &auth.access_token,
            &PostMessageRequest::simple("hello"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/profile", &auth.access_token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(profile.rooms.iter().any(|r| r.id == room.id));
    assert_eq!(profile.message_count, 1);
}

#[tokio::test]
async fn test_update_profile_bio() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let update = UpdateProfileRequest {
        bio: Some("rustacean".to_string()),
    };
    let response = server
        .patch_auth("/profile", &auth.access_token, &update)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.bio.as_deref(), Some("rustacean"));
}

// ============================================================================
// Moderation
// ============================================================================

#[tokio::test]
async fn test_non_staff_cannot_moderate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/admin/dashboard", &auth.access_token)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "STAFF_REQUIRED");
}

#[tokio::test]
async fn test_staff_dashboard_and_listings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = register_staff(&server).await;
    let room = create_room(&server, &staff.access_token).await;

    let response = server
        .get_auth("/admin/dashboard", &staff.access_token)
        .await
        .unwrap();
    let dashboard: DashboardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(dashboard.user_count >= 1);
    assert!(dashboard.room_count >= 1);

    let response = server.get_auth("/admin/users", &staff.access_token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.username == staff.user.username));

    let response = server.get_auth("/admin/rooms", &staff.access_token).await.unwrap();
    let rooms: Vec<ModeratedRoomResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let listed = rooms.iter().find(|r| r.id == room.id).expect("room listed");
    assert_eq!(listed.owner_username, staff.user.username);
    assert_eq!(listed.member_count, 1);
}

#[tokio::test]
async fn test_self_ban_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = register_staff(&server).await;

    let ban = BanUserRequest {
        username: staff.user.username.clone(),
    };
    let response = server
        .post_auth("/admin/ban_user", &staff.access_token, &ban)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "SELF_ACTION");
}

#[tokio::test]
async fn test_ban_unknown_username_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = register_staff(&server).await;

    let ban = BanUserRequest {
        username: format!("nobody{}", unique_suffix()),
    };
    let response = server
        .post_auth("/admin/ban_user", &staff.access_token, &ban)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_purge_old_messages_spares_recent_ones() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = register_staff(&server).await;
    let room = create_room(&server, &staff.access_token).await;

    // One old message (backdated past the threshold), one fresh
    let response = server
        .post_auth(
            &format!("/room/{}/send_message", room.id),
            &staff.access_token,
            &PostMessageRequest::simple("ancient history"),
        )
        .await
        .unwrap();
    let old: ChatMessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    backdate_message(old.message_id, Utc::now() - Duration::days(45))
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/room/{}/send_message", room.id),
            &staff.access_token,
            &PostMessageRequest::simple("still fresh"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let purge = PurgeMessagesRequest { days: Some(30) };
    let response = server
        .post_auth("/admin/clear_messages", &staff.access_token, &purge)
        .await
        .unwrap();
    let result: DeletedCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(result.deleted_count >= 1);

    // The fresh message survived
    let response = server
        .get_auth(&format!("/room/{}", room.id), &staff.access_token)
        .await
        .unwrap();
    let detail: RoomDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.stats.message_count, 1);
}

#[tokio::test]
async fn test_staff_delete_user_cascades() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = register_staff(&server).await;
    let (_, target) = register_user(&server).await;
    let room = create_room(&server, &target.access_token).await;

    // Self-deletion is refused
    let response = server
        .post_auth_empty(
            &format!("/admin/users/{}/delete", staff.user.id),
            &staff.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/admin/users/{}/delete", target.user.id),
            &staff.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The deleted user's room went with them
    let response = server
        .get_auth(&format!("/room/{}", room.id), &staff.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[tokio::test]
async fn test_lobby_lifecycle_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user_a) = register_user(&server).await;
    let (b_request, user_b) = register_user(&server).await;

    // A creates the room
    let request = CreateRoomRequest {
        name: format!("Lobby {}", unique_suffix()),
        description: None,
        is_private: false,
    };
    let response = server
        .post_auth("/create-room", &user_a.access_token, &request)
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // B visits and is auto-joined
    let response = server
        .get_auth(&format!("/room/{}", room.id), &user_b.access_token)
        .await
        .unwrap();
    let detail: RoomDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.stats.participant_count, 2);

    // B posts and gets the render payload back
    let response = server
        .post_auth(
            &format!("/room/{}/send_message", room.id),
            &user_b.access_token,
            &PostMessageRequest::simple("hello"),
        )
        .await
        .unwrap();
    let echo: ChatMessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(echo.success);
    assert_eq!(echo.username, b_request.username);

    // A deletes the room
    let response = server
        .post_auth_empty(&format!("/room/{}/delete", room.id), &user_a.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone for both of them
    for token in [&user_a.access_token, &user_b.access_token] {
        let response = server
            .get_auth(&format!("/room/{}", room.id), token)
            .await
            .unwrap();
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    }
}
