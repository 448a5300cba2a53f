//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests, and
//! seeding test state that has no API surface (staff flags, aged messages).

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use parlor_api::{create_app, create_app_state};
use parlor_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to an OS-assigned port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a bodyless POST request with auth token
    pub async fn post_auth_empty(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with auth token and JSON body
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token and JSON body
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    // The server binds an ephemeral port; the configured one is unused
    if std::env::var("SERVER_PORT").is_err() {
        std::env::set_var("SERVER_PORT", "0");
    }

    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("JWT_SECRET").is_err() {
        eprintln!("Skipping test: JWT_SECRET not set");
        return false;
    }

    true
}

/// Connect straight to the test database for fixture surgery
pub async fn test_pool() -> Result<PgPool> {
    let url = std::env::var("DATABASE_URL")?;
    Ok(PgPool::connect(&url).await?)
}

/// Grant the staff capability to a user
///
/// Staff accounts are provisioned out-of-band (there is no API to create
/// one), so tests flip the flag directly.
pub async fn promote_to_staff(username: &str) -> Result<()> {
    let pool = test_pool().await?;
    sqlx::query("UPDATE users SET is_staff = TRUE WHERE username = $1")
        .bind(username)
        .execute(&pool)
        .await?;
    Ok(())
}

/// Age a message so purge thresholds can be exercised
pub async fn backdate_message(message_id: i64, to: DateTime<Utc>) -> Result<()> {
    let pool = test_pool().await?;
    sqlx::query("UPDATE messages SET created_at = $2 WHERE id = $1")
        .bind(message_id)
        .bind(to)
        .execute(&pool)
        .await?;
    Ok(())
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status, discarding the body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
