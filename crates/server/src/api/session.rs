//! # Session, Theme & Config API

use axum::{extract::State, response::Json, routing::get, routing::post, Router};
use pathfinder_core::auth::User;
use serde::Serialize;
use utoipa::ToSchema;

use super::{ApiError, ApiResponse, SharedState};
use crate::config::{ConfigDefaults, PersistedConfig};

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub signed_in: bool,
    pub user: Option<UserResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub dark_mode: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    pub config: PersistedConfig,
    pub defaults: ConfigDefaults,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AboutResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub pages: Vec<String>,
}

pub fn session_routes() -> Router<SharedState> {
    Router::new()
        .route("/session", get(get_session))
        .route("/session/login", post(login))
        .route("/session/logout", post(logout))
        .route("/theme", get(get_theme))
        .route("/theme/toggle", post(toggle_theme))
        .route("/config", get(get_config).patch(update_config))
        .route("/about", get(about))
}

/// Current user, if signed in
#[utoipa::path(
    get,
    path = "/api/v1/session",
    tag = "session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse)
    )
)]
pub async fn get_session(State(state): State<SharedState>) -> Json<SessionResponse> {
    let session = state.session.read().await;
    Json(SessionResponse {
        signed_in: session.is_signed_in(),
        user: session.current_user().map(UserResponse::from),
    })
}

/// Sign in as the demo user
#[utoipa::path(
    post,
    path = "/api/v1/session/login",
    tag = "session",
    responses(
        (status = 200, description = "Signed in", body = SessionResponse)
    )
)]
pub async fn login(State(state): State<SharedState>) -> Json<SessionResponse> {
    let mut session = state.session.write().await;
    let user = session.login();
    Json(SessionResponse {
        signed_in: true,
        user: Some(UserResponse::from(user)),
    })
}

/// Sign out
#[utoipa::path(
    post,
    path = "/api/v1/session/logout",
    tag = "session",
    responses(
        (status = 200, description = "Signed out", body = ApiResponse)
    )
)]
pub async fn logout(State(state): State<SharedState>) -> Json<ApiResponse> {
    state.session.write().await.logout();
    Json(ApiResponse {
        success: true,
        message: "Signed out".to_string(),
    })
}

/// Current dark-mode preference
#[utoipa::path(
    get,
    path = "/api/v1/theme",
    tag = "theme",
    responses(
        (status = 200, description = "Theme preference", body = ThemeResponse)
    )
)]
pub async fn get_theme(State(state): State<SharedState>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        dark_mode: state.theme.read().await.dark_mode(),
    })
}

/// Flip and persist the dark-mode preference
#[utoipa::path(
    post,
    path = "/api/v1/theme/toggle",
    tag = "theme",
    responses(
        (status = 200, description = "New theme preference", body = ThemeResponse),
        (status = 500, description = "Preference could not be stored", body = ApiResponse)
    )
)]
pub async fn toggle_theme(
    State(state): State<SharedState>,
) -> Result<Json<ThemeResponse>, ApiError> {
    let dark_mode = state
        .theme
        .write()
        .await
        .toggle()
        .map_err(ApiError::internal)?;
    Ok(Json(ThemeResponse { dark_mode }))
}

/// Get current configuration
#[utoipa::path(
    get,
    path = "/api/v1/config",
    tag = "config",
    responses(
        (status = 200, description = "Current configuration and defaults", body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<SharedState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        config: state.config.read().await.clone(),
        defaults: ConfigDefaults::default(),
    })
}

/// Update configuration (partial merge); port and persistence changes apply on restart
#[utoipa::path(
    patch,
    path = "/api/v1/config",
    tag = "config",
    request_body = PersistedConfig,
    responses(
        (status = 200, description = "Updated configuration", body = ConfigResponse),
        (status = 500, description = "Configuration could not be saved", body = ApiResponse)
    )
)]
pub async fn update_config(
    State(state): State<SharedState>,
    Json(updates): Json<PersistedConfig>,
) -> Result<Json<ConfigResponse>, ApiError> {
    let mut config = state.config.write().await;
    config.merge(updates);
    config.save().await.map_err(|e| ApiError::internal(format!("{:#}", e)))?;

    Ok(Json(ConfigResponse {
        config: config.clone(),
        defaults: ConfigDefaults::default(),
    }))
}

/// Application name, version and page list
#[utoipa::path(
    get,
    path = "/api/v1/about",
    tag = "about",
    responses(
        (status = 200, description = "About Pathfinder", body = AboutResponse)
    )
)]
pub async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        name: "Pathfinder".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Curated learning paths for computer science and software development"
            .to_string(),
        pages: ["/", "/roadmaps", "/resources", "/projects", "/custom-path", "/about"]
            .iter()
            .map(|p| p.to_string())
            .collect(),
    })
}
