//! # HTTP API
//!
//! JSON endpoints behind the roadmap, resource, project and custom-path
//! pages, plus session and theme stubs.

pub mod catalog;
pub mod session;

use axum::{
    body::Body,
    http::{header, Response, StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use pathfinder_core::auth::AuthSession;
use pathfinder_core::catalog::CatalogManager;
use pathfinder_core::state::ThemePreference;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::{OpenApi, ToSchema};

use crate::config::PersistedConfig;

/// Application state shared by every handler
pub struct AppState {
    pub catalog: RwLock<CatalogManager>,
    pub session: RwLock<AuthSession>,
    pub theme: RwLock<ThemePreference>,
    pub config: RwLock<PersistedConfig>,
}

pub type SharedState = Arc<AppState>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

/// Error body with the status it is served under
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(err: impl std::fmt::Display) -> Self {
        tracing::error!("{}", err);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(ApiResponse {
                success: false,
                message: self.message,
            }),
        )
            .into_response()
    }
}

/// Parse a comma-separated facet list such as `article,video`
pub fn parse_facets<T>(raw: Option<&str>) -> Result<Vec<T>, ApiError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>().map_err(|e| ApiError::bad_request(e.to_string())))
        .collect()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pathfinder API",
        version = "1.0.0",
        description = "Learning path catalog, progress tracking and custom path builder"
    ),
    paths(
        catalog::list_roadmaps,
        catalog::list_resources,
        catalog::list_projects,
        catalog::list_custom_paths,
        catalog::get_path,
        catalog::create_custom_path,
        catalog::delete_custom_path,
        catalog::update_progress,
        catalog::resource_pool,
        session::get_session,
        session::login,
        session::logout,
        session::get_theme,
        session::toggle_theme,
        session::get_config,
        session::update_config,
        session::about
    ),
    components(
        schemas(
            ApiResponse,
            catalog::ResourceResponse,
            catalog::BreakdownResponse,
            catalog::PathResponse,
            catalog::ProjectLinkResponse,
            catalog::ProjectResponse,
            catalog::FacetsResponse,
            catalog::RoadmapListResponse,
            catalog::ResourceListResponse,
            catalog::ProjectListResponse,
            catalog::CreatePathRequest,
            catalog::ProgressRequest,
            catalog::ProgressResponse,
            session::UserResponse,
            session::SessionResponse,
            session::ThemeResponse,
            session::ConfigResponse,
            session::AboutResponse,
            PersistedConfig,
            crate::config::ConfigDefaults
        )
    ),
    tags(
        (name = "catalog", description = "Roadmaps, resources, projects and custom paths"),
        (name = "session", description = "Mock sign-in"),
        (name = "theme", description = "Dark-mode preference"),
        (name = "config", description = "Configuration management"),
        (name = "about", description = "Application information")
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> impl IntoResponse {
    match ApiDoc::openapi().to_json() {
        Ok(spec) => Response::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(spec))
            .map_err(ApiError::internal),
        Err(e) => Err(ApiError::internal(e)),
    }
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

/// Full router with state applied
pub fn router(state: SharedState) -> Router {
    let v1 = catalog::catalog_routes()
        .merge(session::session_routes())
        .route("/openapi.json", get(serve_openapi));

    Router::new()
        .nest("/api/v1", v1)
        .fallback(not_found)
        .with_state(state)
}
