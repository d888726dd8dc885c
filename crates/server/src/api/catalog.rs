//! # Catalog API
//!
//! Roadmaps, resources, projects and the custom path builder.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, put},
    Router,
};
use pathfinder_core::catalog::{
    available_difficulties, available_types, practice_projects, DeleteOutcome, Difficulty,
    DifficultyBreakdown, LearningPath, PathDraft, ProgressOutcome, Project, Resource,
    ResourceType, SearchFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{parse_facets, ApiError, ApiResponse, SharedState};

// === API Types ===

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub topics: Vec<String>,
    pub completed: bool,
}

impl From<&Resource> for ResourceResponse {
    fn from(r: &Resource) -> Self {
        Self {
            id: r.id.clone(),
            title: r.title.clone(),
            description: r.description.clone(),
            url: r.url.clone(),
            kind: r.kind.to_string(),
            difficulty: r.difficulty.to_string(),
            topics: r.topics.clone(),
            completed: r.completed,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BreakdownResponse {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl From<DifficultyBreakdown> for BreakdownResponse {
    fn from(b: DifficultyBreakdown) -> Self {
        Self {
            beginner: b.beginner,
            intermediate: b.intermediate,
            advanced: b.advanced,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub resources: Vec<ResourceResponse>,
    pub progress: Option<u8>,
    pub is_custom: bool,
    pub user_id: Option<String>,
    pub breakdown: BreakdownResponse,
}

impl From<&LearningPath> for PathResponse {
    fn from(p: &LearningPath) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            resources: p.resources.iter().map(ResourceResponse::from).collect(),
            progress: p.progress,
            is_custom: p.is_custom(),
            user_id: p.user_id.clone(),
            breakdown: p.difficulty_breakdown().into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectLinkResponse {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub duration: String,
    pub topics: Vec<String>,
    pub skills: Vec<String>,
    pub resources: Vec<ProjectLinkResponse>,
}

impl From<&Project> for ProjectResponse {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            difficulty: p.difficulty.to_string(),
            duration: p.duration.clone(),
            topics: p.topics.clone(),
            skills: p.skills.clone(),
            resources: p
                .resources
                .iter()
                .map(|l| ProjectLinkResponse {
                    title: l.title.clone(),
                    url: l.url.clone(),
                })
                .collect(),
        }
    }
}

/// Facet values available for toggling, in first-appearance order
#[derive(Debug, Serialize, ToSchema)]
pub struct FacetsResponse {
    pub types: Vec<String>,
    pub difficulties: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoadmapListResponse {
    pub paths: Vec<PathResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceListResponse {
    pub resources: Vec<ResourceResponse>,
    pub facets: FacetsResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectResponse>,
    pub facets: FacetsResponse,
}

/// Search term and comma-separated facet selections
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive search term
    pub q: Option<String>,
    /// Resource types, e.g. `article,video`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Difficulty levels, e.g. `beginner,advanced`
    pub difficulty: Option<String>,
    /// Resource ids already in the draft (pool listing only)
    pub exclude: Option<String>,
}

/// Optional owner filter for the custom path listing
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OwnerQuery {
    /// Only paths created by this user id
    pub user: Option<String>,
}

impl ListQuery {
    fn filter(&self) -> Result<SearchFilter, ApiError> {
        let types: Vec<ResourceType> = parse_facets(self.kind.as_deref())?;
        let levels: Vec<Difficulty> = parse_facets(self.difficulty.as_deref())?;
        Ok(SearchFilter::new(self.q.clone().unwrap_or_default())
            .with_types(types)
            .with_difficulties(levels))
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePathRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Ids of pool resources, in path order
    pub resource_ids: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProgressRequest {
    pub completed: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub path_id: String,
    pub resource_id: String,
    pub progress: Option<u8>,
    /// `predefined` or `custom`
    pub kind: String,
}

fn facets<'a, T>(items: &'a [T]) -> FacetsResponse
where
    T: pathfinder_core::catalog::Searchable + 'a,
{
    FacetsResponse {
        types: available_types(items)
            .into_iter()
            .map(|t| t.to_string())
            .collect(),
        difficulties: available_difficulties(items)
            .into_iter()
            .map(|d| d.to_string())
            .collect(),
    }
}

pub fn catalog_routes() -> Router<SharedState> {
    Router::new()
        .route("/roadmaps", get(list_roadmaps))
        .route("/resources", get(list_resources))
        .route("/projects", get(list_projects))
        .route(
            "/custom-paths",
            get(list_custom_paths).post(create_custom_path),
        )
        .route("/custom-paths/:id", delete(delete_custom_path))
        .route("/custom-path/pool", get(resource_pool))
        .route("/paths/:id", get(get_path))
        .route("/paths/:id/resources/:resource_id", put(update_progress))
}

// === Handlers ===

/// List predefined roadmaps matching a search term
#[utoipa::path(
    get,
    path = "/api/v1/roadmaps",
    tag = "catalog",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching roadmaps", body = RoadmapListResponse)
    )
)]
pub async fn list_roadmaps(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<RoadmapListResponse>, ApiError> {
    let filter = query.filter()?;
    let catalog = state.catalog.read().await;

    let paths = filter
        .apply(catalog.list_predefined_paths())
        .into_iter()
        .map(PathResponse::from)
        .collect();

    Ok(Json(RoadmapListResponse { paths }))
}

/// List resources from every roadmap
#[utoipa::path(
    get,
    path = "/api/v1/resources",
    tag = "catalog",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching resources", body = ResourceListResponse),
        (status = 400, description = "Unknown facet value", body = ApiResponse)
    )
)]
pub async fn list_resources(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ResourceListResponse>, ApiError> {
    let filter = query.filter()?;
    let catalog = state.catalog.read().await;

    let all: Vec<Resource> = catalog.resource_pool().cloned().collect();
    let resources = filter
        .apply(&all)
        .into_iter()
        .map(ResourceResponse::from)
        .collect();

    Ok(Json(ResourceListResponse {
        resources,
        facets: facets(&all),
    }))
}

/// List practice projects
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "catalog",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching projects", body = ProjectListResponse),
        (status = 400, description = "Unknown facet value", body = ApiResponse)
    )
)]
pub async fn list_projects(
    Query(query): Query<ListQuery>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let filter = query.filter()?;
    let projects = practice_projects();

    let matching = filter
        .apply(&projects)
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Ok(Json(ProjectListResponse {
        projects: matching,
        facets: facets(&projects),
    }))
}

/// List custom paths, optionally only those of one user
#[utoipa::path(
    get,
    path = "/api/v1/custom-paths",
    tag = "catalog",
    params(OwnerQuery),
    responses(
        (status = 200, description = "Custom paths in creation order", body = Vec<PathResponse>)
    )
)]
pub async fn list_custom_paths(
    State(state): State<SharedState>,
    Query(query): Query<OwnerQuery>,
) -> Json<Vec<PathResponse>> {
    let catalog = state.catalog.read().await;
    let paths: Vec<PathResponse> = match query.user.as_deref() {
        Some(user) => catalog
            .custom_paths_for(user)
            .map(PathResponse::from)
            .collect(),
        None => catalog
            .list_custom_paths()
            .iter()
            .map(PathResponse::from)
            .collect(),
    };
    Json(paths)
}

/// Get one predefined or custom path
#[utoipa::path(
    get,
    path = "/api/v1/paths/{id}",
    tag = "catalog",
    params(("id" = String, Path, description = "Path ID")),
    responses(
        (status = 200, description = "The path", body = PathResponse),
        (status = 404, description = "No such path", body = ApiResponse)
    )
)]
pub async fn get_path(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<PathResponse>, ApiError> {
    let catalog = state.catalog.read().await;
    catalog
        .get_path(&id)
        .map(|(_, path)| Json(PathResponse::from(path)))
        .ok_or_else(|| ApiError::not_found(format!("Path not found: {}", id)))
}

/// Save a custom path built from pool resources
#[utoipa::path(
    post,
    path = "/api/v1/custom-paths",
    tag = "catalog",
    request_body = CreatePathRequest,
    responses(
        (status = 201, description = "Path created", body = PathResponse),
        (status = 400, description = "Missing title, no resources or unknown resource", body = ApiResponse),
        (status = 401, description = "Not signed in", body = ApiResponse)
    )
)]
pub async fn create_custom_path(
    State(state): State<SharedState>,
    Json(req): Json<CreatePathRequest>,
) -> Result<(StatusCode, Json<PathResponse>), ApiError> {
    let owner = {
        let session = state.session.read().await;
        match session.current_user() {
            Some(user) => user.id.clone(),
            None => {
                return Err(ApiError::new(
                    StatusCode::UNAUTHORIZED,
                    "Sign in to save a learning path",
                ))
            }
        }
    };

    let mut catalog = state.catalog.write().await;

    let mut draft = PathDraft::new(req.title, req.description);
    for resource_id in &req.resource_ids {
        let resource = catalog
            .resource_pool()
            .find(|r| &r.id == resource_id)
            .cloned()
            .ok_or_else(|| ApiError::bad_request(format!("Unknown resource: {}", resource_id)))?;
        draft.add_resource(resource);
    }
    draft
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let path = catalog
        .add_custom_path(draft, Some(owner.as_str()))
        .map_err(ApiError::internal)?;

    tracing::info!("Created custom path {} for {}", path.id, owner);
    Ok((StatusCode::CREATED, Json(PathResponse::from(&path))))
}

/// Delete a custom path
#[utoipa::path(
    delete,
    path = "/api/v1/custom-paths/{id}",
    tag = "catalog",
    params(("id" = String, Path, description = "Custom path ID")),
    responses(
        (status = 200, description = "Path deleted", body = ApiResponse),
        (status = 403, description = "Predefined paths cannot be deleted", body = ApiResponse),
        (status = 404, description = "No such path", body = ApiResponse)
    )
)]
pub async fn delete_custom_path(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let mut catalog = state.catalog.write().await;
    match catalog.delete_path(&id).map_err(ApiError::internal)? {
        DeleteOutcome::Deleted => Ok(Json(ApiResponse {
            success: true,
            message: format!("Path {} deleted", id),
        })),
        DeleteOutcome::Protected => Err(ApiError::new(
            StatusCode::FORBIDDEN,
            format!("Path {} is predefined", id),
        )),
        DeleteOutcome::NotFound => Err(ApiError::not_found(format!("Path not found: {}", id))),
    }
}

/// Mark a resource completed or not and return the recomputed progress
#[utoipa::path(
    put,
    path = "/api/v1/paths/{id}/resources/{resource_id}",
    tag = "catalog",
    params(
        ("id" = String, Path, description = "Path ID"),
        ("resource_id" = String, Path, description = "Resource ID")
    ),
    request_body = ProgressRequest,
    responses(
        (status = 200, description = "Progress updated", body = ProgressResponse),
        (status = 404, description = "Unknown path or resource", body = ApiResponse)
    )
)]
pub async fn update_progress(
    State(state): State<SharedState>,
    Path((path_id, resource_id)): Path<(String, String)>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let mut catalog = state.catalog.write().await;
    let outcome = catalog
        .update_progress(&path_id, &resource_id, req.completed)
        .map_err(ApiError::internal)?;

    match outcome {
        ProgressOutcome::Updated { kind, progress } => Ok(Json(ProgressResponse {
            path_id,
            resource_id,
            progress,
            kind: kind.to_string(),
        })),
        ProgressOutcome::UnknownResource { .. } => Err(ApiError::not_found(format!(
            "Path {} has no resource {}",
            path_id, resource_id
        ))),
        ProgressOutcome::UnknownPath => {
            Err(ApiError::not_found(format!("Path not found: {}", path_id)))
        }
    }
}

/// Resources available to the path builder
#[utoipa::path(
    get,
    path = "/api/v1/custom-path/pool",
    tag = "catalog",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching pool resources not yet selected", body = ResourceListResponse),
        (status = 400, description = "Unknown facet value", body = ApiResponse)
    )
)]
pub async fn resource_pool(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ResourceListResponse>, ApiError> {
    let filter = query.filter()?;
    let selected: Vec<String> = parse_facets(query.exclude.as_deref())?;
    let catalog = state.catalog.read().await;

    let pool: Vec<Resource> = catalog.resource_pool().cloned().collect();
    let mut draft = PathDraft::default();
    for resource in pool.iter().filter(|r| selected.contains(&r.id)) {
        draft.add_resource(resource.clone());
    }

    let resources = draft
        .available(&pool, &filter)
        .into_iter()
        .map(ResourceResponse::from)
        .collect();

    Ok(Json(ResourceListResponse {
        resources,
        facets: facets(&pool),
    }))
}
