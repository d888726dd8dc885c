//! # Catalog
//!
//! Learning paths, resources and practice projects, with the search filter
//! every listing shares.

pub mod draft;
pub mod filter;
pub mod manager;
pub mod projects;
pub mod seed;
pub mod types;

pub use draft::{DraftError, PathDraft};
pub use filter::{available_difficulties, available_types, SearchFilter, Searchable};
pub use manager::{
    CatalogError, CatalogManager, CatalogOptions, DeleteOutcome, PathKind, ProgressOutcome,
};
pub use projects::practice_projects;
pub use types::{
    Difficulty, DifficultyBreakdown, LearningPath, Project, ProjectLink, Resource, ResourceType,
    CUSTOM_PATH_PREFIX,
};
