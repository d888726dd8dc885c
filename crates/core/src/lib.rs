//! # Pathfinder Core
//!
//! Catalog state, search and local persistence for the Pathfinder learning
//! path browser.
//!
//! ## Architecture
//!
//! - `catalog/` - Paths, resources, projects, the Catalog Manager and search filter
//! - `state/` - SQLite key/value storage, runtime directory IO, theme preference
//! - `auth` - Mock sign-in gating custom path creation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pathfinder_core::catalog::{CatalogManager, CatalogOptions};
//! use pathfinder_core::state::PathfinderDb;
//! use std::sync::Arc;
//!
//! let db = Arc::new(PathfinderDb::open()?);
//! let mut catalog = CatalogManager::open(db, CatalogOptions::default());
//! catalog.update_progress("fullstack", "html-css", true)?;
//! ```

pub mod auth;
pub mod catalog;
pub mod state;
