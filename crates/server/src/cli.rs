//! One-shot CLI commands that work on the local catalog without the server.

use anyhow::{bail, Result};
use clap::Subcommand;
use pathfinder_core::auth::{AuthSession, User};
use pathfinder_core::catalog::{
    practice_projects, CatalogManager, DeleteOutcome, Difficulty, LearningPath, PathDraft,
    ProgressOutcome, ResourceType, SearchFilter,
};
use pathfinder_core::state::ThemePreference;

#[derive(Subcommand, Clone)]
pub enum CustomCommand {
    /// List custom paths
    List {
        /// Only paths created by this user id
        #[arg(long)]
        user: Option<String>,
    },
    /// Save a new custom path from pool resource ids
    Create {
        /// Path title
        #[arg(short, long)]
        title: String,
        /// Path description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Pool resource ids, comma separated, in path order
        #[arg(short, long, value_delimiter = ',', required = true)]
        resources: Vec<String>,
        /// Signed-in user id; saving requires one
        #[arg(long, env = "PATHFINDER_USER")]
        user: Option<String>,
    },
    /// Mark a resource of any path completed
    Complete {
        path_id: String,
        resource_id: String,
        /// Clear the flag instead
        #[arg(long)]
        undo: bool,
    },
    /// Delete a custom path
    Delete { path_id: String },
}

fn print_path(path: &LearningPath) {
    let progress = path
        .progress
        .map(|p| format!("{}%", p))
        .unwrap_or_else(|| "-".to_string());
    let b = path.difficulty_breakdown();
    println!(
        "{:<20} {:<40} {:>5}  ({} beginner, {} intermediate, {} advanced)",
        path.id, path.title, progress, b.beginner, b.intermediate, b.advanced
    );
}

pub fn roadmaps(catalog: &CatalogManager, search: Option<String>) {
    let filter = SearchFilter::new(search.unwrap_or_default());
    for path in filter.apply(catalog.list_predefined_paths()) {
        print_path(path);
    }
}

pub fn resources(
    catalog: &CatalogManager,
    search: Option<String>,
    types: Vec<ResourceType>,
    difficulties: Vec<Difficulty>,
) {
    let filter = SearchFilter::new(search.unwrap_or_default())
        .with_types(types)
        .with_difficulties(difficulties);
    let pool: Vec<_> = catalog.resource_pool().collect();

    let matching: Vec<_> = pool.iter().filter(|r| filter.matches(**r)).collect();
    if matching.is_empty() {
        println!("No resources found. Try adjusting your search or filters.");
    }
    for r in matching {
        println!("{:<18} {:<8} {:<13} {}", r.id, r.kind, r.difficulty, r.title);
    }
}

pub fn projects(search: Option<String>, difficulties: Vec<Difficulty>) {
    let projects = practice_projects();
    let filter = SearchFilter::new(search.unwrap_or_default()).with_difficulties(difficulties);

    let matching = filter.apply(&projects);
    if matching.is_empty() {
        println!("No projects found. Try adjusting your search or filters.");
    }
    for p in matching {
        println!("{:<15} {:<13} {:<10} {}", p.id, p.difficulty, p.duration, p.title);
    }
}

pub fn theme(preference: &mut ThemePreference, toggle: bool) -> Result<()> {
    if toggle {
        preference.toggle()?;
    }
    println!("dark mode: {}", if preference.dark_mode() { "on" } else { "off" });
    Ok(())
}

pub fn custom(catalog: &mut CatalogManager, command: CustomCommand) -> Result<()> {
    match command {
        CustomCommand::List { user } => {
            let paths: Vec<&LearningPath> = match user.as_deref() {
                Some(user) => catalog.custom_paths_for(user).collect(),
                None => catalog.list_custom_paths().iter().collect(),
            };
            if paths.is_empty() {
                println!("No custom paths yet.");
            }
            for path in paths {
                print_path(path);
            }
        }
        CustomCommand::Create {
            title,
            description,
            resources,
            user,
        } => {
            let session = match user {
                Some(id) => AuthSession::signed_in(User {
                    name: id.clone(),
                    email: String::new(),
                    id,
                }),
                None => AuthSession::new(),
            };
            let Some(owner) = session.current_user() else {
                bail!("Sign in required: pass --user or set PATHFINDER_USER");
            };

            let mut draft = PathDraft::new(title, description);
            for id in &resources {
                let Some(resource) = catalog.resource_pool().find(|r| &r.id == id).cloned() else {
                    bail!("Unknown resource: {}", id);
                };
                draft.add_resource(resource);
            }
            draft.validate()?;

            let path = catalog.add_custom_path(draft, Some(owner.id.as_str()))?;
            println!("Created {}", path.id);
        }
        CustomCommand::Complete {
            path_id,
            resource_id,
            undo,
        } => match catalog.update_progress(&path_id, &resource_id, !undo)? {
            ProgressOutcome::Updated { progress, .. } => {
                println!("{} progress: {}%", path_id, progress.unwrap_or(0));
            }
            ProgressOutcome::UnknownResource { .. } => {
                bail!("Path {} has no resource {}", path_id, resource_id)
            }
            ProgressOutcome::UnknownPath => bail!("Path not found: {}", path_id),
        },
        CustomCommand::Delete { path_id } => match catalog.delete_path(&path_id)? {
            DeleteOutcome::Deleted => println!("Deleted {}", path_id),
            DeleteOutcome::Protected => bail!("Path {} is predefined and cannot be deleted", path_id),
            DeleteOutcome::NotFound => bail!("Path not found: {}", path_id),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder_core::catalog::CatalogOptions;
    use pathfinder_core::state::MemoryStore;
    use std::sync::Arc;

    fn catalog() -> CatalogManager {
        CatalogManager::open(Arc::new(MemoryStore::new()), CatalogOptions::default())
    }

    #[test]
    fn test_create_requires_user() {
        let mut catalog = catalog();
        let result = custom(
            &mut catalog,
            CustomCommand::Create {
                title: "Mine".to_string(),
                description: String::new(),
                resources: vec!["python".to_string()],
                user: None,
            },
        );
        assert!(result.is_err());
        assert!(catalog.list_custom_paths().is_empty());
    }

    #[test]
    fn test_create_then_complete_then_delete() {
        let mut catalog = catalog();
        custom(
            &mut catalog,
            CustomCommand::Create {
                title: "Mine".to_string(),
                description: String::new(),
                resources: vec!["python".to_string(), "pandas".to_string()],
                user: Some("u1".to_string()),
            },
        )
        .unwrap();

        let id = catalog.list_custom_paths()[0].id.clone();
        assert_eq!(catalog.list_custom_paths()[0].user_id.as_deref(), Some("u1"));

        custom(
            &mut catalog,
            CustomCommand::Complete {
                path_id: id.clone(),
                resource_id: "pandas".to_string(),
                undo: false,
            },
        )
        .unwrap();
        assert_eq!(catalog.list_custom_paths()[0].progress, Some(50));

        custom(&mut catalog, CustomCommand::Delete { path_id: id }).unwrap();
        assert!(catalog.list_custom_paths().is_empty());
    }

    #[test]
    fn test_delete_predefined_fails() {
        let mut catalog = catalog();
        let result = custom(
            &mut catalog,
            CustomCommand::Delete {
                path_id: "fullstack".to_string(),
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_list_filters_by_user() {
        let mut catalog = catalog();
        for (user, resource) in [("u1", "python"), ("u2", "react")] {
            custom(
                &mut catalog,
                CustomCommand::Create {
                    title: format!("{} path", user),
                    description: String::new(),
                    resources: vec![resource.to_string()],
                    user: Some(user.to_string()),
                },
            )
            .unwrap();
        }

        assert!(custom(&mut catalog, CustomCommand::List { user: Some("u1".to_string()) }).is_ok());
        assert_eq!(catalog.custom_paths_for("u2").count(), 1);
        assert_eq!(catalog.custom_paths_for("u3").count(), 0);
    }
}
