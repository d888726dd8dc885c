//! # Catalog Types
//!
//! Resources, learning paths and practice projects, in the camelCase JSON
//! shape they are persisted and served in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reserved identifier prefix for user-authored paths
pub const CUSTOM_PATH_PREFIX: &str = "custom-";

/// Kind of learning material a resource points at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Article,
    Video,
    Course,
    Book,
    Tool,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        Self::Article,
        Self::Video,
        Self::Course,
        Self::Book,
        Self::Tool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Course => "course",
            Self::Book => "book",
            Self::Tool => "tool",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("resource type", s))
    }
}

/// Difficulty level shared by resources and projects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("difficulty", s))
    }
}

/// Returned when a facet value does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// A single learning item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique within the owning path
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Only meaningful inside a specific path instance
    #[serde(default)]
    pub completed: bool,
}

/// Number of resources at each difficulty level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyBreakdown {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

/// A named curriculum: ordered resources plus derived progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl LearningPath {
    pub fn completed_count(&self) -> usize {
        self.resources.iter().filter(|r| r.completed).count()
    }

    /// `round(100 * completed / total)`, or `None` for an empty path
    pub fn computed_progress(&self) -> Option<u8> {
        progress_percent(self.completed_count(), self.resources.len())
    }

    /// Re-derive `progress` from the completion flags
    pub fn recompute_progress(&mut self) {
        self.progress = self.computed_progress();
    }

    /// Set `completed` on every resource with `resource_id`.
    ///
    /// Returns whether any resource matched. Progress is recomputed either way.
    pub fn set_completed(&mut self, resource_id: &str, completed: bool) -> bool {
        let mut matched = false;
        for resource in self.resources.iter_mut().filter(|r| r.id == resource_id) {
            resource.completed = completed;
            matched = true;
        }
        self.recompute_progress();
        matched
    }

    pub fn is_custom(&self) -> bool {
        self.is_custom.unwrap_or(false)
    }

    pub fn difficulty_breakdown(&self) -> DifficultyBreakdown {
        self.resources
            .iter()
            .fold(DifficultyBreakdown::default(), |mut acc, r| {
                match r.difficulty {
                    Difficulty::Beginner => acc.beginner += 1,
                    Difficulty::Intermediate => acc.intermediate += 1,
                    Difficulty::Advanced => acc.advanced += 1,
                }
                acc
            })
    }
}

/// Integer percentage rounded half up; `None` when `total` is zero
pub fn progress_percent(completed: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let completed = completed.min(total);
    let percent = (200 * completed + total) / (2 * total);
    Some(percent as u8)
}

/// Reference link attached to a practice project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectLink {
    pub title: String,
    pub url: String,
}

/// A practice build suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Free text estimate, e.g. "1-2 weeks"
    pub duration: String,
    pub topics: Vec<String>,
    pub skills: Vec<String>,
    pub resources: Vec<ProjectLink>,
}
