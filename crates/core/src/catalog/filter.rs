//! # Search & Facet Filtering
//!
//! One predicate shared by every listing. An item matches when the search
//! term is a case-insensitive substring of one of its text fields, and each
//! non-empty facet set contains the item's value for that facet. Items that
//! have no value for a facet are not restricted by it.

use super::types::{Difficulty, LearningPath, Project, Resource, ResourceType};
use std::collections::BTreeSet;

/// Facet extractors for anything that can be listed and searched
pub trait Searchable {
    /// Text fields the search term is matched against
    fn search_text(&self) -> Vec<&str>;

    fn resource_type(&self) -> Option<ResourceType> {
        None
    }

    fn difficulty(&self) -> Option<Difficulty> {
        None
    }
}

impl Searchable for Resource {
    fn search_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn resource_type(&self) -> Option<ResourceType> {
        Some(self.kind)
    }

    fn difficulty(&self) -> Option<Difficulty> {
        Some(self.difficulty)
    }
}

impl Searchable for LearningPath {
    fn search_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for Project {
    fn search_text(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.topics.iter().map(String::as_str));
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }

    fn difficulty(&self) -> Option<Difficulty> {
        Some(self.difficulty)
    }
}

/// Search term plus the selected facet values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
    types: BTreeSet<ResourceType>,
    difficulties: BTreeSet<Difficulty>,
}

impl SearchFilter {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into().to_lowercase(),
            ..Default::default()
        }
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = ResourceType>) -> Self {
        self.types.extend(types);
        self
    }

    pub fn with_difficulties(mut self, levels: impl IntoIterator<Item = Difficulty>) -> Self {
        self.difficulties.extend(levels);
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn types(&self) -> &BTreeSet<ResourceType> {
        &self.types
    }

    pub fn difficulties(&self) -> &BTreeSet<Difficulty> {
        &self.difficulties
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        let matches_search = self.term.is_empty()
            || item
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.term));

        let matches_type = match item.resource_type() {
            Some(kind) => self.types.is_empty() || self.types.contains(&kind),
            None => true,
        };

        let matches_difficulty = match item.difficulty() {
            Some(level) => self.difficulties.is_empty() || self.difficulties.contains(&level),
            None => true,
        };

        matches_search && matches_type && matches_difficulty
    }

    /// Matching items in source order
    pub fn apply<'a, T, I>(&self, items: I) -> Vec<&'a T>
    where
        T: Searchable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().filter(|item| self.matches(*item)).collect()
    }
}

/// Distinct resource types in first-appearance order
pub fn available_types<'a, T, I>(items: I) -> Vec<ResourceType>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    distinct(items.into_iter().filter_map(|item| item.resource_type()))
}

/// Distinct difficulty levels in first-appearance order
pub fn available_difficulties<'a, T, I>(items: I) -> Vec<Difficulty>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    distinct(items.into_iter().filter_map(|item| item.difficulty()))
}

fn distinct<V: PartialEq>(values: impl Iterator<Item = V>) -> Vec<V> {
    let mut out = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
