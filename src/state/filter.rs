//! Project filtering by tag.
//!
//! Filter options are `"All"` followed by the first few distinct tags in
//! first-seen order across the dataset. Filtering preserves dataset order.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::HashSet;

use crate::consts::{ALL_TAG, MAX_FILTER_TAGS};

/// Anything that carries a tag list.
pub trait Tagged {
    fn tags(&self) -> &[String];
}

/// Distinct tags in first-seen order, capped at `MAX_FILTER_TAGS`.
pub fn available_tags<T: Tagged>(dataset: &[T]) -> Vec<String> {
    available_tags_capped(dataset, MAX_FILTER_TAGS)
}

pub fn available_tags_capped<T: Tagged>(dataset: &[T], cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for tag in dataset.iter().flat_map(Tagged::tags) {
        if tags.len() == cap {
            break;
        }
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Items matching `selection`; everything for `"All"`.
pub fn apply<'a, T: Tagged>(dataset: &'a [T], selection: &str) -> Vec<&'a T> {
    if selection == ALL_TAG {
        return dataset.iter().collect();
    }
    dataset
        .iter()
        .filter(|item| item.tags().iter().any(|tag| tag == selection))
        .collect()
}

/// Filter options plus the current selection, which is always one of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    options: Vec<String>,
    selected: String,
}

impl ProjectFilter {
    pub fn new<T: Tagged>(dataset: &[T], cap: usize) -> Self {
        let mut options = Vec::with_capacity(cap + 1);
        options.push(ALL_TAG.to_owned());
        options.extend(available_tags_capped(dataset, cap));
        Self { options, selected: ALL_TAG.to_owned() }
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected == tag
    }

    /// Switch to `tag`. Tags that are not offered are rejected and the
    /// selection stays as it was.
    pub fn select(&mut self, tag: &str) -> bool {
        if !self.options.iter().any(|option| option == tag) {
            log::debug!("filter: ignoring unknown tag `{tag}`");
            return false;
        }
        tag.clone_into(&mut self.selected);
        true
    }

    pub fn apply<'a, T: Tagged>(&self, dataset: &'a [T]) -> Vec<&'a T> {
        apply(dataset, &self.selected)
    }
}
