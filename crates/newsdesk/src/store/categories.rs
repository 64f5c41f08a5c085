//! Category and filter store
//!
//! Persisted value holder for the active filter selection and the list of
//! selectable categories.

use crate::config::keys::{CATEGORY_LIST, FILTERS};
use crate::model::{Category, CategoryId, FilterSelection};
use crate::store::storage::{load_json, save_json, Storage};
use std::sync::Arc;

/// Active filters plus the selectable category list
pub struct CategoryStore {
    storage: Arc<dyn Storage>,
    filters: FilterSelection,
    category_list: Vec<Category>,
}

impl CategoryStore {
    /// Create a store and rehydrate both values from `storage`
    ///
    /// Absent or corrupt values fall back to an all-null selection and an
    /// empty category list.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let filters: FilterSelection = load_json(storage.as_ref(), FILTERS).unwrap_or_default();
        let category_list: Vec<Category> =
            load_json(storage.as_ref(), CATEGORY_LIST).unwrap_or_default();
        tracing::debug!(
            categories = category_list.len(),
            filtered = !filters.is_empty(),
            "rehydrated category state"
        );

        Self {
            storage,
            filters,
            category_list,
        }
    }

    /// Replace the whole filter selection and persist it
    pub fn set_filters(&mut self, filters: FilterSelection) {
        self.filters = filters;
        if let Err(e) = save_json(self.storage.as_ref(), FILTERS, &self.filters) {
            tracing::warn!(error = %e, "failed to persist filter selection");
        }
    }

    /// Replace the category list and persist it
    pub fn set_category_list(&mut self, list: Vec<Category>) {
        self.category_list = list;
        if let Err(e) = save_json(self.storage.as_ref(), CATEGORY_LIST, &self.category_list) {
            tracing::warn!(error = %e, "failed to persist category list");
        }
    }

    /// The active filter selection
    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// The selectable categories
    pub fn category_list(&self) -> &[Category] {
        &self.category_list
    }

    /// Title of a category in the list
    pub fn category_title(&self, id: CategoryId) -> Option<&str> {
        self.category_list
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.title.as_str())
    }
}
