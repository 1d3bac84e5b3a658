use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::model::item::{HobbyGroup, HobbyItem, HobbyStatus};
use crate::model::seed::SeedCatalog;
use crate::ops::reconcile::{CategoryIndex, StatusIndex, reconcile};
use crate::store::{COMPLETED_KEY, CUSTOM_KEY, PersistedStore, StoreError, snapshot};
use crate::util::collate;

/// Category assigned to imported items whose owner can no longer be
/// determined.
pub const UNCATEGORIZED: &str = "未分類";

/// Error type for catalog mutations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("item name cannot be empty")]
    EmptyName,
    #[error("category cannot be empty")]
    EmptyCategory,
    #[error("item {name} already belongs to category {category}")]
    DuplicateItem { name: String, category: String },
    #[error("unknown item: {0}")]
    UnknownItem(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The in-memory source of truth: the category index and the status index,
/// plus the injected store the mutations persist through.
///
/// Invariant: every item name in any category has exactly one status entry,
/// and every status entry's item belongs to exactly one category.
pub struct Catalog {
    seed: SeedCatalog,
    categories: CategoryIndex,
    statuses: StatusIndex,
    store: Box<dyn PersistedStore>,
}

impl Catalog {
    /// Build the working model from the seed and whatever the store holds.
    /// Missing or unreadable persisted documents fall back to the pure seed.
    pub fn load(seed: SeedCatalog, store: Box<dyn PersistedStore>) -> Catalog {
        let snapshot = snapshot::load_snapshot(store.as_ref());
        let (categories, statuses) = reconcile(&seed, Some(&snapshot));
        Catalog {
            seed,
            categories,
            statuses,
            store,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    /// Item names of one category, if it exists.
    pub fn items_in(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(|v| v.as_slice())
    }

    /// Status of an item; items never touched report 未着手.
    pub fn status_of(&self, name: &str) -> HobbyStatus {
        self.statuses.get(name).copied().unwrap_or_default()
    }

    pub fn contains_item(&self, name: &str) -> bool {
        self.statuses.contains_key(name)
    }

    /// The category currently holding `name`, if any.
    pub fn owning_category(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, items)| items.iter().any(|i| i == name))
            .map(|(category, _)| category.as_str())
    }

    /// The status index as a flat list: the shape of the export document.
    pub fn export_items(&self) -> Vec<HobbyItem> {
        self.statuses
            .iter()
            .map(|(name, status)| HobbyItem::new(name.clone(), *status))
            .collect()
    }

    /// The injected store, readable for assertions and diagnostics.
    pub fn store(&self) -> &dyn PersistedStore {
        self.store.as_ref()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add an item to a category, creating the category if needed, and set
    /// its status. Adding a name its category already holds is an idempotent
    /// status update; a name held by a *different* category is rejected so a
    /// status can never alias two items.
    ///
    /// Persists the custom-category diff against the seed.
    pub fn add_item(
        &mut self,
        name: &str,
        category: &str,
        status: HobbyStatus,
    ) -> Result<(), CatalogError> {
        let name = name.trim();
        let category = category.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if category.is_empty() {
            return Err(CatalogError::EmptyCategory);
        }
        if let Some(owner) = self.owning_category(name)
            && owner != category
        {
            return Err(CatalogError::DuplicateItem {
                name: name.to_string(),
                category: owner.to_string(),
            });
        }

        let inserted_category = !self.categories.contains_key(category);
        let items = self.categories.entry(category.to_string()).or_default();
        if !items.iter().any(|i| i == name) {
            items.push(name.to_string());
            collate::sort_dedup(items);
        }
        if inserted_category {
            self.categories.sort_by(|a, _, b, _| collate::compare(a, b));
        }
        self.statuses.insert(name.to_string(), status);

        let custom = self.custom_groups();
        snapshot::save_custom(self.store.as_mut(), &custom)?;
        Ok(())
    }

    /// Set the status of an existing item. Unknown names are a validation
    /// error; silently inventing a category-less item would break the index
    /// invariant.
    ///
    /// Persists every status that has left 未着手.
    pub fn set_status(&mut self, name: &str, status: HobbyStatus) -> Result<(), CatalogError> {
        let slot = self
            .statuses
            .get_mut(name)
            .ok_or_else(|| CatalogError::UnknownItem(name.to_string()))?;
        *slot = status;

        let completed = self.completed_items();
        snapshot::save_completed(self.store.as_mut(), &completed)?;
        Ok(())
    }

    /// Replace the whole model with the given items: their names become the
    /// new universe. The category index is rebuilt by looking each name up in
    /// the pre-import index; names no category owns land in 未分類.
    ///
    /// The caller validates the document shape before calling; the replace
    /// itself cannot fail and touches no persisted key.
    pub fn import_items(&mut self, items: Vec<HobbyItem>) {
        let mut categories: CategoryIndex = IndexMap::new();
        let mut statuses: StatusIndex = BTreeMap::new();

        for item in items {
            let owner = self
                .owning_category(&item.name)
                .unwrap_or(UNCATEGORIZED)
                .to_string();
            let slot = categories.entry(owner).or_default();
            if !slot.iter().any(|i| *i == item.name) {
                slot.push(item.name.clone());
            }
            statuses.insert(item.name, item.status);
        }

        for items in categories.values_mut() {
            collate::sort_dedup(items);
        }
        categories.sort_by(|a, _, b, _| collate::compare(a, b));

        self.categories = categories;
        self.statuses = statuses;
    }

    /// Write both documents for the current model state. Used after a bulk
    /// replace, where no single mutation produced the side effect.
    pub fn persist(&mut self) -> Result<(), CatalogError> {
        let completed = self.completed_items();
        snapshot::save_completed(self.store.as_mut(), &completed)?;
        let custom = self.custom_groups();
        snapshot::save_custom(self.store.as_mut(), &custom)?;
        Ok(())
    }

    /// Remove both persisted keys and rebuild the pristine seed model.
    pub fn reset(&mut self) -> Result<(), CatalogError> {
        self.store.remove(COMPLETED_KEY)?;
        self.store.remove(CUSTOM_KEY)?;
        let (categories, statuses) = reconcile(&self.seed, None);
        self.categories = categories;
        self.statuses = statuses;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Persistence projections
    // -----------------------------------------------------------------------

    /// Items whose status has left 未着手: the persisted completed set.
    fn completed_items(&self) -> Vec<HobbyItem> {
        self.statuses
            .iter()
            .filter(|(_, status)| **status != HobbyStatus::NotStarted)
            .map(|(name, status)| HobbyItem::new(name.clone(), *status))
            .collect()
    }

    /// The category diff against the seed: whole non-seed categories plus
    /// user-added items inside seed categories.
    fn custom_groups(&self) -> Vec<HobbyGroup> {
        let mut groups = Vec::new();
        for (category, items) in &self.categories {
            let custom_items: Vec<String> = match self.seed.items_of(category) {
                None => items.clone(),
                Some(seed_items) => items
                    .iter()
                    .filter(|i| !seed_items.iter().any(|s| s == *i))
                    .cloned()
                    .collect(),
            };
            if !custom_items.is_empty() {
                groups.push(HobbyGroup {
                    category: category.clone(),
                    items: custom_items,
                });
            }
        }
        groups
    }
}
