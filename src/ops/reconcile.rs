use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::model::item::HobbyStatus;
use crate::model::seed::SeedCatalog;
use crate::store::PersistedSnapshot;
use crate::util::collate;

/// Category name → sorted item names. The map itself is kept sorted by
/// category name.
pub type CategoryIndex = IndexMap<String, Vec<String>>;

/// Item name → status. Every item in the category index has an entry.
pub type StatusIndex = BTreeMap<String, HobbyStatus>;

/// Merge the seed catalog and a persisted snapshot into a consistent pair of
/// indices. An absent snapshot yields the pure seed model.
///
/// Custom categories union into same-named seed categories (duplicates have
/// no effect); persisted statuses whose item no longer exists anywhere are
/// dropped. The merge is idempotent: feeding the result back in with the same
/// snapshot changes nothing.
pub fn reconcile(
    seed: &SeedCatalog,
    snapshot: Option<&PersistedSnapshot>,
) -> (CategoryIndex, StatusIndex) {
    let mut categories: CategoryIndex = IndexMap::new();

    for group in &seed.hobbies {
        let entry = categories.entry(group.category.clone()).or_default();
        entry.extend(group.items.iter().cloned());
    }

    if let Some(snapshot) = snapshot {
        for group in &snapshot.custom {
            let entry = categories.entry(group.category.clone()).or_default();
            entry.extend(group.items.iter().cloned());
        }
    }

    for items in categories.values_mut() {
        collate::sort_dedup(items);
    }
    categories.sort_by(|a, _, b, _| collate::compare(a, b));

    let mut statuses: StatusIndex = BTreeMap::new();
    for items in categories.values() {
        for name in items {
            statuses.insert(name.clone(), HobbyStatus::NotStarted);
        }
    }

    if let Some(snapshot) = snapshot {
        for item in &snapshot.completed {
            // A status for an item that exists in no category has nowhere to
            // live; it is dropped without complaint.
            if let Some(slot) = statuses.get_mut(&item.name) {
                *slot = item.status;
            }
        }
    }

    (categories, statuses)
}
