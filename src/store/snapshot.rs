use crate::model::item::{HobbyGroup, HobbyItem};

use super::{COMPLETED_KEY, CUSTOM_KEY, PersistedStore, StoreError};

/// Everything the store remembers between sessions: the two documents behind
/// the two logical keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSnapshot {
    /// Items whose status has left 未着手.
    pub completed: Vec<HobbyItem>,
    /// Categories and items the user added on top of the seed.
    pub custom: Vec<HobbyGroup>,
}

/// Read both keys. A missing or unparsable document counts as absent; load
/// never fails, it falls back to the empty snapshot.
pub fn load_snapshot(store: &dyn PersistedStore) -> PersistedSnapshot {
    let completed = store
        .get(COMPLETED_KEY)
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default();
    let custom = store
        .get(CUSTOM_KEY)
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default();
    PersistedSnapshot { completed, custom }
}

/// Write the completed-statuses document.
pub fn save_completed(
    store: &mut dyn PersistedStore,
    items: &[HobbyItem],
) -> Result<(), StoreError> {
    store.put(COMPLETED_KEY, &serde_json::to_string(items)?)
}

/// Write the custom-categories document.
pub fn save_custom(
    store: &mut dyn PersistedStore,
    groups: &[HobbyGroup],
) -> Result<(), StoreError> {
    store.put(CUSTOM_KEY, &serde_json::to_string(groups)?)
}
