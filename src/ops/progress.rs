use serde::Serialize;

use crate::model::catalog::Catalog;
use crate::model::item::{HobbyItem, HobbyStatus};

/// Counts reduced over an item list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
}

impl Progress {
    /// Completion percentage in [0, 100]. An empty item set is 0, never NaN.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Reduce an item list to its progress counts.
pub fn overall(items: &[HobbyItem]) -> Progress {
    let mut progress = Progress {
        total: items.len(),
        ..Default::default()
    };
    for item in items {
        match item.status {
            HobbyStatus::Done => progress.completed += 1,
            HobbyStatus::InProgress => progress.in_progress += 1,
            HobbyStatus::NotStarted => {}
        }
    }
    progress
}

/// Progress restricted to one category's item set. An unknown category is
/// empty, which reports 0%.
pub fn for_category(catalog: &Catalog, category: &str) -> Progress {
    let Some(items) = catalog.items_in(category) else {
        return Progress::default();
    };
    let list: Vec<HobbyItem> = items
        .iter()
        .map(|name| HobbyItem::new(name.clone(), catalog.status_of(name)))
        .collect();
    overall(&list)
}
