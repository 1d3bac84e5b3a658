use serde::Serialize;

use crate::model::catalog::Catalog;
use crate::model::item::{HobbyItem, HobbyStatus};
use crate::util::collate;

/// An active set of view filters. The default means "show everything".
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    /// Case-insensitive substring match on item names. Empty matches all.
    pub search: String,
    /// Show only this category. None = all.
    pub category: Option<String>,
    /// Show only items with this status. None = all.
    pub status: Option<HobbyStatus>,
}

/// One category of the filtered projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub category: String,
    pub items: Vec<HobbyItem>,
}

/// Project the catalog through the filters. Pure: same inputs, same output,
/// and the catalog is never mutated. Categories with no surviving items are
/// dropped; survivors come back in collation order.
pub fn apply(catalog: &Catalog, filter: &ViewFilter) -> Vec<CategoryView> {
    let needle = filter.search.to_lowercase();
    let mut views = Vec::new();

    for (category, items) in catalog.categories() {
        if let Some(only) = &filter.category
            && category != only
        {
            continue;
        }

        let matching: Vec<HobbyItem> = items
            .iter()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .map(|name| HobbyItem::new(name.clone(), catalog.status_of(name)))
            .filter(|item| filter.status.map_or(true, |s| s == item.status))
            .collect();

        if matching.is_empty() {
            continue;
        }
        views.push(CategoryView {
            category: category.clone(),
            items: matching,
        });
    }

    views.sort_by(|a, b| collate::compare(&a.category, &b.category));
    views
}
