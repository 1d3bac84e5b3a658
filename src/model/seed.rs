use serde::Deserialize;

use super::item::HobbyGroup;

/// The catalog document compiled into the binary.
const BUILTIN_SEED: &str = include_str!("../templates/hobbies.json");

/// The read-only starting catalog: `{"hobbies": [{"category", "items"}]}`.
/// Loaded once; never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedCatalog {
    pub hobbies: Vec<HobbyGroup>,
}

impl SeedCatalog {
    /// The built-in catalog. The embedded document is covered by a test, so
    /// the parse cannot fail at runtime.
    pub fn builtin() -> SeedCatalog {
        serde_json::from_str(BUILTIN_SEED).expect("embedded hobbies.json parses")
    }

    /// Parse a seed document from JSON text (used for the config override).
    pub fn from_json(text: &str) -> Result<SeedCatalog, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The seed's item set for `category`, if the seed has that category.
    pub fn items_of(&self, category: &str) -> Option<&[String]> {
        self.hobbies
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.items.as_slice())
    }
}
