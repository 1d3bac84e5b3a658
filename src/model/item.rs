use serde::{Deserialize, Serialize};

/// Completion status of a hobby item. The serialized form is the wire label
/// used by the persisted store and the export/import document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HobbyStatus {
    #[default]
    #[serde(rename = "未着手")]
    NotStarted,
    #[serde(rename = "進行中")]
    InProgress,
    #[serde(rename = "完了")]
    Done,
}

impl HobbyStatus {
    /// The wire label, also used in listings.
    pub fn label(self) -> &'static str {
        match self {
            HobbyStatus::NotStarted => "未着手",
            HobbyStatus::InProgress => "進行中",
            HobbyStatus::Done => "完了",
        }
    }

    /// Parse a command-line argument: the wire label or an ASCII alias.
    pub fn parse_arg(s: &str) -> Option<HobbyStatus> {
        match s {
            "未着手" | "not-started" | "todo" => Some(HobbyStatus::NotStarted),
            "進行中" | "in-progress" | "doing" => Some(HobbyStatus::InProgress),
            "完了" | "done" => Some(HobbyStatus::Done),
            _ => None,
        }
    }
}

/// A single trackable hobby, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HobbyItem {
    pub name: String,
    pub status: HobbyStatus,
}

impl HobbyItem {
    pub fn new(name: impl Into<String>, status: HobbyStatus) -> HobbyItem {
        HobbyItem {
            name: name.into(),
            status,
        }
    }
}

/// A named category with its ordered item names. This is the shape of seed
/// catalog entries and of the persisted custom-category document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HobbyGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_labels() {
        assert_eq!(
            serde_json::to_string(&HobbyStatus::Done).unwrap(),
            "\"完了\""
        );
        let status: HobbyStatus = serde_json::from_str("\"進行中\"").unwrap();
        assert_eq!(status, HobbyStatus::InProgress);
    }

    #[test]
    fn test_status_rejects_unknown_label() {
        assert!(serde_json::from_str::<HobbyStatus>("\"completed\"").is_err());
    }

    #[test]
    fn test_parse_arg_label_and_alias() {
        assert_eq!(HobbyStatus::parse_arg("完了"), Some(HobbyStatus::Done));
        assert_eq!(HobbyStatus::parse_arg("done"), Some(HobbyStatus::Done));
        assert_eq!(
            HobbyStatus::parse_arg("in-progress"),
            Some(HobbyStatus::InProgress)
        );
        assert_eq!(HobbyStatus::parse_arg("finished"), None);
    }

    #[test]
    fn test_default_is_not_started() {
        assert_eq!(HobbyStatus::default(), HobbyStatus::NotStarted);
    }

    #[test]
    fn test_item_document_shape() {
        let item = HobbyItem::new("将棋", HobbyStatus::Done);
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"name":"将棋","status":"完了"}"#
        );
    }
}
