use serde::Serialize;

use crate::ops::filter::CategoryView;
use crate::ops::progress::Progress;
use crate::util::unicode::{display_width, pad_to_width};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProgressJson {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub percent: f64,
}

pub fn progress_to_json(progress: &Progress) -> ProgressJson {
    ProgressJson {
        total: progress.total,
        completed: progress.completed,
        in_progress: progress.in_progress,
        percent: progress.percent(),
    }
}

#[derive(Serialize)]
pub struct CategoryProgressJson {
    pub category: String,
    #[serde(flatten)]
    pub progress: ProgressJson,
}

#[derive(Serialize)]
pub struct ProgressReportJson {
    pub overall: ProgressJson,
    pub categories: Vec<CategoryProgressJson>,
}

#[derive(Serialize)]
pub struct CategoryInfoJson {
    pub category: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Format one category block of a listing: a header with the per-category
/// completion count, then one aligned line per item.
pub fn format_category(view: &CategoryView, progress: &Progress) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "{}  [{}/{} 完了]",
        view.category, progress.completed, progress.total
    ));
    let width = view
        .items
        .iter()
        .map(|item| display_width(&item.name))
        .max()
        .unwrap_or(0);
    for item in &view.items {
        lines.push(format!(
            "  {}  {}",
            pad_to_width(&item.name, width),
            item.status.label()
        ));
    }
    lines
}

/// A fixed-width completion bar, filled cells for the completed share.
pub fn progress_bar(progress: &Progress, cells: usize) -> String {
    let filled = (progress.percent() / 100.0 * cells as f64).round() as usize;
    let filled = filled.min(cells);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(cells - filled))
}

/// One-line progress summary, e.g. `[####------] 8/20 完了 (3 進行中)`.
pub fn format_progress_line(progress: &Progress) -> String {
    format!(
        "{} {}/{} 完了 ({} 進行中)",
        progress_bar(progress, 10),
        progress.completed,
        progress.total,
        progress.in_progress
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::{HobbyItem, HobbyStatus};

    fn sample_view() -> CategoryView {
        CategoryView {
            category: "ゲーム".to_string(),
            items: vec![
                HobbyItem::new("チェス", HobbyStatus::InProgress),
                HobbyItem::new("将棋", HobbyStatus::Done),
            ],
        }
    }

    #[test]
    fn test_format_category_header_and_alignment() {
        let progress = Progress {
            total: 2,
            completed: 1,
            in_progress: 1,
        };
        let lines = format_category(&sample_view(), &progress);
        assert_eq!(lines[0], "ゲーム  [1/2 完了]");
        // チェス is 6 cells, 将棋 is 4: the status column lines up.
        assert_eq!(lines[1], "  チェス  進行中");
        assert_eq!(lines[2], "  将棋    完了");
    }

    #[test]
    fn test_progress_bar_extremes() {
        let none = Progress {
            total: 4,
            completed: 0,
            in_progress: 0,
        };
        let all = Progress {
            total: 4,
            completed: 4,
            in_progress: 0,
        };
        let empty = Progress::default();
        assert_eq!(progress_bar(&none, 10), "[----------]");
        assert_eq!(progress_bar(&all, 10), "[##########]");
        assert_eq!(progress_bar(&empty, 10), "[----------]");
    }

    #[test]
    fn test_format_progress_line() {
        let progress = Progress {
            total: 4,
            completed: 2,
            in_progress: 1,
        };
        assert_eq!(
            format_progress_line(&progress),
            "[#####-----] 2/4 完了 (1 進行中)"
        );
    }
}
