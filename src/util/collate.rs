use std::cmp::Ordering;

/// Compare two names with the catalog's collation: case-folded code-point
/// order first, raw code-point order as the tie-break. Every index and view
/// in the crate sorts with this so listings stay stable across merges.
pub fn compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Sort item names in place and drop exact duplicates.
pub fn sort_dedup(names: &mut Vec<String>) {
    names.sort_by(|a, b| compare(a, b));
    names.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folds_before_codepoint() {
        // Plain byte order would put "Banana" before "apple".
        let mut names = vec!["Banana".to_string(), "apple".to_string()];
        sort_dedup(&mut names);
        assert_eq!(names, vec!["apple", "Banana"]);
    }

    #[test]
    fn test_kana_orders_by_codepoint() {
        let mut names = vec!["ピアノ".to_string(), "ギター".to_string(), "カラオケ".to_string()];
        sort_dedup(&mut names);
        assert_eq!(names, vec!["カラオケ", "ギター", "ピアノ"]);
    }

    #[test]
    fn test_dedup_exact_only() {
        let mut names = vec![
            "将棋".to_string(),
            "将棋".to_string(),
            "囲碁".to_string(),
        ];
        sort_dedup(&mut names);
        assert_eq!(names, vec!["囲碁", "将棋"]);
    }

    #[test]
    fn test_total_order_on_case_variants() {
        // Case variants are not duplicates, and their order is deterministic.
        assert_eq!(compare("chess", "Chess"), Ordering::Greater);
        assert_eq!(compare("Chess", "chess"), Ordering::Less);
        assert_eq!(compare("chess", "chess"), Ordering::Equal);
    }
}
