use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. CJK names are double-width, so a plain
/// character count misaligns the status column.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `s` with trailing spaces to `width` terminal cells. Strings already
/// at or past the width come back unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_double_width() {
        assert_eq!(display_width("将棋"), 4);
        assert_eq!(display_width("Chess"), 5);
    }

    #[test]
    fn test_pad_mixed_width() {
        // Both land on the same column despite different char counts.
        assert_eq!(pad_to_width("将棋", 6), "将棋  ");
        assert_eq!(pad_to_width("Chess", 6), "Chess ");
    }

    #[test]
    fn test_pad_no_truncation() {
        assert_eq!(pad_to_width("サイクリング", 4), "サイクリング");
    }
}
