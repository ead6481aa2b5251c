//! Filesystem-safe filename fragments.

/// Maximum length of a sanitized name, in characters.
const MAX_LEN: usize = 200;

/// Characters that are not portable in filenames across filesystems.
const RESERVED: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Derive a filesystem-safe filename fragment from a display name.
///
/// Reserved characters and control characters become spaces, whitespace
/// runs collapse to a single underscore, trailing dots are stripped
/// (Windows rejects them), and the result is capped at 200 characters.
/// Pure: the same input always yields the same output.
#[must_use]
pub fn safe_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if RESERVED.contains(&c) || c.is_control() {
                ' '
            } else {
                c
            }
        })
        .collect();

    let mut joined: String = replaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .take(MAX_LEN)
        .collect();

    while joined.ends_with('.') {
        joined.pop();
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_path_separators() {
        assert_eq!(safe_filename("Report/2"), "Report_2");
        assert_eq!(safe_filename(r"a\b"), "a_b");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(safe_filename("General  Orders \t 2024"), "General_Orders_2024");
    }

    #[test]
    fn test_strips_edge_whitespace_and_trailing_dots() {
        assert_eq!(safe_filename("  Policy  "), "Policy");
        assert_eq!(safe_filename("Appendix."), "Appendix");
        assert_eq!(safe_filename("Appendix..."), "Appendix");
    }

    #[test]
    fn test_strips_control_characters() {
        let out = safe_filename("line\u{0}one\ntwo");
        assert!(!out.chars().any(char::is_control));
        assert_eq!(out, "line_one_two");
    }

    #[test]
    fn test_length_is_bounded() {
        let long = "x".repeat(500);
        assert_eq!(safe_filename(&long).chars().count(), 200);

        // Multibyte input must truncate on a character boundary.
        let wide = "ü".repeat(500);
        assert_eq!(safe_filename(&wide).chars().count(), 200);
    }

    #[test]
    fn test_is_deterministic() {
        let name = "SOP: Use of Force / 2023?";
        assert_eq!(safe_filename(name), safe_filename(name));
    }

    #[test]
    fn test_all_reserved_input_becomes_empty() {
        assert_eq!(safe_filename("<>:\"/\\|?*"), "");
    }
}
