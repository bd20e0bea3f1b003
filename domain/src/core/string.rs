//! String utilities for the domain layer.

/// Case-insensitive substring match in either direction.
///
/// `"regulatory"` overlaps `"Regulatory Compliance"` and vice versa.
/// Blank inputs never overlap anything.
pub fn fuzzy_overlaps(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// True if any entry of `needles` fuzzy-overlaps any entry of `haystack`.
pub fn any_overlap(needles: &[String], haystack: &[String]) -> bool {
    needles
        .iter()
        .any(|n| haystack.iter().any(|h| fuzzy_overlaps(n, h)))
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_overlaps_both_directions() {
        assert!(fuzzy_overlaps("regulatory", "Regulatory Compliance"));
        assert!(fuzzy_overlaps("REGULATORY_COMPLIANCE", "regulatory"));
        assert!(!fuzzy_overlaps("pricing", "regulatory"));
    }

    #[test]
    fn test_fuzzy_overlaps_blank_never_matches() {
        assert!(!fuzzy_overlaps("", "regulatory"));
        assert!(!fuzzy_overlaps("regulatory", "   "));
    }

    #[test]
    fn test_any_overlap() {
        let areas = vec!["clinical_research".to_string()];
        let expertise = vec!["pricing".to_string(), "clinical".to_string()];
        assert!(any_overlap(&areas, &expertise));
        assert!(!any_overlap(&areas, &["pricing".to_string()]));
        assert!(!any_overlap(&[], &expertise));
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is 2 bytes; cutting inside it backs up to the boundary
        assert_eq!(truncate("ééééé", 6), "é...");
    }
}
