//! Pluralization utilities.

/// Return "s" suffix for plural counts
#[inline]
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "sidebar")` -> `"1 sidebar"`
/// - `plural_count(4, "sidebar")` -> `"4 sidebars"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "link"), "0 links");
        assert_eq!(plural_count(1, "link"), "1 link");
        assert_eq!(plural_count(12, "link"), "12 links");
    }
}
