// Axis range parsing

/// Manual bounds for a vertical axis. `None` means auto-scale.
pub type AxisRange = Option<(f64, f64)>;

/// Parse `"<low>-<high>"` into a pair of bounds.
///
/// Anything other than exactly two numeric parts around a single `-` yields
/// `None`. Bounds are returned as given, so `"200-100"` stays inverted.
pub fn parse_range(text: &str) -> AxisRange {
    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 2 {
        return None;
    }

    let low = parts[0].trim().parse::<f64>().ok()?;
    let high = parts[1].trim().parse::<f64>().ok()?;
    Some((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("100-200"), Some((100.0, 200.0)));
        assert_eq!(parse_range(" 50 - 150 "), Some((50.0, 150.0)));
        assert_eq!(parse_range("0.5-1.25"), Some((0.5, 1.25)));
    }

    #[test]
    fn test_parse_range_rejects_malformed() {
        assert_eq!(parse_range(""), None);
        assert_eq!(parse_range("100"), None);
        assert_eq!(parse_range("abc-200"), None);
        assert_eq!(parse_range("100-"), None);
        assert_eq!(parse_range("1-2-3"), None);
        // a leading minus adds a third part
        assert_eq!(parse_range("-5-10"), None);
    }

    #[test]
    fn test_parse_range_keeps_inverted_bounds() {
        assert_eq!(parse_range("200-100"), Some((200.0, 100.0)));
    }
}
