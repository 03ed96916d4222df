//! Centralized number formatting for board cells.
//!
//! All metric display formatting goes through this module so every board
//! renders ratios and KDA values the same way.

/// Format a ratio value (conceptually 0–100) with 1 decimal place and a
/// percent suffix.
///
/// # Examples
/// ```
/// use armory_types::formatting::format_pct;
/// assert_eq!(format_pct(53.24), "53.2%");
/// assert_eq!(format_pct(0.0), "0.0%");
/// ```
pub fn format_pct(n: f64) -> String {
    format!("{:.1}%", n)
}

/// Format a KDA value with 2 decimal places.
///
/// # Examples
/// ```
/// use armory_types::formatting::format_kda;
/// assert_eq!(format_kda(3.456), "3.46");
/// ```
pub fn format_kda(n: f64) -> String {
    format!("{:.2}", n)
}

/// Parse a formatted percent cell back to its numeric value.
///
/// Returns `None` when the cell has no `%` suffix or the number fails to
/// parse (e.g. the `-` placeholder of an empty tier).
///
/// # Examples
/// ```
/// use armory_types::formatting::parse_pct;
/// assert_eq!(parse_pct("53.2%"), Some(53.2));
/// assert_eq!(parse_pct("-"), None);
/// ```
pub fn parse_pct(cell: &str) -> Option<f64> {
    cell.strip_suffix('%')?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(53.24), "53.2%");
        assert_eq!(format_pct(53.25), "53.2%"); // ties-to-even on the half
        assert_eq!(format_pct(47.96), "48.0%");
        assert_eq!(format_pct(100.0), "100.0%");
        assert_eq!(format_pct(0.0), "0.0%");
    }

    #[test]
    fn test_format_kda() {
        assert_eq!(format_kda(3.456), "3.46");
        assert_eq!(format_kda(2.0), "2.00");
        assert_eq!(format_kda(0.0), "0.00");
    }

    #[test]
    fn test_parse_pct() {
        assert_eq!(parse_pct("53.2%"), Some(53.2));
        assert_eq!(parse_pct("0.0%"), Some(0.0));
        assert_eq!(parse_pct("-"), None);
        assert_eq!(parse_pct("53.2"), None);
        assert_eq!(parse_pct("abc%"), None);
    }
}
