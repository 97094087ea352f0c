//! Guest-count parsing
//!
//! Turns a free-form guest description such as "2 Adults, 1 Child" into an
//! integer headcount. This is a best-effort heuristic, not a validator:
//! malformed input never errors, it just falls back to the minimum occupancy
//! of one.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)").unwrap());

/// Parse a guest description into a headcount.
///
/// Splits on commas, takes the first whitespace-delimited chunk of each
/// segment and reads its leading integer. Segments with no parseable leading
/// integer contribute 0. A zero or absent total is coerced to 1, since a
/// booking always occupies at least one unit of capacity.
pub fn parse_guest_count(guest_spec: Option<&str>) -> i32 {
    let total: i64 = guest_spec
        .unwrap_or("")
        .split(',')
        .filter_map(|segment| {
            let first = segment.split_whitespace().next()?;
            let digits = LEADING_INT.captures(first)?.get(1)?.as_str();
            digits.parse::<i64>().ok()
        })
        .sum();

    if total <= 0 {
        1
    } else {
        total.min(i32::MAX as i64) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_segments() {
        assert_eq!(parse_guest_count(Some("2 Adults, 1 Child")), 3);
        assert_eq!(parse_guest_count(Some("10 Adults")), 10);
        assert_eq!(parse_guest_count(Some("5 Adults, 2 Children")), 7);
    }

    #[test]
    fn empty_or_absent_defaults_to_one() {
        assert_eq!(parse_guest_count(None), 1);
        assert_eq!(parse_guest_count(Some("")), 1);
        assert_eq!(parse_guest_count(Some("   ")), 1);
    }

    #[test]
    fn non_numeric_segments_contribute_zero() {
        // No leading integer anywhere -> fallback to 1
        assert_eq!(parse_guest_count(Some("VIP guest")), 1);
        // Mixed: only the numeric segment counts
        assert_eq!(parse_guest_count(Some("VIP guest, 4 Adults")), 4);
    }

    #[test]
    fn integer_glued_to_text_still_parses() {
        assert_eq!(parse_guest_count(Some("3Adults")), 3);
        assert_eq!(parse_guest_count(Some("2pax, 1kid")), 3);
    }

    #[test]
    fn zero_total_coerced_to_one() {
        assert_eq!(parse_guest_count(Some("0 Adults")), 1);
    }
}
