//! Scorer: integer match percentage for one industry.

/// `round(100 * existing / total)` with halves rounded up, computed in integers.
///
/// An industry with no required skills scores 0 rather than producing a
/// non-numeric value.
pub fn match_percentage(existing: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let existing = existing.min(total);
    ((existing * 100 + total / 2) / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_ratios() {
        assert_eq!(match_percentage(3, 10), 30);
        assert_eq!(match_percentage(1, 1), 100);
        assert_eq!(match_percentage(0, 7), 0);
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(match_percentage(1, 3), 33);
        assert_eq!(match_percentage(2, 3), 67);
        assert_eq!(match_percentage(1, 6), 17);
    }

    #[test]
    fn test_half_rounds_up() {
        // 12.5 and 37.5
        assert_eq!(match_percentage(1, 8), 13);
        assert_eq!(match_percentage(3, 8), 38);
        // 0.5
        assert_eq!(match_percentage(1, 200), 1);
    }

    #[test]
    fn test_zero_total_scores_zero() {
        assert_eq!(match_percentage(0, 0), 0);
    }

    #[test]
    fn test_bounded_and_extremes_are_exact() {
        for total in 1..=40 {
            assert_eq!(match_percentage(0, total), 0);
            assert_eq!(match_percentage(total, total), 100);
            for existing in 1..total {
                let score = match_percentage(existing, total);
                assert!(score > 0 || existing * 200 < total);
                assert!(score <= 100);
            }
        }
    }
}
