//! Formatting helpers for presenting scores.

/// Compact `n/max` label used on the timeline strip.
pub fn format_fraction(score: usize, max: usize) -> String {
    format!("{score}/{max}")
}

/// Spaced `n / max` label used in the summary and the detail overlay.
pub fn format_score(score: usize, max: usize) -> String {
    format!("{score} / {max}")
}

/// Width for a CSS progress bar, e.g. `"37.5%"`. Input is clamped to `[0, 1]`.
pub fn format_percent(fraction: f64) -> String {
    let pct = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0) * 100.0
    } else {
        0.0
    };
    let rounded = (pct * 10.0).round() / 10.0;
    format!("{rounded}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_labels() {
        assert_eq!(format_fraction(3, 10), "3/10");
        assert_eq!(format_score(0, 100), "0 / 100");
    }

    #[test]
    fn percent_is_clamped_and_rounded() {
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(0.01), "1%");
        assert_eq!(format_percent(0.375), "37.5%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(1.7), "100%");
        assert_eq!(format_percent(f64::NAN), "0%");
    }
}
