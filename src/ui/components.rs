//! Pure helpers behind the rendered widgets.

/// Meter position as a gauge ratio. Displayed range is [1, 5]; unset is 0.
pub fn meter_ratio(value: Option<u8>) -> f64 {
    match value {
        Some(v) => f64::from(v.min(5)) / 5.0,
        None => 0.0,
    }
}

/// Mask a password for display, one bullet per character.
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

/// Compact display for large guess counts (1.2k, 3.4M, ...)
pub fn format_guesses(guesses: u64) -> String {
    match guesses {
        g if g >= 1_000_000_000_000 => format!("{:.1}T", g as f64 / 1e12),
        g if g >= 1_000_000_000 => format!("{:.1}B", g as f64 / 1e9),
        g if g >= 1_000_000 => format!("{:.1}M", g as f64 / 1e6),
        g if g >= 1_000 => format!("{:.1}k", g as f64 / 1e3),
        g => g.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_ratio_maps_displayed_range() {
        assert_eq!(meter_ratio(None), 0.0);
        assert_eq!(meter_ratio(Some(1)), 0.2);
        assert_eq!(meter_ratio(Some(5)), 1.0);
        // Defensive clamp; the indicator never writes above 5
        assert_eq!(meter_ratio(Some(9)), 1.0);
    }

    #[test]
    fn mask_counts_chars_not_bytes() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("abc"), "•••");
        assert_eq!(mask("pâté"), "••••");
    }

    #[test]
    fn guess_formatting() {
        assert_eq!(format_guesses(42), "42");
        assert_eq!(format_guesses(1_500), "1.5k");
        assert_eq!(format_guesses(2_000_000), "2.0M");
        assert_eq!(format_guesses(3_000_000_000), "3.0B");
    }
}
