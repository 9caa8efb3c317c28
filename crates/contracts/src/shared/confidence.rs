//! Confidence formatting shared by the UI and its tests.

/// Convert a class probability (0.0..=1.0) into an integer percentage.
///
/// Rounds half away from zero, so 0.125 becomes 13%. Out-of-range inputs
/// are clamped rather than rejected; the wire contract already guarantees
/// the range.
pub fn confidence_percent(probability: f64) -> u8 {
    let pct = (probability * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_nearest_percent() {
        assert_eq!(confidence_percent(0.87), 87);
        assert_eq!(confidence_percent(0.5), 50);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(confidence_percent(0.125), 13);
        assert_eq!(confidence_percent(0.005), 1);
        assert_eq!(confidence_percent(0.995), 100);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(confidence_percent(-0.2), 0);
        assert_eq!(confidence_percent(1.7), 100);
    }
}
