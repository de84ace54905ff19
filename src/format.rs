//! Time display formatting.

/// Converts a second count into a user-facing `m:ss` string, e.g. `0:42` or
/// `2:38`. Minutes are unpadded and never wrap at 60. Fractions truncate.
///
/// Non-finite input (an unready resource reports `NaN`, live streams report
/// infinity) yields an empty string; callers wanting a fallback label check
/// for emptiness.
pub fn seconds_to_display(seconds: f64) -> String {
    if !seconds.is_finite() {
        return String::new();
    }
    let total = seconds as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(seconds_to_display(0.0), "0:00");
        assert_eq!(seconds_to_display(7.0), "0:07");
        assert_eq!(seconds_to_display(65.0), "1:05");
        assert_eq!(seconds_to_display(3599.0), "59:59");
    }

    #[test]
    fn minutes_do_not_wrap_at_sixty() {
        assert_eq!(seconds_to_display(3600.0), "60:00");
        assert_eq!(seconds_to_display(7325.0), "122:05");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(seconds_to_display(65.94), "1:05");
    }

    #[test]
    fn non_finite_input_is_empty_and_does_not_panic() {
        assert_eq!(seconds_to_display(f64::NAN), "");
        assert_eq!(seconds_to_display(f64::INFINITY), "");
    }
}
