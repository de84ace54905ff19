//! Progress, buffer, and seek arithmetic. All pure; degenerate inputs (zero
//! or unknown duration) flow through as NaN/infinity rather than erroring,
//! leaving a degenerate width string for the styling layer to ignore.

/// One buffered interval reported by the media element. The element keeps its
/// ranges disjoint and ordered by start time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

/// Fraction of the media already played, as a percentage.
pub fn elapsed_percent(current_time: f64, duration: f64) -> f64 {
    current_time / duration * 100.0
}

/// Renders a percentage as a CSS width value. NaN input renders as `NaN%`,
/// which the platform discards as an invalid style.
pub fn percent_width(percent: f64) -> String {
    format!("{percent}%")
}

/// Scans the buffered ranges from the most recently added one backwards and
/// reports the end of the first range starting at or before the playback
/// position, as a percentage of the duration. Earlier ranges are ignored even
/// if they would also qualify. `None` when nothing qualifies yet.
pub fn buffered_percent(ranges: &[TimeRange], current_time: f64, duration: f64) -> Option<f64> {
    ranges
        .iter()
        .rev()
        .find(|range| range.start <= current_time)
        .map(|range| range.end / duration * 100.0)
}

/// Maps a click at `offset_x` within a track of `track_width` onto the media
/// timeline. A click on the right edge yields exactly the duration; no other
/// clamping is applied.
pub fn seek_target(offset_x: f64, track_width: f64, duration: f64) -> f64 {
    offset_x / track_width * duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_percent_is_a_plain_ratio() {
        assert_eq!(elapsed_percent(30.0, 120.0), 25.0);
        assert_eq!(elapsed_percent(120.0, 120.0), 100.0);
    }

    #[test]
    fn unknown_duration_propagates_into_the_width_string() {
        assert_eq!(percent_width(elapsed_percent(0.0, 0.0)), "NaN%");
        assert_eq!(percent_width(elapsed_percent(5.0, 0.0)), "inf%");
        assert_eq!(percent_width(50.0), "50%");
    }

    #[test]
    fn buffer_scan_takes_the_latest_range_covering_the_position() {
        let ranges = [
            TimeRange {
                start: 0.0,
                end: 2.0,
            },
            TimeRange {
                start: 5.0,
                end: 8.0,
            },
        ];
        // (5,8) is checked first and 5 <= 6, so its end wins.
        assert_eq!(buffered_percent(&ranges, 6.0, 10.0), Some(80.0));
        // (5,8) fails at t=1; the scan falls back to (0,2).
        assert_eq!(buffered_percent(&ranges, 1.0, 10.0), Some(20.0));
    }

    #[test]
    fn buffer_scan_reports_nothing_when_no_range_qualifies() {
        let ranges = [TimeRange {
            start: 5.0,
            end: 8.0,
        }];
        assert_eq!(buffered_percent(&ranges, 1.0, 10.0), None);
        assert_eq!(buffered_percent(&[], 1.0, 10.0), None);
    }

    #[test]
    fn seek_target_scales_the_click_ratio() {
        assert_eq!(seek_target(200.0, 400.0, 100.0), 50.0);
        // Right edge maps to the full duration.
        assert_eq!(seek_target(400.0, 400.0, 100.0), 100.0);
    }
}
