//! Playback time labels

/// Format seconds as `m:ss` for the scrubber labels
///
/// Zero, negative, and non-finite values render as `0:00`. Minutes are not
/// wrapped into hours.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
