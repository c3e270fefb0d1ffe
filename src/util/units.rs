//! Units formatting utilities
//!
//! Provides human-readable formatting of elapsed workout time and masking
//! of secret input.

/// Format elapsed seconds as a zero-padded `HH:MM:SS` clock
///
/// Hours are not wrapped at 24.
///
/// # Examples
/// ```
/// use stathlete::util::units::format_clock;
///
/// assert_eq!(format_clock(0), "00:00:00");
/// assert_eq!(format_clock(3725), "01:02:05");
/// assert_eq!(format_clock(90_000), "25:00:00");
/// ```
pub fn format_clock(elapsed_seconds: u64) -> String {
    let hours = elapsed_seconds / 3600;
    let minutes = (elapsed_seconds % 3600) / 60;
    let seconds = elapsed_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Replace every character with a bullet, for secret fields
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(59), "00:00:59");
        assert_eq!(format_clock(60), "00:01:00");
        assert_eq!(format_clock(65), "00:01:05");
        assert_eq!(format_clock(3599), "00:59:59");
        assert_eq!(format_clock(3725), "01:02:05");
        assert_eq!(format_clock(86_400), "24:00:00");
        assert_eq!(format_clock(360_000), "100:00:00");
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("pw1"), "•••");
        assert_eq!(mask("héllo"), "•••••");
    }
}
