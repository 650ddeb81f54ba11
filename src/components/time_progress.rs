use dioxus::prelude::*;

/// Floored playback percentage, clamped to 0-100.
///
/// A zero, negative, or non-finite duration (no metadata yet) reads as 0
/// instead of dividing by zero.
pub fn playback_progress(current_time: f64, duration: f64) -> u8 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0;
    }
    ((current_time / duration) * 100.0).floor().clamp(0.0, 100.0) as u8
}

/// Thin progress gauge pinned to the bottom edge of the video. Purely
/// derived display: the owning widget feeds it a percentage on every
/// timeupdate from the video element.
#[component]
pub fn TimeProgress(percent: u8) -> Element {
    rsx! {
        progress {
            class: "absolute bottom-0 left-0 w-full h-[2px] transition-all duration-300 bg-gray-400/80",
            value: "{percent}",
            max: "100",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_reads_as_zero() {
        assert_eq!(playback_progress(0.0, 0.0), 0);
        assert_eq!(playback_progress(12.0, 0.0), 0);
    }

    #[test]
    fn missing_metadata_reads_as_zero() {
        assert_eq!(playback_progress(3.0, f64::NAN), 0);
        assert_eq!(playback_progress(3.0, f64::INFINITY), 0);
        assert_eq!(playback_progress(3.0, -1.0), 0);
    }

    #[test]
    fn percentage_is_floored() {
        assert_eq!(playback_progress(0.0, 10.0), 0);
        assert_eq!(playback_progress(1.99, 10.0), 19);
        assert_eq!(playback_progress(5.0, 10.0), 50);
    }

    #[test]
    fn percentage_is_clamped_to_100() {
        // currentTime can briefly exceed duration near the end
        assert_eq!(playback_progress(10.5, 10.0), 100);
        assert_eq!(playback_progress(10.0, 10.0), 100);
    }
}
