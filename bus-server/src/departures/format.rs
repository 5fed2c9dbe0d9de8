//! Display formatting for departures.
//!
//! Times are shown as `HH:MM` wall-clock strings and delays as compact
//! status markers with a colour dot, so downstream dashboards can show
//! them without further processing.

/// Platform string used when the API reports none.
pub const PLATFORM_UNKNOWN: &str = "N/A";

const ON_TIME: &str = "\u{1f7e2} On time";

/// Extract the `HH:MM` part of an ISO 8601 departure timestamp.
///
/// Strings without a `T` separator are returned unchanged.
pub fn format_departure_time(raw: &str) -> String {
    match raw.split_once('T') {
        Some((_, rest)) => {
            let time_part = rest.split_once('+').map_or(rest, |(before, _)| before);
            time_part.chars().take(5).collect()
        }
        None => raw.to_string(),
    }
}

/// Render a delay in seconds as a status marker.
///
/// `None` and zero both mean on time. Positive delays get a yellow dot,
/// early departures a green one; durations of a minute or more are
/// shown as minutes with a seconds remainder when there is one.
pub fn format_delay(delay: Option<i64>) -> String {
    let seconds = match delay {
        None | Some(0) => return ON_TIME.to_string(),
        Some(s) => s,
    };

    if seconds > 0 {
        if seconds < 60 {
            format!("\u{1f7e1} +{seconds}s")
        } else {
            let minutes = seconds / 60;
            let remainder = seconds % 60;
            if remainder == 0 {
                format!("\u{1f7e1} +{minutes}min")
            } else {
                format!("\u{1f7e1} +{minutes}min {remainder}s")
            }
        }
    } else {
        let ahead = seconds.abs();
        if ahead < 60 {
            format!("\u{1f7e2} -{ahead}s")
        } else {
            let minutes = ahead / 60;
            let remainder = ahead % 60;
            if remainder == 0 {
                format!("\u{1f7e2} -{minutes}min")
            } else {
                format!("\u{1f7e2} -{minutes}min {remainder}s")
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Late departures are always yellow, early ones always green.
        #[test]
        fn marker_colour_follows_sign(delay in -86_400i64..=86_400) {
            let marker = format_delay(Some(delay));
            let yellow_prefix = "\u{1f7e1} +";
            let green_prefix = "\u{1f7e2} -";
            if delay > 0 {
                prop_assert!(marker.starts_with(yellow_prefix));
            } else if delay < 0 {
                prop_assert!(marker.starts_with(green_prefix));
            } else {
                prop_assert_eq!(marker, "\u{1f7e2} On time");
            }
        }

        /// Sub-minute delays render the exact seconds value.
        #[test]
        fn sub_minute_delays_render_seconds(delay in 1i64..60) {
            prop_assert_eq!(format_delay(Some(delay)), format!("\u{1f7e1} +{delay}s"));
        }

        /// Minute-or-longer delays split into minutes and remainder.
        #[test]
        fn long_delays_split_into_minutes(delay in 60i64..=86_400) {
            let marker = format_delay(Some(delay));
            let minutes = delay / 60;
            let remainder = delay % 60;

            let expected = if remainder == 0 {
                format!("\u{1f7e1} +{minutes}min")
            } else {
                format!("\u{1f7e1} +{minutes}min {remainder}s")
            };
            prop_assert_eq!(marker, expected);
        }

        /// The HH:MM extraction never returns more than five characters
        /// for a timestamp containing a separator.
        #[test]
        fn extracted_time_is_hh_mm(
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60
        ) {
            let raw = format!("2025-06-25T{hour:02}:{minute:02}:{second:02}+02:00");
            prop_assert_eq!(
                format_departure_time(&raw),
                format!("{hour:02}:{minute:02}")
            );
        }
    }
}
