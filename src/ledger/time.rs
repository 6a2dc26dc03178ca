//! Clock-string parsing

use tracing::warn;

/// Convert an `H:M:S` string to minutes.
///
/// Any missing or non-numeric component counts as 0, so `""` is 0 minutes
/// and `"1:30"` is 90. Components past the third are ignored. Negative
/// components also coerce to 0 so durations stay non-negative. This never
/// fails; malformed input is only logged.
pub fn convert_to_minutes(time_string: &str) -> f64 {
    let mut parts = time_string.split(':');
    let hours = component(parts.next(), time_string);
    let minutes = component(parts.next(), time_string);
    let seconds = component(parts.next(), time_string);

    hours * 60.0 + minutes + seconds / 60.0
}

fn component(part: Option<&str>, original: &str) -> f64 {
    let Some(part) = part else {
        return 0.0;
    };

    let trimmed = part.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value >= 0.0 => value,
        Ok(_) => {
            warn!("Negative time component {:?} in {:?}, using 0", part, original);
            0.0
        }
        Err(_) => {
            warn!(
                "Non-numeric time component {:?} in {:?}, using 0",
                part, original
            );
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_clock_string() {
        assert_eq!(convert_to_minutes("1:30:00"), 90.0);
        assert_eq!(convert_to_minutes("2:15:30"), 135.5);
    }

    #[test]
    fn test_seconds_spill_into_minutes() {
        assert_eq!(convert_to_minutes("0:0:90"), 1.5);
    }

    #[test]
    fn test_empty_string_is_zero() {
        assert_eq!(convert_to_minutes(""), 0.0);
    }

    #[test]
    fn test_missing_components_default_to_zero() {
        // Hours only
        assert_eq!(convert_to_minutes("2"), 120.0);
        // Hours and minutes
        assert_eq!(convert_to_minutes("1:30"), 90.0);
    }

    #[test]
    fn test_non_numeric_components_default_to_zero() {
        assert_eq!(convert_to_minutes("x:30:y"), 30.0);
        assert_eq!(convert_to_minutes("one:two:three"), 0.0);
    }

    #[test]
    fn test_negative_components_default_to_zero() {
        assert_eq!(convert_to_minutes("-1:30:0"), 30.0);
    }

    #[test]
    fn test_extra_components_ignored() {
        assert_eq!(convert_to_minutes("1:0:0:59"), 60.0);
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(convert_to_minutes(" 1 : 30 : 00 "), 90.0);
    }
}
