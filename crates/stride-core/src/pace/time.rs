//! Parsing and formatting of durations.

/// Formats a per-distance duration as `m:ss`.
///
/// Minutes are not capped, so 3605 seconds is `60:05`. The value is rounded
/// to whole seconds before splitting.
pub fn format_pace_time(seconds: f64) -> String {
    let total = seconds.round().max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Formats a finishing time as `H:MM:SS`.
pub fn format_goal_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours}:{minutes:02}:{:02}", seconds % 60)
}

/// Parses `H:MM:SS` or `MM:SS` into total seconds.
///
/// Returns `None` for non-numeric parts or any other number of parts.
///
/// # Examples
///
/// ```rust
/// use stride_core::pace::parse_time_string;
///
/// assert_eq!(parse_time_string("1:30:00"), Some(5400));
/// assert_eq!(parse_time_string("3:00"), Some(180));
/// assert_eq!(parse_time_string("not-a-time"), None);
/// ```
pub fn parse_time_string(time: &str) -> Option<u32> {
    let parts = time
        .split(':')
        .map(|part| part.trim().parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;

    match parts.as_slice() {
        [hours, minutes, seconds] => hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(*seconds),
        [minutes, seconds] => minutes.checked_mul(60)?.checked_add(*seconds),
        _ => None,
    }
}

/// Cleans up a typed goal time into `H:MM:SS`.
///
/// Separators are ignored and the remaining digits are read the way marathon
/// times are usually typed: `3` is three hours, `330` and `3:30` are
/// 3:30:00, `0330` is 3:30:00, and five or six digits include seconds
/// (`3:30:15` and `33015` are 3:30:15). Input without digits, or with more
/// than six, returns `None`.
pub fn normalize_goal_time(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() || digits.len() > 6 {
        return None;
    }

    let number = |s: &str| s.parse::<u32>().ok();
    let seconds = match digits.len() {
        1 | 2 => number(&digits)? * 3600,
        3 => number(&digits[..1])? * 3600 + number(&digits[1..])? * 60,
        4 => number(&digits[..2])? * 3600 + number(&digits[2..])? * 60,
        len => {
            number(&digits[..len - 4])? * 3600
                + number(&digits[len - 4..len - 2])? * 60
                + number(&digits[len - 2..])?
        }
    };
    Some(format_goal_time(seconds))
}
