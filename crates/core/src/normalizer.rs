//! Input normalization for free-text reservation fields.
//!
//! [`sanitize`] strips markup-like tags from user text. It is not a full
//! HTML sanitizer: entities and other special characters pass through
//! untouched, so anything rendering stored text must still escape it.
//!
//! [`normalize_time`] converts a 12-hour clock string (`h:mm AM|PM`) into
//! the canonical 24-hour `HH:MM:SS` form used by storage.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Script and style elements are removed together with their contents.
const EMBEDDED_BLOCK_PATTERN: &str =
    r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>";

/// Any angle-bracket-delimited tag.
const TAG_PATTERN: &str = r"<[^>]+>";

static EMBEDDED_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMBEDDED_BLOCK_PATTERN).expect("valid regex"));

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TAG_PATTERN).expect("valid regex"));

/// Error message returned for any time string that is not `h:mm AM|PM`.
pub const TIME_FORMAT_MESSAGE: &str = "Time must be in 'h:mm AM|PM' format (e.g. 3:00 PM).";

/// Remove `<...>` tags from `text`. Absent input yields an empty string.
pub fn sanitize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let without_blocks = EMBEDDED_BLOCK_RE.replace_all(text, "");
    TAG_RE.replace_all(&without_blocks, "").into_owned()
}

/// Convert `h:mm AM|PM` (meridiem case-insensitive) to `HH:MM:00`.
///
/// Seconds are always `00` because the input format carries none.
/// Returns [`CoreError::Validation`] when the separator or meridiem is
/// missing, the meridiem is not AM/PM, or the hour/minute are out of the
/// 12-hour clock range.
pub fn normalize_time(raw: &str) -> Result<String, CoreError> {
    let raw = raw.trim();
    let invalid = || CoreError::Validation(TIME_FORMAT_MESSAGE.to_string());

    let (clock, meridiem) = raw.split_once(' ').ok_or_else(invalid)?;
    let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;

    let hour = parse_clock_field(hour).ok_or_else(invalid)?;
    let minute = parse_clock_field(minute).ok_or_else(invalid)?;

    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(invalid());
    }

    let hour = match meridiem.trim().to_ascii_lowercase().as_str() {
        "pm" if hour < 12 => hour + 12,
        "am" if hour == 12 => 0,
        "am" | "pm" => hour,
        _ => return Err(invalid()),
    };

    Ok(format!("{hour:02}:{minute:02}:00"))
}

/// Digits only: `u32::from_str` would also accept a leading `+`.
fn parse_clock_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
