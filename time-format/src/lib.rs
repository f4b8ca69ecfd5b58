//! Formatting of [`SystemTime`] values with strftime patterns.

use std::time::SystemTime;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Utc};

use seq_error::{Result, SeqError};

fn parse_pattern(pattern: &str) -> Result<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(SeqError::InvalidArgument(format!(
            "invalid time pattern: {}",
            pattern
        )));
    }
    Ok(items)
}

/// Format `time` in UTC using a strftime `pattern`.
pub fn format_utc(time: SystemTime, pattern: &str) -> Result<String> {
    let items = parse_pattern(pattern)?;
    Ok(DateTime::<Utc>::from(time)
        .format_with_items(items.into_iter())
        .to_string())
}

/// Format `time` at a fixed offset of `offset_seconds` east of UTC.
///
/// The offset must lie strictly between -86400 and 86400 seconds.
pub fn format_with_offset(
    time: SystemTime,
    pattern: &str,
    offset_seconds: i32,
) -> Result<String> {
    let items = parse_pattern(pattern)?;
    let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(|| {
        SeqError::InvalidArgument(format!(
            "utc offset out of range: {}s",
            offset_seconds
        ))
    })?;
    Ok(DateTime::<Utc>::from(time)
        .with_timezone(&offset)
        .format_with_items(items.into_iter())
        .to_string())
}

/// Format `time` in the system's local zone using a strftime `pattern`.
pub fn format_local(time: SystemTime, pattern: &str) -> Result<String> {
    let items = parse_pattern(pattern)?;
    Ok(DateTime::<Local>::from(time)
        .format_with_items(items.into_iter())
        .to_string())
}
