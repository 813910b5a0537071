use regex::Regex;
use std::sync::LazyLock;

pub const INVALID_MATCH_ID: &str = "Invalid match ID format";
pub const INVALID_DATE: &str = "Invalid date format, expected YYYYMMDD";

const MAX_MATCH_ID_LEN: usize = 10;

static MATCH_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("match id pattern is a valid regex"));
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("date pattern is a valid regex"));

/// # Errors
///
/// Will return `Err` with a client-facing message unless the id is all ascii digits and at most ten long
pub fn validate_match_id(match_id: &str) -> Result<(), &'static str> {
    if match_id.len() > MAX_MATCH_ID_LEN || !MATCH_ID_PATTERN.is_match(match_id) {
        return Err(INVALID_MATCH_ID);
    }
    Ok(())
}

/// Only the shape is checked; the upstream decides whether the day exists.
///
/// # Errors
///
/// Will return `Err` with a client-facing message unless the date is exactly eight ascii digits
pub fn validate_date(date: &str) -> Result<(), &'static str> {
    if !DATE_PATTERN.is_match(date) {
        return Err(INVALID_DATE);
    }
    Ok(())
}
