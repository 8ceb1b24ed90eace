//! Time utilities: fixed-offset exchange timestamps to Koinly UTC dates.
//!
//! The exchange writes order dates in local time at a constant UTC-7 offset.
//! No daylight-saving or timezone-database lookup is involved.

use chrono::{FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::types::ConvertError;

/// Offset, in hours east of UTC, implied by the exchange's order dates
pub const EXCHANGE_UTC_OFFSET_HOURS: i32 = -7;

const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// `YYYY-MM-DD HH:mm:ss`, `d` marks a required ASCII digit
const INPUT_SHAPE: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

/// Convert an exchange order date to `YYYY-MM-DD HH:mm UTC`
///
/// ```
/// use koinly_export_converter::core::time::normalize_order_date;
///
/// assert_eq!(
///     normalize_order_date("2024-01-15 10:00:00").unwrap(),
///     "2024-01-15 17:00 UTC"
/// );
/// ```
pub fn normalize_order_date(local: &str) -> Result<String, ConvertError> {
    normalize_order_date_with_offset(local, EXCHANGE_UTC_OFFSET_HOURS)
}

/// Convert a local `YYYY-MM-DD HH:mm:ss` timestamp at `offset_hours` to UTC
///
/// Seconds are truncated, never rounded. Anything that does not match the
/// pattern exactly, or names a date that does not exist, fails with
/// [`ConvertError::MalformedTimestamp`]. An offset outside a day fails with
/// [`ConvertError::InvalidOffset`].
pub fn normalize_order_date_with_offset(
    local: &str,
    offset_hours: i32,
) -> Result<String, ConvertError> {
    let offset = offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or(ConvertError::InvalidOffset {
            hours: offset_hours,
        })?;

    let trimmed = local.trim_matches(|c: char| c.is_ascii_whitespace());
    if !matches_shape(trimmed) {
        return Err(ConvertError::malformed_timestamp(local));
    }

    let naive = NaiveDateTime::parse_from_str(trimmed, INPUT_FORMAT)
        .map_err(|_| ConvertError::malformed_timestamp(local))?;

    // %S accepts 60 and stores it as a leap second
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(ConvertError::malformed_timestamp(local));
    }

    let local_dt = offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| ConvertError::malformed_timestamp(local))?;

    Ok(local_dt.with_timezone(&Utc).format(OUTPUT_FORMAT).to_string())
}

fn matches_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == INPUT_SHAPE.len()
        && bytes.iter().zip(INPUT_SHAPE).all(|(&b, &shape)| match shape {
            b'd' => b.is_ascii_digit(),
            sep => b == sep,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::morning("2024-01-15 10:00:00", "2024-01-15 17:00 UTC")]
    #[case::crosses_midnight("2024-01-15 20:30:00", "2024-01-16 03:30 UTC")]
    #[case::crosses_year("2023-12-31 23:59:59", "2024-01-01 06:59 UTC")]
    #[case::seconds_truncated("2024-06-01 00:00:59", "2024-06-01 07:00 UTC")]
    #[case::leap_day("2024-02-29 18:15:00", "2024-03-01 01:15 UTC")]
    // Summer dates use the same offset; no DST adjustment
    #[case::no_dst("2024-07-04 12:00:00", "2024-07-04 19:00 UTC")]
    #[case::surrounding_whitespace("  2024-01-15 10:00:00 ", "2024-01-15 17:00 UTC")]
    fn test_normalize_order_date(#[case] local: &str, #[case] expected: &str) {
        assert_eq!(normalize_order_date(local).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::free_text("yesterday")]
    #[case::missing_seconds("2024-01-15 10:00")]
    #[case::iso_t_separator("2024-01-15T10:00:00")]
    #[case::unpadded_month("2024-1-15 10:00:00")]
    #[case::slashes("2024/01/15 10:00:00")]
    #[case::non_numeric("2024-0a-15 10:00:00")]
    #[case::invalid_month("2024-13-01 10:00:00")]
    #[case::invalid_day("2023-02-29 10:00:00")]
    #[case::invalid_hour("2024-01-15 24:00:00")]
    #[case::trailing_zone("2024-01-15 10:00:00 PDT")]
    #[case::leap_second("2024-01-15 10:00:60")]
    #[case::second_61("2024-01-15 10:00:61")]
    #[case::leading_nbsp("\u{a0}2024-01-15 10:00:00")]
    fn test_normalize_order_date_rejects_malformed(#[case] local: &str) {
        let result = normalize_order_date(local);
        assert_eq!(result, Err(ConvertError::malformed_timestamp(local)));
    }

    #[rstest]
    #[case::utc(0, "2024-01-15 10:00 UTC")]
    #[case::east(2, "2024-01-15 08:00 UTC")]
    #[case::west(-5, "2024-01-15 15:00 UTC")]
    fn test_normalize_with_offset(#[case] offset: i32, #[case] expected: &str) {
        assert_eq!(
            normalize_order_date_with_offset("2024-01-15 10:00:00", offset).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case::beyond_a_day(30)]
    #[case::negative_beyond_a_day(-24)]
    #[case::overflowing_max(i32::MAX)]
    #[case::overflowing_min(i32::MIN)]
    fn test_out_of_range_offset_is_rejected(#[case] offset: i32) {
        let result = normalize_order_date_with_offset("2024-01-15 10:00:00", offset);
        assert_eq!(result, Err(ConvertError::InvalidOffset { hours: offset }));
    }
}
