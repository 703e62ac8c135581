//! Wall-clock stamp rendering.
//!
//! The three output shapes are fixed: `DD/MM/YYYY`, `HH:MM:SS`
//! (24-hour), and the two joined by a single space. Fields are
//! zero-padded, so rendering is constant-width for a given kind.

use chrono::{Local, NaiveDateTime};

use crate::action::StampKind;

/// strftime pattern for a date stamp
pub const DATE_PATTERN: &str = "%d/%m/%Y";
/// strftime pattern for a time stamp
pub const TIME_PATTERN: &str = "%H:%M:%S";
/// strftime pattern for a combined date and time stamp
pub const DATE_TIME_PATTERN: &str = "%d/%m/%Y %H:%M:%S";

fn pattern(kind: StampKind) -> &'static str {
    match kind {
        StampKind::Date => DATE_PATTERN,
        StampKind::Time => TIME_PATTERN,
        StampKind::DateTime => DATE_TIME_PATTERN,
    }
}

/// Render a stamp for an explicit instant
pub fn render(kind: StampKind, at: NaiveDateTime) -> String {
    at.format(pattern(kind)).to_string()
}

/// Render a stamp for the current local wall-clock time
pub fn now(kind: StampKind) -> String {
    render(kind, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_render_date() {
        assert_eq!(render(StampKind::Date, at(2025, 3, 5, 14, 7, 9)), "05/03/2025");
    }

    #[test]
    fn test_render_time() {
        assert_eq!(render(StampKind::Time, at(2025, 3, 5, 14, 7, 9)), "14:07:09");
    }

    #[test]
    fn test_render_date_time() {
        assert_eq!(
            render(StampKind::DateTime, at(2025, 3, 5, 14, 7, 9)),
            "05/03/2025 14:07:09"
        );
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(
            render(StampKind::DateTime, at(2003, 2, 1, 4, 5, 6)),
            "01/02/2003 04:05:06"
        );
    }

    #[test]
    fn test_midnight() {
        assert_eq!(render(StampKind::Time, at(2025, 12, 31, 0, 0, 0)), "00:00:00");
    }

    #[test]
    fn test_render_is_stable_for_fixed_instant() {
        let instant = at(2025, 3, 5, 14, 7, 9);
        assert_eq!(
            render(StampKind::Date, instant),
            render(StampKind::Date, instant)
        );
    }

    #[test]
    fn test_now_matches_kind_width() {
        // The rendered widths are fixed by the zero-padded patterns.
        assert_eq!(now(StampKind::Date).len(), 10);
        assert_eq!(now(StampKind::Time).len(), 8);
        assert_eq!(now(StampKind::DateTime).len(), 19);
    }
}
