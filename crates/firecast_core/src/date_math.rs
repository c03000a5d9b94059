//! Date arithmetic helpers for the monthly projection loop.
//!
//! The engine only ever works with month-start dates, so month offsets and
//! month differences are computed with direct calendar arithmetic instead of
//! jiff's `Span` machinery. Day-level differences (needed for fractional age)
//! use Rata Die day-numbering for an O(1) calculation with no `Span`
//! allocation or normalisation.

use jiff::civil::Date;

/// Average Gregorian year length in days, used for fractional-age math.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Convert a civil date to a Rata Die day number (days since 0001-01-01).
///
/// Uses the proleptic Gregorian calendar algorithm from Baum (2017).
#[inline]
fn rata_die(d: Date) -> i32 {
    let y = d.year() as i32;
    let m = d.month() as i32;
    let day = d.day() as i32;

    // Shift March = month 1 so Feb (end of "year") is month 12
    let a = (14 - m) / 12;
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    day + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 306
}

/// Compute the number of days between two dates (d2 - d1).
///
/// Positive when `d2 > d1`.
#[inline]
pub fn days_between(d1: Date, d2: Date) -> i32 {
    rata_die(d2) - rata_die(d1)
}

/// Fractional years between two dates, e.g. an age given a birthday.
#[inline]
pub fn years_between(d1: Date, d2: Date) -> f64 {
    f64::from(days_between(d1, d2)) / DAYS_PER_YEAR
}

/// Truncate a date to the first day of its calendar month.
#[inline]
pub fn month_start(d: Date) -> Date {
    d.first_of_month()
}

/// The first day of the month `n` months after (or before, if negative) the
/// month containing `d`. The day-of-month of `d` is ignored.
#[inline]
pub fn add_months(d: Date, n: i32) -> Date {
    let total = i32::from(d.year()) * 12 + i32::from(d.month()) - 1 + n;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) + 1;
    jiff::civil::date(year as i16, month as i8, 1)
}

/// Like [`add_months`], but returns `None` instead of panicking when the
/// resulting month falls outside jiff's supported year range.
#[inline]
pub fn checked_add_months(d: Date, n: i32) -> Option<Date> {
    let total = i32::from(d.year()) * 12 + i32::from(d.month()) - 1 + n;
    let year = i16::try_from(total.div_euclid(12)).ok()?;
    let month = (total.rem_euclid(12) + 1) as i8;
    Date::new(year, month, 1).ok()
}

/// Whole months from the month containing `d1` to the month containing `d2`.
///
/// Positive when `d2` is in a later month; days-of-month are ignored.
#[inline]
pub fn months_between(d1: Date, d2: Date) -> i32 {
    (i32::from(d2.year()) - i32::from(d1.year())) * 12
        + (i32::from(d2.month()) - i32::from(d1.month()))
}

/// Parse a date from the formats ledger files carry:
/// `YYYY-MM-DD`, `YYYY-MM` (first of month) or `M/D/YYYY`.
pub fn parse_date(s: &str) -> Option<Date> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // YYYY-MM shorthand means the first of that month
    if s.len() == 7 && s.as_bytes()[4] == b'-' && !s.contains('/') {
        let padded = format!("{s}-01");
        return Date::strptime("%Y-%m-%d", &padded).ok();
    }

    Date::strptime("%Y-%m-%d", s)
        .or_else(|_| Date::strptime("%m/%d/%Y", s))
        .ok()
}

/// Parse a date (any supported format) and truncate it to its month start.
pub fn parse_month(s: &str) -> Option<Date> {
    parse_date(s).map(month_start)
}
