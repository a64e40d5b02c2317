//! Field normalization for the proleptic Gregorian calendar.
//!
//! The [`Normalizer`] trait is the capability [`CivilTime`] is built on:
//! recognizing strings, resolving over- and under-range fields into
//! canonical form, and converting to epoch seconds. The standard
//! implementation is [`Gregorian`]; the trait exists so that the seam is
//! explicit rather than a set of free functions buried in the value type.
//!
//! As everywhere in this library, leap seconds are simply ignored.
//!
//! [`CivilTime`]: crate::CivilTime

use crate::error::Error;
use crate::parse;


/// Days elapsed at the start of each month, indexed by leap year and
/// one-based month. The extra entry at index 13 closes the table, so a
/// day-of-year walk can probe one month past December.
pub(crate) const DAY_OFFSET: [[i64; 14]; 2] = [
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365],
    [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366],
];

/// Days in each one-based month, indexed by leap year.
pub(crate) const DAYS_IN_MONTH: [[i64; 13]; 2] = [
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Julian day number of 1958-01-01, the epoch of [`Normalizer::epoch_seconds`].
const EPOCH_JDAY: i64 = 2_436_205;


/// The standard Gregorian leap-year test: every fourth year, except
/// century years that are not a multiple of 400.
pub(crate) fn is_leap(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Julian day number for a year-month-day triple, with truncating
/// division throughout. Accurate for dates after the adoption of the
/// Gregorian calendar.
pub(crate) fn jday(year: i64, month: i64, mday: i64) -> i64 {
    367 * year - 7 * (year + (month + 9) / 12) / 4
        - 3 * ((year + (month - 9) / 7) / 100 + 1) / 4
        + 275 * month / 9 + mday + 1_721_029
}


/// The seven canonical calendar fields of a civil time.
///
/// A `Fields` value fresh out of [`Normalizer::normalize`] is canonical:
/// month 1-12, day of month valid for its month, day of year consistent
/// with the date, hour 0-23, minute 0-59, and second in `[0, 60)`. A
/// hand-built one carries no such guarantee.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Fields {
    pub year:   i64,
    pub month:  i64,
    pub mday:   i64,
    pub yday:   i64,
    pub hour:   i64,
    pub minute: i64,
    pub second: f64,
}


/// The calendar capability behind [`CivilTime`]: string recognition,
/// carry/borrow field normalization, and an epoch-seconds conversion.
///
/// [`CivilTime`]: crate::CivilTime
pub trait Normalizer {

    /// Recognizes a date-time string, producing a full field set, or a
    /// parse error for text with no readable date in it.
    fn parse(&self, text: &str) -> Result<Fields, Error>;

    /// Resolves possibly over- or under-range fields (including negative
    /// ones) into canonical form, recomputing the day of year. The day
    /// of year is an output only; it is derived from the month and day
    /// of month, never read.
    fn normalize(&self, year: i64, month: i64, mday: i64,
                 hour: i64, minute: i64, second: f64) -> Fields;

    /// Seconds since 1958-01-01T00:00:00, ignoring leap seconds. The
    /// inputs are normalized first, so overflowed fields are fine.
    fn epoch_seconds(&self, year: i64, month: i64, mday: i64,
                     hour: i64, minute: i64, second: f64) -> f64;
}


/// The standard proleptic-Gregorian [`Normalizer`].
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct Gregorian;

impl Normalizer for Gregorian {

    fn parse(&self, text: &str) -> Result<Fields, Error> {
        parse::parse(text)
    }

    fn normalize(&self, mut year: i64, mut month: i64, mut mday: i64,
                 mut hour: i64, mut minute: i64, mut second: f64) -> Fields {

        // Wrap the month into 1..=12 first, carrying whole years.
        if month < 1 || month > 12 {
            let m = month - 1;
            year += m.div_euclid(12);
            month = m.rem_euclid(12) + 1;
        }

        let mut leap = is_leap(year) as usize;

        // The day of year is an output; seed it from the (possibly
        // out-of-range) day of month and carry the time of day into it.
        let mut yday = DAY_OFFSET[leap][month as usize] + mday;

        // fmod keeps the sign of the dividend, so fix up a negative
        // remainder afterwards.
        if second < 0.0 || second >= 60.0 {
            minute += (second / 60.0) as i64;
            second %= 60.0;
            if second < 0.0 {
                second += 60.0;
                minute -= 1;
            }
            second += 0.0;  // squash the negative zero fmod can leave
        }

        if minute < 0 || minute > 59 {
            hour += minute.div_euclid(60);
            minute = minute.rem_euclid(60);
        }

        if hour < 0 || hour > 23 {
            yday += hour.div_euclid(24);
            hour = hour.rem_euclid(24);
        }

        // Walk the day of year across year boundaries.
        let mut ndays = 365 + leap as i64;
        while yday > ndays {
            year += 1;
            yday -= ndays;
            leap = is_leap(year) as usize;
            ndays = 365 + leap as i64;
        }
        while yday < 1 {
            year -= 1;
            leap = is_leap(year) as usize;
            ndays = 365 + leap as i64;
            yday += ndays;
        }

        // And finally convert the day of year back to a month and a day
        // of month.
        while yday <= DAY_OFFSET[leap][month as usize] {
            month -= 1;
        }
        while yday > DAY_OFFSET[leap][(month + 1) as usize] {
            month += 1;
        }
        mday = yday - DAY_OFFSET[leap][month as usize];

        Fields { year, month, mday, yday, hour, minute, second }
    }

    fn epoch_seconds(&self, year: i64, month: i64, mday: i64,
                     hour: i64, minute: i64, second: f64) -> f64 {
        let t = self.normalize(year, month, mday, hour, minute, second);
        let days = jday(t.year, t.month, t.mday) - EPOCH_JDAY;
        days as f64 * 86400.0 + (t.hour * 3600 + t.minute * 60) as f64 + t.second
    }
}
