//! The self-normalizing civil time value.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Error;
use crate::norm::{is_leap, Fields, Gregorian, Normalizer};
use crate::system::sys_time;


/// The normalizer every `CivilTime` routes its field math through.
pub(crate) const NORM: Gregorian = Gregorian;

/// Years this far from zero are rejected at construction; the hash key
/// stops being unique beyond them anyway.
const YEAR_LIMIT: i64 = 9999;


/// A **civil time** is a point on the proleptic Gregorian calendar,
/// naive UTC, held as seven canonical fields: year, month, day of month,
/// day of year, hour, minute, and floating-point second.
///
/// The fields are kept canonical as an invariant. Every constructor and
/// every mutating operation runs the raw fields through the bound
/// [`Normalizer`], so a month of 13 or a second of -0.5 never survives
/// into a stored value; mutations build a complete new field record and
/// swap it in only on success.
///
/// ### Examples
///
/// ```
/// use civiltime::CivilTime;
///
/// let t = CivilTime::new(2024, 2, 29, 23, 59, 60.5).unwrap();
/// assert_eq!(t.to_string(), "2024-03-01T00:00:00.500000");
///
/// let parsed: CivilTime = "2024-060T23:59".parse().unwrap();
/// assert_eq!(parsed.day(), 29);
/// ```
#[derive(Clone, Copy)]
pub struct CivilTime {
    pub(crate) fields: Fields,
}

impl CivilTime {

    /// Creates a civil time from explicit field values, normalizing
    /// them into canonical form.
    ///
    /// Two-digit years from 57 to 99 are read as 1957 through 1999, an
    /// accommodation for old data sources that this constructor alone
    /// applies. Returns an error when the normalized year leaves
    /// ±9999.
    pub fn new(year: i64, month: i64, mday: i64,
               hour: i64, minute: i64, second: f64) -> Result<Self, Error> {
        let year = widen_two_digit_year(year);
        Self::from_fields(NORM.normalize(year, month, mday, hour, minute, second))
    }

    /// Creates a civil time from a count of seconds (and microseconds)
    /// since the Unix epoch. No two-digit year rule on this path.
    pub fn from_timestamp(seconds: i64, microseconds: u32) -> Result<Self, Error> {
        let days = seconds.div_euclid(86400);
        let second = seconds.rem_euclid(86400) as f64 + f64::from(microseconds) / 1e6;
        Self::from_fields(NORM.normalize(1970, 1, 1 + days, 0, 0, second))
    }

    /// Creates a civil time from a [`SystemTime`], including ones from
    /// before the Unix epoch.
    pub fn from_system_time(time: SystemTime) -> Result<Self, Error> {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => {
                Self::from_timestamp(since.as_secs() as i64, since.subsec_micros())
            }
            Err(err) => {
                let before = err.duration();
                let mut seconds = -(before.as_secs() as i64);
                let mut micros = before.subsec_micros();
                if micros > 0 {
                    seconds -= 1;
                    micros = 1_000_000 - micros;
                }
                Self::from_timestamp(seconds, micros)
            }
        }
    }

    /// The current civil time, UTC, with microsecond resolution.
    pub fn now() -> Self {
        #[cfg_attr(target_os = "redox", allow(unused_unsafe))]
        let (seconds, micros) = unsafe { sys_time() };
        let days = seconds.div_euclid(86400);
        let second = seconds.rem_euclid(86400) as f64 + micros as f64 / 1e6;
        Self { fields: NORM.normalize(1970, 1, 1 + days, 0, 0, second) }
    }

    fn from_fields(fields: Fields) -> Result<Self, Error> {
        if fields.year.abs() > YEAR_LIMIT {
            return Err(Error::YearOutOfRange(fields.year));
        }
        Ok(Self { fields })
    }


    /// The year, in human-readable terms: 2024 is 2024.
    pub fn year(&self) -> i64 { self.fields.year }

    /// The month of the year, January being 1.
    pub fn month(&self) -> i64 { self.fields.month }

    /// The day of the month, from 1 to 31.
    pub fn day(&self) -> i64 { self.fields.mday }

    /// The day of the year, from 1 to 366. Always derived, never set.
    pub fn yearday(&self) -> i64 { self.fields.yday }

    /// The hour of the day, on a 24-hour clock.
    pub fn hour(&self) -> i64 { self.fields.hour }

    /// The minute of the hour.
    pub fn minute(&self) -> i64 { self.fields.minute }

    /// The floating-point second of the minute, in `[0, 60)`.
    pub fn second(&self) -> f64 { self.fields.second }

    /// Whether the year is a Gregorian leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap(self.fields.year)
    }

    /// True only when year, month, day, hour, minute and second are all
    /// exactly zero, the traditional null sentinel for uninitialized
    /// times in old streams. The day of year does not participate.
    pub fn is_zero(&self) -> bool {
        let t = &self.fields;
        t.year == 0 && t.month == 0 && t.mday == 0
            && t.hour == 0 && t.minute == 0 && t.second == 0.0
    }

    /// Seconds since 1958-01-01, ignoring leap seconds.
    pub fn seconds_since_1958(&self) -> f64 {
        let t = &self.fields;
        NORM.epoch_seconds(t.year, t.month, t.mday, t.hour, t.minute, t.second)
    }

    /// Seconds since 2000-01-01, ignoring leap seconds.
    pub fn seconds_since_2000(&self) -> f64 {
        self.seconds_since_1958() - NORM.epoch_seconds(2000, 1, 1, 0, 0, 0.0)
    }

    /// A 64-bit key packing the year, day of year, second of day, and
    /// microsecond of second into disjoint decimal digit ranges. Any two
    /// canonical times that differ by at least a microsecond get
    /// different keys, for years within ±9999. Useful down to the
    /// microsecond and no further, so not for signal propagation on
    /// microchips.
    pub fn hash_key(&self) -> i64 {
        let t = &self.fields;
        let second_of_day = t.hour * 3600 + t.minute * 60 + t.second as i64;
        let micros = ((t.second - t.second.trunc()) * 1e6) as i64;

        t.year * 100_000_000_000_000
            + t.yday * 100_000_000_000
            + second_of_day * 1_000_000
            + micros
    }


    /// Overwrites the fields given in `update`, leaving the rest alone,
    /// then renormalizes. The day of year cannot be set; it is derived
    /// from whatever date results.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::{CivilTime, Update};
    ///
    /// let mut t = CivilTime::new(2024, 1, 31, 12, 0, 0.0).unwrap();
    /// t.set(Update { month: Some(2), ..Update::default() });
    /// assert_eq!(t.to_string(), "2024-03-02T12:00:00.000000");
    /// ```
    pub fn set(&mut self, update: Update) {
        let t = self.fields;
        self.fields = NORM.normalize(
            update.year.unwrap_or(t.year),
            update.month.unwrap_or(t.month),
            update.day.unwrap_or(t.mday),
            update.hour.unwrap_or(t.hour),
            update.minute.unwrap_or(t.minute),
            update.second.unwrap_or(t.second),
        );
    }

    /// Shifts one or more fields by the given deltas, positive or
    /// negative, and renormalizes. All-zero deltas are a guaranteed
    /// no-op that skips normalization entirely.
    pub fn adjust(&mut self, years: i64, months: i64, days: i64,
                  hours: i64, minutes: i64, seconds: f64) {
        if years == 0 && months == 0 && days == 0
            && hours == 0 && minutes == 0 && seconds == 0.0 {
            return;
        }
        let t = self.fields;
        self.fields = NORM.normalize(t.year + years, t.month + months, t.mday + days,
                                     t.hour + hours, t.minute + minutes, t.second + seconds);
    }

    /// A new civil time offset by a floating-point number of seconds,
    /// carrying into minutes, hours, days, months and years as needed.
    /// Errs when the year leaves ±9999.
    pub fn add_seconds(&self, seconds: f64) -> Result<Self, Error> {
        let t = self.fields;
        Self::from_fields(NORM.normalize(t.year, t.month, t.mday,
                                         t.hour, t.minute, t.second + seconds))
    }

    /// Day number on a month-shifted Gregorian count, where the year
    /// starts in March. Differencing two of these gives exact
    /// calendar-day distances with no month-boundary cases.
    fn gregorian_days(&self) -> i64 {
        let mut y = self.fields.year;
        let d = self.fields.mday;
        let m = (self.fields.month + 9) % 12;
        y -= m / 10;
        365 * y + y / 4 - y / 100 + y / 400 + (153 * m + 2) / 5 + (d - 1)
    }
}

fn widen_two_digit_year(year: i64) -> i64 {
    if (57..100).contains(&year) {
        year + 1900
    }
    else {
        year
    }
}


/// A set of absolute field overwrites for [`CivilTime::set`]. Fields
/// left `None` keep their current values. There is deliberately no day
/// of year here.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct Update {
    pub year:   Option<i64>,
    pub month:  Option<i64>,
    pub day:    Option<i64>,
    pub hour:   Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<f64>,
}


impl FromStr for CivilTime {
    type Err = Error;

    /// Parses a date-time string, accepting anything the bound
    /// normalizer's parser recognizes, then normalizes the result. The
    /// two-digit year handling on this path belongs to the parser, not
    /// the constructor.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let t = NORM.parse(input)?;
        Self::from_fields(NORM.normalize(t.year, t.month, t.mday, t.hour, t.minute, t.second))
    }
}

impl TryFrom<&[f64]> for CivilTime {
    type Error = Error;

    /// Builds from a packed field sequence, the layout times travel in
    /// inside flat data records: either `(year, month, day, hour,
    /// minute, second)` or, with a day-of-year slot third from the left
    /// ignored and rederived, the seven-element form.
    fn try_from(sequence: &[f64]) -> Result<Self, Error> {
        let (date, time) = match sequence.len() {
            6 => (&sequence[..3], &sequence[3..]),
            7 => (&sequence[..3], &sequence[4..]),
            _ => return Err(Error::Parse(format!("{:?}", sequence))),
        };
        Self::new(date[0] as i64, date[1] as i64, date[2] as i64,
                  time[0] as i64, time[1] as i64, time[2])
    }
}


impl PartialEq for CivilTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CivilTime {
}

impl Ord for CivilTime {
    /// Lexicographic over year, month, day, hour, minute and second.
    /// The day of year is derivable from the rest, so it is left out.
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.fields;
        let b = &other.fields;
        a.year.cmp(&b.year)
            .then_with(|| a.month.cmp(&b.month))
            .then_with(|| a.mday.cmp(&b.mday))
            .then_with(|| a.hour.cmp(&b.hour))
            .then_with(|| a.minute.cmp(&b.minute))
            .then_with(|| a.second.partial_cmp(&b.second).unwrap_or(Ordering::Equal))
    }
}

impl PartialOrd for CivilTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for CivilTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_key().hash(state);
    }
}


impl Sub for CivilTime {
    type Output = f64;

    /// The difference in floating-point seconds, sensitive down to the
    /// smallest representable increment of the second field regardless
    /// of how many month boundaries sit in between. Leap seconds are
    /// not accounted for.
    fn sub(self, other: CivilTime) -> f64 {
        let a = &self.fields;
        let b = &other.fields;

        let time_of_day = (a.hour * 3600 + a.minute * 60) as f64 + a.second
            - ((b.hour * 3600 + b.minute * 60) as f64 + b.second);

        let days = self.gregorian_days() - other.gregorian_days();
        time_of_day + days as f64 * 86400.0
    }
}

impl Add<f64> for CivilTime {
    type Output = CivilTime;

    fn add(self, seconds: f64) -> CivilTime {
        self.add_seconds(seconds).expect("year out of range after addition")
    }
}

impl Sub<f64> for CivilTime {
    type Output = CivilTime;

    fn sub(self, seconds: f64) -> CivilTime {
        self.add_seconds(-seconds).expect("year out of range after subtraction")
    }
}

impl AddAssign<f64> for CivilTime {
    fn add_assign(&mut self, seconds: f64) {
        let t = self.fields;
        self.fields = NORM.normalize(t.year, t.month, t.mday,
                                     t.hour, t.minute, t.second + seconds);
    }
}

impl SubAssign<f64> for CivilTime {
    fn sub_assign(&mut self, seconds: f64) {
        *self += -seconds;
    }
}


#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::CivilTime;

    impl Serialize for CivilTime {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct CivilTimeVisitor;

    impl<'de> Visitor<'de> for CivilTimeVisitor {
        type Value = CivilTime;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a date-time string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<CivilTime, E> {
            value.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for CivilTime {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<CivilTime, D::Error> {
            deserializer.deserialize_str(CivilTimeVisitor)
        }
    }
}


#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::{CivilTime, Update};

    fn at(y: i64, mo: i64, d: i64, h: i64, mi: i64, s: f64) -> CivilTime {
        CivilTime::new(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn ordering_ignores_yearday() {
        let a = at(2024, 6, 15, 10, 30, 0.0);
        let b = at(2024, 6, 15, 10, 30, 0.000001);
        let c = at(2024, 6, 15, 10, 30, 0.0);

        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert_eq!(a.cmp(&c), Ordering::Equal);
        assert!(a == c && a < b && b > c);
    }

    #[test]
    fn hash_keys_are_distinct_to_the_microsecond() {
        let a = at(2024, 6, 15, 10, 30, 0.5);
        let b = at(2024, 6, 15, 10, 30, 0.500001);
        let c = at(2024, 6, 15, 10, 30, 0.5);

        assert_ne!(a.hash_key(), b.hash_key());
        assert_eq!(a.hash_key(), c.hash_key());
    }

    #[test]
    fn hash_key_digit_layout() {
        let t = at(2024, 1, 1, 0, 0, 1.25);
        // year 2024, day 1, second-of-day 1, 250000 microseconds
        assert_eq!(t.hash_key(), 2024_001_00001_250000);
    }

    #[test]
    fn never_zero_once_normalized() {
        assert!(!at(2024, 6, 15, 10, 30, 0.0).is_zero());
        assert!(!at(0, 0, 0, 0, 0, 0.0).is_zero());
    }

    #[test]
    fn set_renormalizes() {
        let mut t = at(2024, 1, 31, 12, 0, 0.0);
        t.set(Update { month: Some(2), ..Update::default() });
        assert_eq!((t.month(), t.day()), (3, 2));

        t.set(Update { second: Some(-30.0), ..Update::default() });
        assert_eq!((t.hour(), t.minute(), t.second()), (11, 59, 30.0));
    }

    #[test]
    fn adjust_without_deltas_is_a_no_op() {
        let mut t = at(2024, 6, 15, 10, 30, 0.25);
        let before = t;
        t.adjust(0, 0, 0, 0, 0, 0.0);
        assert_eq!(t, before);
    }

    #[test]
    fn adjust_carries() {
        let mut t = at(2024, 6, 15, 10, 30, 0.0);
        t.adjust(0, 13, 0, 0, 0, 0.0);
        assert_eq!((t.year(), t.month()), (2025, 7));
    }

    #[test]
    fn epoch_accessors_line_up() {
        let t = at(2000, 1, 1, 0, 0, 0.0);
        assert_eq!(t.seconds_since_2000(), 0.0);
        assert_eq!(t.seconds_since_1958(), 1_325_376_000.0);
    }

    #[test]
    fn sequences_of_six_or_seven() {
        let t = CivilTime::try_from(&[2024.0, 6.0, 15.0, 10.0, 30.0, 0.5][..]).unwrap();
        assert_eq!((t.year(), t.month(), t.day(), t.second()), (2024, 6, 15, 0.5));

        // the seventh-element form carries a day-of-year slot, which is
        // rederived no matter what was in it
        let t = CivilTime::try_from(&[2024.0, 6.0, 15.0, 999.0, 10.0, 30.0, 0.5][..]).unwrap();
        assert_eq!((t.yearday(), t.hour()), (167, 10));

        assert!(CivilTime::try_from(&[2024.0, 6.0][..]).is_err());
    }
}
