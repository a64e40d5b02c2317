//! Rounded rendering and bucket arithmetic over the time of day.
//!
//! Two families live here. The `round` methods render a time at second,
//! millisecond or microsecond precision, carrying a rounded-up `60` in
//! the seconds text through the minute, hour and date; they never touch
//! the receiver. The `floor`/`ceil` methods snap the time of day onto a
//! grid of evenly spaced instants in place.

use crate::civil::{CivilTime, NORM};
use crate::error::Error;
use crate::norm::{is_leap, Normalizer, DAYS_IN_MONTH};


/// How many fractional digits of the second survive a rounded rendering.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Precision {
    Second,
    Millisecond,
    Microsecond,
}

impl Precision {
    fn fractional_digits(self) -> usize {
        match self {
            Precision::Second      => 0,
            Precision::Millisecond => 3,
            Precision::Microsecond => 6,
        }
    }
}


/// Renders the time of day at the given precision. Rounding the second
/// can wrap it to a textual "60"; the leading digit is clamped back to
/// "0" and the wrap carried into the minute, then the hour. A carry out
/// of hour 23 is returned for the caller to apply to its date part.
fn rounded_time_of_day(t: &CivilTime, precision: Precision) -> (String, i64) {
    let digits = precision.fractional_digits();
    let mut seconds = if digits == 0 {
        format!("{:02.0}", t.second())
    }
    else {
        format!("{:0width$.digits$}", t.second(), width = digits + 3, digits = digits)
    };

    let mut carry = 0;
    if seconds.starts_with('6') {
        seconds.replace_range(..1, "0");
        carry = 1;
    }

    let mut minute = t.minute() + carry;
    carry = 0;
    if minute > 59 {
        minute -= 60;
        carry = 1;
    }

    let mut hour = t.hour() + carry;
    carry = 0;
    if hour > 23 {
        hour -= 24;
        carry = 1;
    }

    (format!("{:02}:{:02}:{}", hour, minute, seconds), carry)
}

fn check_bucket(seconds: i64) -> Result<(), Error> {
    if seconds < 1 {
        return Err(Error::BucketTooSmall(seconds));
    }
    if seconds > 86400 {
        return Err(Error::BucketTooLarge(seconds));
    }
    Ok(())
}


impl CivilTime {

    /// Renders this time rounded to the given precision, in
    /// year-month-day form: `YYYY-MM-DDThh:mm:ss[.fff[fff]]`. A carry
    /// out of `23:59:59.9…` lands on the next day, minding month
    /// lengths, leap Februaries and the year boundary. The receiver is
    /// not modified.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::{CivilTime, Precision};
    ///
    /// let t = CivilTime::new(2021, 2, 28, 23, 59, 59.99995).unwrap();
    /// assert_eq!(t.round(Precision::Millisecond), "2021-03-01T00:00:00.000");
    /// assert_eq!(t.round(Precision::Microsecond), "2021-02-28T23:59:59.999950");
    /// ```
    pub fn round(&self, precision: Precision) -> String {
        let (time, carry) = rounded_time_of_day(self, precision);

        let mut year = self.year();
        let mut month = self.month();
        let mut mday = self.day() + carry;

        let month_days = DAYS_IN_MONTH[is_leap(year) as usize][month as usize];
        if mday > month_days {
            mday -= month_days;
            month += 1;
        }
        if month > 12 {
            month -= 12;
            year += 1;
        }

        format!("{:04}-{:02}-{:02}T{}", year, month, mday, time)
    }

    /// Renders this time rounded to the given precision, in
    /// year-and-day-of-year form: `YYYY-DDDThh:mm:ss[.fff[fff]]`. A
    /// carry past day 365 or 366 wraps into the next year. The receiver
    /// is not modified.
    pub fn round_yearday(&self, precision: Precision) -> String {
        let (time, carry) = rounded_time_of_day(self, precision);

        let mut year = self.year();
        let mut yday = self.yearday() + carry;

        let year_days = 365 + is_leap(year) as i64;
        if yday > year_days {
            yday -= year_days;
            year += 1;
        }

        format!("{:04}-{:03}T{}", year, yday, time)
    }

    /// Snaps this time down, in place, to the nearest instant on a grid
    /// of `seconds`-wide buckets counted from midnight. A bucket of 1
    /// truncates fractional seconds; a bucket of 86400 zeroes the time
    /// of day. Buckets outside `1..=86400` are errors and leave the
    /// value untouched.
    pub fn floor(&mut self, seconds: i64) -> Result<(), Error> {
        check_bucket(seconds)?;
        let mut t = self.fields;

        if seconds == 1 {
            t.second = t.second.trunc();
        }
        else if seconds < 86400 {
            let second_of_day = t.hour * 3600 + t.minute * 60 + t.second as i64;
            let floored = (second_of_day / seconds) * seconds;

            t.hour = floored / 3600;
            let rest = floored - t.hour * 3600;
            t.minute = rest / 60;
            t.second = (rest - t.minute * 60) as f64;
        }
        else {
            t.hour = 0;
            t.minute = 0;
            t.second = 0.0;
        }

        self.fields = NORM.normalize(t.year, t.month, t.mday, t.hour, t.minute, t.second);
        Ok(())
    }

    /// Snaps this time up, in place, to the nearest instant on a grid
    /// of `seconds`-wide buckets counted from midnight. A time already
    /// sitting on the grid stays put. A bucket of 86400 moves any time
    /// past midnight onto the following midnight. Buckets outside
    /// `1..=86400` are errors and leave the value untouched.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::CivilTime;
    ///
    /// let mut t = CivilTime::new(2021, 2, 28, 23, 59, 59.9).unwrap();
    /// t.ceil(86400).unwrap();
    /// assert_eq!(t.to_string(), "2021-03-01T00:00:00.000000");
    /// ```
    pub fn ceil(&mut self, seconds: i64) -> Result<(), Error> {
        check_bucket(seconds)?;
        let mut t = self.fields;

        if seconds == 1 {
            if t.second.fract() > 0.0 {
                t.second = t.second.trunc() + 1.0;
            }
        }
        else if seconds < 86400 {
            let second_of_day = t.hour * 3600 + t.minute * 60 + t.second.ceil() as i64;
            let floored = (second_of_day / seconds) * seconds;
            let ceiled = if second_of_day == floored {
                floored
            }
            else {
                floored + seconds
            };

            t.hour = ceiled / 3600;
            let rest = ceiled - t.hour * 3600;
            t.minute = rest / 60;
            t.second = (rest - t.minute * 60) as f64;
        }
        else {
            if t.hour > 0 || t.minute > 0 || t.second > 0.0 {
                t.mday += 1;
            }
            t.hour = 0;
            t.minute = 0;
            t.second = 0.0;
        }

        self.fields = NORM.normalize(t.year, t.month, t.mday, t.hour, t.minute, t.second);
        Ok(())
    }
}
