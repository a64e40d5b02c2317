//! Everything that can go wrong while building or re-bucketing a time.

use std::error::Error as ErrorTrait;
use std::fmt;


#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// The input text was not recognizable as a date-time.
    Parse(String),

    /// The year landed outside ±9999 after normalization.
    YearOutOfRange(i64),

    /// A floor/ceil bucket narrower than one second.
    BucketTooSmall(i64),

    /// A floor/ceil bucket wider than one day. Snapping to multi-day
    /// grids would need a calendar anchor, which no caller has asked
    /// for yet.
    BucketTooLarge(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Parse(ref text)      => write!(f, "{:?} is not recognizable as a date-time", text),
            Error::YearOutOfRange(year) => write!(f, "year {} is outside the range +/- 9999", year),
            Error::BucketTooSmall(n)    => write!(f, "bucket width of {} is below one second", n),
            Error::BucketTooLarge(n)    => write!(f, "bucket width of {} is wider than one day", n),
        }
    }
}

impl ErrorTrait for Error {
}
