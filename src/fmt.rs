//! Canonical ISO-8601 rendering.

use std::fmt;

use crate::civil::CivilTime;


/// `YYYY-MM-DDThh:mm:ss.ffffff`, always with six fractional digits.
///
/// Years are zero-padded to four digits; the sign of a negative year
/// eats into the padding the way it always has. Parsing this form back
/// recovers the value exactly, down to the microsecond.
impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
               self.year(), self.month(), self.day(),
               self.hour(), self.minute(), self.second())
    }
}

impl fmt::Debug for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CivilTime({})", self)
    }
}
