#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Self-normalizing civil date-times.
//!
//! The centre of this library is [`CivilTime`], a seven-field calendar
//! value (year, month, day, day of year, hour, minute, and fractional
//! second) that resolves itself into canonical form after every
//! construction and mutation: a month of 13 becomes January of the next
//! year, a second of 61.5 carries into the minute, and a day of zero
//! borrows from the month before. All values are naive UTC on the
//! proleptic Gregorian calendar, and leap seconds are ignored throughout.
//!
//! # Examples
//!
//! ```
//! use civiltime::CivilTime;
//!
//! let mut t = CivilTime::new(2024, 6, 15, 10, 30, 0.0).unwrap();
//! assert_eq!(t.to_string(), "2024-06-15T10:30:00.000000");
//!
//! // Overflowed fields resolve to a canonical date.
//! let wrapped = CivilTime::new(2024, 13, 1, 0, 0, 61.5).unwrap();
//! assert_eq!(wrapped.to_string(), "2025-01-01T00:01:01.500000");
//!
//! // Bucket arithmetic snaps times onto an even grid.
//! t.floor(3600).unwrap();
//! assert_eq!(t.to_string(), "2024-06-15T10:00:00.000000");
//!
//! // Differences come back as floating-point seconds.
//! let a: CivilTime = "2024-06-15T10:30:00".parse().unwrap();
//! let b: CivilTime = "2024-06-15T10:00:00".parse().unwrap();
//! assert_eq!(a - b, 1800.0);
//! ```

mod civil;
mod error;
mod fmt;
mod norm;
mod parse;
mod round;
mod system;

pub use crate::civil::{CivilTime, Update};
pub use crate::error::Error;
pub use crate::norm::{Fields, Gregorian, Normalizer};
pub use crate::round::Precision;
