//! Recognition of loosely formatted date-time strings.
//!
//! This is deliberately not a strict ISO-8601 grammar. Strings from old
//! instrument archives spell dates in whatever order seemed natural at
//! the time, so the scanner tokenizes on a wide delimiter set and sorts
//! the numbers it finds by magnitude: a value above 31 must be a year, a
//! value above 12 must be a day, a three-digit token is a day of year,
//! and English month names (three letters or more) are accepted anywhere
//! in the date part. `T` separates date from time when it follows a
//! digit, a trailing `Z` is ignored, and a four-digit first time token
//! is split as `HHMM`.
//!
//! A string with no year takes the current year. Years below 1000 get
//! 1900 added, which is how archives written with two-digit years keep
//! reading correctly.

use crate::error::Error;
use crate::norm::{is_leap, Fields, Gregorian, Normalizer, DAYS_IN_MONTH, DAY_OFFSET};
use crate::system::sys_time;


const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

fn is_delim(ch: char, pds: bool) -> bool {
    matches!(ch, ' ' | '\t' | '/' | '-' | ':' | ',' | '_' | ';' | '\r' | '\n')
        || (pds && ch == 'T')
}

/// The non-blank delimiters, used when guessing where the date part ends.
fn is_hard_delim(ch: char) -> bool {
    matches!(ch, '/' | '-' | ':' | ',' | '_' | ';' | '\r' | '\n')
}

fn unreadable(text: &str) -> Error {
    Error::Parse(text.to_string())
}

/// The value of the longest numeric prefix of a token: digits with at
/// most one decimal point.
fn leading_number(tok: &str) -> Option<f64> {
    let bytes = tok.as_bytes();
    let mut end = 0;
    let mut seen_dot = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => { seen_dot = true; end += 1; }
            _ => break,
        }
    }

    if end == 0 || (end == 1 && seen_dot) {
        return None;
    }
    tok[..end].parse().ok()
}

/// This year, by the wall clock, for strings that don't name one.
fn current_year() -> i64 {
    #[cfg_attr(target_os = "redox", allow(unused_unsafe))]
    let (secs, _) = unsafe { sys_time() };
    Gregorian.normalize(1970, 1, 1 + secs.div_euclid(86400), 0, 0, 0.0).year
}


/// Scans `text` into a full field set. The output fields are in range
/// except possibly the second, which may carry a parsed leap-ish value
/// like `61.5`; constructors re-normalize regardless.
pub(crate) fn parse(text: &str) -> Result<Fields, Error> {
    let mut s: String = text.chars().take(80).collect();

    if let Some(at) = s.find('Z') {
        s.truncate(at);
    }

    // A 'T' straight after a digit marks the end of the date part and
    // becomes a delimiter itself; otherwise the date part is taken to
    // end at the third non-blank delimiter.
    let mut pds = false;
    let mut end_of_date = None;
    if let Some(at) = s.find('T') {
        if at > 0 && s.as_bytes()[at - 1].is_ascii_digit() {
            pds = true;
            end_of_date = Some(at);
        }
    }
    if end_of_date.is_none() {
        let mut seen = 0;
        for (at, ch) in s.char_indices() {
            if is_hard_delim(ch) {
                seen += 1;
                if seen == 3 {
                    end_of_date = Some(at);
                    break;
                }
            }
        }
    }

    let mut tokens: Vec<(usize, &str)> = Vec::new();
    let mut start = None;
    for (at, ch) in s.char_indices() {
        if is_delim(ch, pds) {
            if let Some(from) = start.take() {
                tokens.push((from, &s[from..at]));
            }
        }
        else if start.is_none() {
            start = Some(at);
        }
    }
    if let Some(from) = start {
        tokens.push((from, &s[from..]));
    }
    if tokens.is_empty() {
        return Err(unreadable(text));
    }
    tokens.truncate(10);

    let mut year = current_year();
    let mut month = 0_i64;
    let mut day_month = 0_i64;
    let mut day_year = 0_i64;
    let mut hour = 0_i64;
    let mut minute = 0_i64;
    let mut second = 0.0_f64;

    let mut want_date = true;
    let mut want_year = true;
    let mut want_month = true;
    let mut want_day = true;
    let mut want_hour = false;
    let mut want_min = false;
    let mut want_sec = false;
    let mut hold = 0_i64;

    for &(off, tok) in &tokens {

        if want_date {
            if let Some(eod) = end_of_date {
                if off > eod {
                    want_date = false;
                    want_hour = true;
                    want_min = true;
                    want_sec = true;
                }
            }
        }

        // A parenthesized day of year is informational only; skip it.
        if tok.len() == 5 && tok.starts_with('(') && tok.ends_with(')') {
            if let Ok(doy) = tok[1..4].parse::<f64>() {
                if doy > 0.0 && doy < 367.0 {
                    continue;
                }
            }
        }

        let value = match leading_number(tok) {
            Some(value) => value,
            None => {
                // Not a number at all, so it had better be a month name.
                if tok.len() < 3 || !want_date {
                    return Err(unreadable(text));
                }
                let lower = tok.to_ascii_lowercase();
                match MONTH_NAMES.iter().position(|name| name.starts_with(lower.as_str())) {
                    Some(at) => {
                        month = at as i64 + 1;
                        want_month = false;
                        if hold != 0 {
                            if day_month != 0 {
                                return Err(unreadable(text));
                            }
                            day_month = hold;
                            hold = 0;
                            want_day = false;
                        }
                    }
                    None => return Err(unreadable(text)),
                }
                continue;
            }
        };

        if value.fract() != 0.0 {
            // A fractional value can only be the seconds, and nothing
            // may follow it.
            if want_sec {
                second = value;
                break;
            }
            return Err(unreadable(text));
        }

        let number = value as i64;
        if number < 0 {
            return Err(unreadable(text));
        }

        if want_date {
            if number == 0 {
                return Err(unreadable(text));
            }

            if number > 31 {
                if want_year {
                    year = number;
                    if year < 1000 {
                        year += 1900;
                    }
                    want_year = false;
                }
                else if want_month {
                    want_month = false;
                    month = 0;
                    day_year = number;
                    want_day = false;
                }
                else {
                    return Err(unreadable(text));
                }
            }
            else if number > 12 {
                if !want_day {
                    return Err(unreadable(text));
                }
                if hold != 0 {
                    month = hold;
                    want_month = false;
                }
                if tok.len() == 3 {
                    if month != 0 {
                        return Err(unreadable(text));
                    }
                    day_year = number;
                    day_month = 0;
                    want_month = false;
                }
                else {
                    day_month = number;
                }
                want_day = false;
            }
            else if !want_month {
                if month != 0 {
                    day_month = number;
                    day_year = 0;
                }
                else {
                    day_year = number;
                    day_month = 0;
                }
                want_day = false;
            }
            else if !want_day {
                if day_year != 0 {
                    return Err(unreadable(text));
                }
                month = number;
                want_month = false;
            }
            else if !want_year {
                if tok.len() == 3 {
                    if month != 0 {
                        return Err(unreadable(text));
                    }
                    day_year = number;
                    day_month = 0;
                    want_day = false;
                }
                else {
                    if day_year != 0 {
                        return Err(unreadable(text));
                    }
                    month = number;
                    if hold != 0 {
                        day_month = hold;
                        want_day = false;
                    }
                }
                want_month = false;
            }
            else if hold != 0 {
                month = hold;
                hold = 0;
                want_month = false;
                day_month = number;
                want_day = false;
            }
            else {
                // Could be a month or a day; decided by whatever comes next.
                hold = number;
            }

            if !want_year && !want_month && !want_day {
                want_date = false;
                want_hour = true;
                want_min = true;
                want_sec = true;
            }
        }
        else if want_hour {
            if tok.len() == 4 {
                let packed_hour = number / 100;
                if packed_hour > 23 {
                    return Err(unreadable(text));
                }
                hour = packed_hour;
                let packed_min = number % 100;
                if packed_min > 59 {
                    return Err(unreadable(text));
                }
                minute = packed_min;
                want_min = false;
            }
            else {
                if number > 23 {
                    return Err(unreadable(text));
                }
                hour = number;
            }
            want_hour = false;
        }
        else if want_min {
            if number > 59 {
                return Err(unreadable(text));
            }
            minute = number;
            want_min = false;
        }
        else if want_sec {
            if number > 61 {
                return Err(unreadable(text));
            }
            second = number as f64;
            want_sec = false;
        }
        else {
            return Err(unreadable(text));
        }
    }

    if month > 12 {
        return Err(unreadable(text));
    }
    if month != 0 && day_month == 0 {
        day_month = 1;
    }

    let leap = is_leap(year) as usize;

    if month != 0 && day_month != 0 && day_year == 0 {
        if day_month > DAYS_IN_MONTH[leap][month as usize] {
            return Err(unreadable(text));
        }
        day_year = DAY_OFFSET[leap][month as usize] + day_month;
    }
    else if day_year != 0 && month == 0 && day_month == 0 {
        if day_year > 365 + leap as i64 {
            return Err(unreadable(text));
        }
        let mut m = 2;
        while m < 14 && day_year > DAY_OFFSET[leap][m] {
            m += 1;
        }
        m -= 1;
        month = m as i64;
        day_month = day_year - DAY_OFFSET[leap][m];
    }
    else {
        return Err(unreadable(text));
    }

    Ok(Fields { year, month, mday: day_month, yday: day_year, hour, minute, second })
}
