use civiltime::CivilTime;


#[test]
fn accepted_shapes() {
    let strings = [
        // {{{
        ("2024-06-15T10:30:00",        (2024,  6, 15, 10, 30,  0.0)),
        ("2024-06-15T10:30:00Z",       (2024,  6, 15, 10, 30,  0.0)),
        ("2024-06-15 10:30:00",        (2024,  6, 15, 10, 30,  0.0)),
        ("2024/06/15 10:30",           (2024,  6, 15, 10, 30,  0.0)),
        ("2024-06-15",                 (2024,  6, 15,  0,  0,  0.0)),
        ("2024-06-15T10:30:45.125",    (2024,  6, 15, 10, 30, 45.125)),
        ("2024-06-15 1030",            (2024,  6, 15, 10, 30,  0.0)),
        ("2024-167T12:00",             (2024,  6, 15, 12,  0,  0.0)),
        ("2024-001",                   (2024,  1,  1,  0,  0,  0.0)),
        ("June 15, 2024 10:30:00",     (2024,  6, 15, 10, 30,  0.0)),
        ("15 june 2024",               (2024,  6, 15,  0,  0,  0.0)),
        ("2024 jan 1",                 (2024,  1,  1,  0,  0,  0.0)),
        ("93-01-02",                   (1993,  1,  2,  0,  0,  0.0)),
        // 13 cannot be a month, so it must be the day
        ("2024-13-01",                 (2024,  1, 13,  0,  0,  0.0)),
        ("1993-01-02",                 (1993,  1,  2,  0,  0,  0.0)),
        ("2024-06-15 (167) 10:30:00",  (2024,  6, 15, 10, 30,  0.0)),
        // }}}
    ];

    for &(string, (y, mo, d, h, mi, s)) in strings.iter() {
        let t: CivilTime = string.parse().unwrap_or_else(|e| panic!("{}: {}", string, e));
        assert_eq!((t.year(), t.month(), t.day(), t.hour(), t.minute(), t.second()),
                   (y, mo, d, h, mi, s),
                   "mismatch for {:?}", string);
    }
}

#[test]
fn rejected_shapes() {
    let strings = [
        "",
        "again?",
        "2024",
        "2024-02-30",
        "2023-366",
        "2024-06-15T25:00",
        "2024-06-15T10:61",
        "2024-06-15T10:30:62",
    ];

    for string in strings.iter() {
        assert!(string.parse::<CivilTime>().is_err(), "accepted {:?}", string);
    }
}

#[test]
fn parsed_seconds_still_normalize() {
    // the scanner lets an integer 61 through as a second; construction
    // carries it into the minute
    let t: CivilTime = "2024-06-15T10:30:61".parse().unwrap();
    assert_eq!((t.minute(), t.second()), (31, 1.0));
}

#[test]
fn yearless_dates_take_the_current_year() {
    let t: CivilTime = "june 15".parse().unwrap();
    assert_eq!((t.month(), t.day()), (6, 15));
    assert_eq!((t.hour(), t.minute(), t.second()), (0, 0, 0.0));
    assert_eq!(t.year(), CivilTime::now().year());
}

#[test]
fn day_of_year_resolves_against_the_right_february() {
    let leap: CivilTime = "2024-060".parse().unwrap();
    assert_eq!((leap.month(), leap.day()), (2, 29));

    let plain: CivilTime = "2023-060".parse().unwrap();
    assert_eq!((plain.month(), plain.day()), (3, 1));
}

#[test]
fn round_trips_to_the_microsecond() {
    let strings = [
        "2024-06-15T10:30:00.123456",
        "1999-12-31T23:59:59.999999",
        "1958-01-01T00:00:00.000001",
    ];

    for string in strings.iter() {
        let t: CivilTime = string.parse().unwrap();
        assert_eq!(&t.to_string(), string);
    }
}
