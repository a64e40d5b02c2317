use civiltime::CivilTime;

fn year(y: i64) -> CivilTime {
    CivilTime::new(y, 1, 1, 0, 0, 0.0).unwrap()
}


#[test]
fn year_1600() {
    assert!(year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(year(1900).is_leap_year() == false);
}

#[test]
fn year_2000() {
    assert!(year(2000).is_leap_year());
}

#[test]
fn year_2024() {
    assert!(year(2024).is_leap_year());
}

#[test]
fn year_2038() {
    assert!(year(2038).is_leap_year() == false);
}

#[test]
fn february_29ths() {
    assert_eq!(CivilTime::new(2024, 2, 29, 0, 0, 0.0).unwrap().yearday(), 60);

    // a nonexistent leap day is not an error here, it just normalizes
    // into March
    let t = CivilTime::new(2023, 2, 29, 0, 0, 0.0).unwrap();
    assert_eq!((t.month(), t.day()), (3, 1));
}
