use std::collections::HashMap;

use civiltime::CivilTime;


#[test]
fn display_is_fixed_width() {
    let t = CivilTime::new(2024, 6, 5, 4, 3, 2.1).unwrap();
    assert_eq!(t.to_string(), "2024-06-05T04:03:02.100000");
}

#[test]
fn render_then_parse_is_lossless() {
    let times = [
        CivilTime::new(2024, 6, 15, 10, 30, 0.123456).unwrap(),
        CivilTime::new(1975, 1, 1, 0, 0, 0.0).unwrap(),
        CivilTime::new(9999, 12, 31, 23, 59, 59.5).unwrap(),
    ];

    for t in times.iter() {
        let back: CivilTime = t.to_string().parse().unwrap();
        assert_eq!(&back, t);
    }
}

#[test]
fn ordering_is_total_and_lexicographic() {
    let ordered = [
        CivilTime::new(2023, 12, 31, 23, 59, 59.999999).unwrap(),
        CivilTime::new(2024, 1, 1, 0, 0, 0.0).unwrap(),
        CivilTime::new(2024, 1, 1, 0, 0, 0.000001).unwrap(),
        CivilTime::new(2024, 2, 1, 0, 0, 0.0).unwrap(),
        CivilTime::new(2024, 2, 1, 0, 1, 0.0).unwrap(),
    ];

    for (i, a) in ordered.iter().enumerate() {
        for (j, b) in ordered.iter().enumerate() {
            assert_eq!(a < b, i < j);
            assert_eq!(a == b, i == j);
            assert_eq!(a > b, i > j);
        }
    }

    let mut shuffled = vec![ordered[3], ordered[0], ordered[4], ordered[2], ordered[1]];
    shuffled.sort();
    assert_eq!(shuffled, ordered);
}

#[test]
fn usable_as_a_map_key() {
    let mut seen = HashMap::new();

    let a: CivilTime = "2024-06-15T10:30:00".parse().unwrap();
    let b: CivilTime = "2024-06-15T10:30:00.000001".parse().unwrap();

    assert_eq!(seen.insert(a, "first"), None);
    assert_eq!(seen.insert(b, "second"), None);
    assert_eq!(seen.insert(a, "again"), Some("first"));
    assert_eq!(seen.len(), 2);
}
