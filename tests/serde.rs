#![cfg(feature = "serde")]

use civiltime::CivilTime;


#[test]
fn serializes_as_the_iso_string() {
    let t: CivilTime = "2024-06-15T10:30:00.5".parse().unwrap();
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "\"2024-06-15T10:30:00.500000\"");
}

#[test]
fn round_trips_through_json() {
    let t: CivilTime = "2024-06-15T10:30:00.123456".parse().unwrap();
    let json = serde_json::to_string(&t).unwrap();
    let back: CivilTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}

#[test]
fn deserializing_nonsense_fails() {
    assert!(serde_json::from_str::<CivilTime>("\"sometime\"").is_err());
    assert!(serde_json::from_str::<CivilTime>("42").is_err());
}
