use super::*;
use std::collections::BTreeMap;
use std::str::FromStr;

#[test]
fn test_typed_id_roundtrip_inner() {
    let id = AccountId::new(42);
    assert_eq!(id.into_inner(), 42);
    assert_eq!(i64::from(id), 42);
    assert_eq!(AccountId::from(42), id);
}

#[test]
fn test_typed_id_display() {
    assert_eq!(ClassificationId::new(7).to_string(), "7");
}

#[test]
fn test_typed_id_from_str() {
    assert_eq!(DepartmentId::from_str("12").unwrap(), DepartmentId::new(12));
    assert_eq!(ProjectId::from_str(" 3 ").unwrap(), ProjectId::new(3));
}

#[test]
fn test_typed_id_from_str_error() {
    assert!(AccountId::from_str("abc").is_err());
    assert!(AccountId::from_str("").is_err());
}

#[test]
fn test_typed_id_serializes_transparently() {
    let json = serde_json::to_string(&JournalId::new(99)).unwrap();
    assert_eq!(json, "99");

    let id: JournalDetailId = serde_json::from_str("5").unwrap();
    assert_eq!(id, JournalDetailId::new(5));
}

#[test]
fn test_typed_id_orders_numerically() {
    let mut map = BTreeMap::new();
    map.insert(AccountId::new(10), "b");
    map.insert(AccountId::new(2), "a");

    let keys: Vec<i64> = map.keys().map(|id| id.into_inner()).collect();
    assert_eq!(keys, vec![2, 10]);
}
