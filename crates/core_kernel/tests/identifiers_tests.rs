//! Tests for request identifiers

use core_kernel::RequestId;
use uuid::Uuid;

#[test]
fn test_new_generates_unique_ids() {
    assert_ne!(RequestId::new(), RequestId::new());
}

#[test]
fn test_new_v7_generates_time_ordered_ids() {
    let first = RequestId::new_v7();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = RequestId::new_v7();
    assert!(first < second);
}

#[test]
fn test_display_has_prefix() {
    assert!(RequestId::new().to_string().starts_with("REQ-"));
}

#[test]
fn test_parse_with_and_without_prefix() {
    let id = RequestId::new_v7();
    let with_prefix: RequestId = id.to_string().parse().unwrap();
    let bare: RequestId = id.as_uuid().to_string().parse().unwrap();
    assert_eq!(with_prefix, id);
    assert_eq!(bare, id);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("REQ-not-a-uuid".parse::<RequestId>().is_err());
}

#[test]
fn test_uuid_round_trip() {
    let uuid = Uuid::new_v4();
    let back: Uuid = RequestId::from(uuid).into();
    assert_eq!(uuid, back);
}

#[test]
fn test_serializes_as_bare_uuid() {
    let uuid = Uuid::new_v4();
    let json = serde_json::to_string(&RequestId::from(uuid)).unwrap();
    assert_eq!(json, format!("\"{}\"", uuid));
}
