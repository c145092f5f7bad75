#![cfg(all(feature = "serde", feature = "deque"))]

//! Integration tests for serde support in tagdeque.
//!
//! These tests verify that deques serialize as JSON arrays in left-to-right
//! order and deserialize back into well-linked deques.

use rstest::rstest;
use tagdeque::deque::Deque;

#[rstest]
fn test_deque_serializes_left_to_right() {
    let mut deque: Deque<i32> = Deque::new();
    deque.push_right(2).push_right(3).push_left(1);
    assert_eq!(serde_json::to_string(&deque).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_reversed_deque_serializes_reversed() {
    let mut deque: Deque<i32> = (1..=3).collect();
    deque.reverse();
    assert_eq!(serde_json::to_string(&deque).unwrap(), "[3,2,1]");
}

#[rstest]
fn test_deque_json_roundtrip() {
    let deque: Deque<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
    let json = serde_json::to_string(&deque).unwrap();
    let restored: Deque<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(deque, restored);
    assert!(restored.is_well_linked());
}

#[rstest]
fn test_empty_deque_roundtrip() {
    let restored: Deque<i32> = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
    assert!(restored.is_well_linked());
}

#[rstest]
fn test_nested_deques() {
    let restored: Deque<Deque<i32>> = serde_json::from_str("[[1,2],[],[3]]").unwrap();
    assert_eq!(restored.len(), 3);
    assert_eq!(restored.peek_right().map(Deque::len), Some(1));
    assert_eq!(serde_json::to_string(&restored).unwrap(), "[[1,2],[],[3]]");
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<Deque<i32>, _> = serde_json::from_str("{\"a\":1}");
    assert!(result.is_err());
}
