// rewind-core/src/state_test.rs

use super::*;
use serde_json::json;

#[test]
fn test_default_state_is_before_first_item() {
    let state = SamplerState::default();
    assert_eq!(state.cursor, -1);
    assert!(state.permutation.is_none());
    assert!(state.batch_order.is_none());
    assert!(state.children.is_none());
}

#[test]
fn test_require_permutation_missing() {
    let state = SamplerState::new(3);
    match state.require_permutation() {
        Err(SamplerError::InvalidCheckpoint { reason }) => assert!(reason.contains("permutation")),
        other => panic!("Expected InvalidCheckpoint, got {:?}", other),
    }
}

#[test]
fn test_require_children_present() {
    let state = SamplerState::new(0).with_children(vec![SamplerState::new(0), SamplerState::new(1)]);
    assert_eq!(state.require_children().unwrap().len(), 2);
}

#[test]
fn test_serializes_as_mapping_without_absent_keys() {
    let state = SamplerState::new(2).with_permutation(vec![2, 0, 1]);
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value, json!({ "cursor": 2, "permutation": [2, 0, 1] }));
}

#[test]
fn test_nested_state_json_round_trip() {
    let state = SamplerState::new(4).with_children(vec![
        SamplerState::new(4).with_batch_order(Some(vec![1, 0, 2, 4, 3])),
        SamplerState::new(0).with_permutation(vec![1, 0]),
    ]);
    let text = serde_json::to_string(&state).unwrap();
    let restored: SamplerState = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_deserialize_null_batch_order_means_unshuffled() {
    let state: SamplerState = serde_json::from_str(r#"{"cursor": 7, "batch_order": null}"#).unwrap();
    assert_eq!(state.cursor, 7);
    assert_eq!(state.batch_order, None);
}

#[test]
fn test_deserialize_without_cursor_fails() {
    let result: Result<SamplerState, _> = serde_json::from_str(r#"{"permutation": [0]}"#);
    assert!(result.is_err());
}
