//! Property-based tests for request validation and array-union merges
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;
use regex::Regex;
use roomchat::backend::store::document::{merge_fields, FieldValue, Fields};
use roomchat::shared::validation::is_alphanumeric_id;
use roomchat::shared::{ReadMessageRequest, SendMessageRequest};
use serde_json::{json, Value};

fn reference() -> Regex {
    Regex::new(r"^[0-9a-zA-Z][0-9a-zA-Z]+$").unwrap()
}

proptest! {
    #[test]
    fn test_matcher_agrees_with_pattern(candidate in "\\PC{0,12}") {
        prop_assert_eq!(is_alphanumeric_id(&candidate), reference().is_match(&candidate));
    }

    #[test]
    fn test_matcher_agrees_on_near_misses(candidate in "[0-9a-zA-Z _!\\-é]{0,6}") {
        prop_assert_eq!(is_alphanumeric_id(&candidate), reference().is_match(&candidate));
    }

    #[test]
    fn test_valid_identifiers_pass_send(
        chat_id in "[0-9a-zA-Z]{2,16}",
        sender in "[0-9a-zA-Z]{2,16}",
        message in ".*",
    ) {
        let request = SendMessageRequest {
            chat_id: Some(chat_id.clone()),
            sender: Some(sender.clone()),
            message: Some(message.clone()),
        };
        let command = request.validate().unwrap();
        prop_assert_eq!(command.chat_id.as_str(), chat_id.as_str());
        prop_assert_eq!(command.sender.as_str(), sender.as_str());
        prop_assert_eq!(command.message, message);
    }

    #[test]
    fn test_invalid_identifiers_fail_both_endpoints(
        bad in "[0-9a-zA-Z]{0,4}[^0-9a-zA-Z][0-9a-zA-Z]{0,4}",
    ) {
        let send = SendMessageRequest {
            chat_id: Some(bad.clone()),
            sender: Some("alice".into()),
            message: Some("hi".into()),
        };
        prop_assert!(send.validate().is_err());

        let read = ReadMessageRequest {
            chat_id: Some(bad.clone()),
            sender: None,
        };
        prop_assert!(read.validate().is_err());

        let read = ReadMessageRequest {
            chat_id: Some("room1".into()),
            sender: Some(bad),
        };
        prop_assert!(read.validate().is_err());
    }

    #[test]
    fn test_array_union_never_drops_elements(
        existing in prop::collection::vec(0u32..50, 0..10),
        incoming in prop::collection::vec(0u32..50, 0..10),
    ) {
        let mut data = Fields::new();
        data.insert("messages".into(), json!(existing));
        merge_fields(
            &mut data,
            [("messages".to_string(), FieldValue::array_union(incoming.iter().map(|n| json!(n))))],
        );

        let merged: Vec<Value> = data["messages"].as_array().unwrap().clone();
        // The stored prefix is untouched.
        for (i, n) in existing.iter().enumerate() {
            prop_assert_eq!(&merged[i], &json!(n));
        }
        // Every incoming element is present afterwards.
        for n in &incoming {
            prop_assert!(merged.contains(&json!(n)));
        }
        prop_assert!(merged.len() <= existing.len() + incoming.len());
    }
}
