//! Verify path escaping and federation wire shapes against JSON test
//! vectors stored in `test-vectors/`.
//!
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use rabbitmq_mgmt::{path, FederationDefinition, FederationUpstream};

#[test]
fn path_test_vectors() {
    let raw = include_str!("../../test-vectors/paths.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let segments: Vec<&str> = case["segments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s.as_str().unwrap())
            .collect();
        let expected = case["expected_path"].as_str().unwrap();

        let built = path::join(&segments);
        assert_eq!(built, expected, "{name}: path");
        // Escaping never introduces spurious segment boundaries.
        assert_eq!(built.split('/').count(), segments.len(), "{name}: segment count");
    }
}

#[test]
fn federation_encode_vectors() {
    let raw = include_str!("../../test-vectors/federation.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["encode_cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let definition: FederationDefinition =
            serde_json::from_value(case["definition"].clone()).unwrap();

        let encoded = serde_json::to_value(&definition).unwrap();
        assert_eq!(encoded, case["expected_json"], "{name}: wire encoding");
    }
}

#[test]
fn federation_decode_vectors() {
    let raw = include_str!("../../test-vectors/federation.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["decode_cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let upstream: FederationUpstream =
            serde_json::from_value(case["wire"].clone()).unwrap();
        let expected = &case["expected"];

        assert_eq!(upstream.name, expected["name"].as_str().unwrap(), "{name}: name");
        assert_eq!(upstream.vhost, expected["vhost"].as_str().unwrap(), "{name}: vhost");
        assert_eq!(upstream.definition.uri, expected["uri"].as_str().unwrap(), "{name}: uri");
        assert_eq!(
            upstream.definition.ack_mode,
            expected["ack_mode"].as_str().unwrap(),
            "{name}: ack-mode"
        );
        assert_eq!(
            upstream.definition.max_hops,
            expected["max_hops"].as_i64().unwrap(),
            "{name}: max-hops"
        );
    }
}
