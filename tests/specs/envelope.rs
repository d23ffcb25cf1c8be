// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Envelope schema compatibility with the published event format.

use ebus_core::EventEnvelope;
use serde_json::json;

#[test]
fn published_event_shape_parses() {
    let wire = json!({
        "version": "0",
        "id": "6a7e8feb-b491-4cf7-a9f1-bf3703467718",
        "detail-type": "EC2 Instance State-change Notification",
        "source": "aws.ec2",
        "account": "111122223333",
        "time": "2017-12-22T18:43:48Z",
        "region": "us-west-1",
        "resources": ["arn:aws:ec2:us-west-1:123456789012:instance/i-1234567890abcdef0"],
        "detail": { "instance-id": "i-1234567890abcdef0", "state": "terminated" }
    });

    let envelope: EventEnvelope = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(envelope.source.as_deref(), Some("aws.ec2"));
    assert_eq!(
        envelope.detail_type.as_deref(),
        Some("EC2 Instance State-change Notification")
    );
    assert_eq!(envelope.resources.as_ref().unwrap().len(), 1);

    // The registry never mutates an envelope, so it re-serializes intact.
    assert_eq!(serde_json::to_value(&envelope).unwrap(), wire);
}

#[test]
fn minimal_detail_only_event_is_valid() {
    let envelope: EventEnvelope =
        serde_json::from_value(json!({ "detail": { "answer": 42 } })).unwrap();
    assert!(envelope.version.is_none());
    assert!(envelope.time.is_none());
    assert_eq!(envelope.detail.unwrap()["answer"], json!(42));
}
