// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ARN composition and event-bus name resolution

use crate::bus::DEFAULT_BUS_NAME;

/// Compose the ARN for an event bus.
///
/// The format is fixed and deterministic in its inputs:
/// `arn:aws:events:{region}:{account_id}:event-bus/{name}`.
pub fn event_bus_arn(name: &str, region: &str, account_id: &str) -> String {
    format!("arn:aws:events:{region}:{account_id}:event-bus/{name}")
}

/// Resolve a logical bus name from a bare name or a full ARN.
///
/// An absent or empty value resolves to the default bus. For an ARN the
/// bus name is the trailing path segment, so `my-bus` and
/// `arn:aws:events:...:event-bus/my-bus` resolve to the same name.
pub fn extract_bus_name(name_or_arn: Option<&str>) -> &str {
    match name_or_arn {
        None | Some("") => DEFAULT_BUS_NAME,
        Some(value) => value.rsplit('/').next().unwrap_or(value),
    }
}
