// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ebus-core: Domain types for the event-bus control plane
//!
//! This crate provides:
//! - The envelope schema for events flowing through a bus
//! - Rule and event-bus types with their ownership semantics
//! - ARN composition and bus-name resolution
//! - The error taxonomy surfaced to callers
//!
//! Everything here is pure and lock-free; the concurrency-safe provider
//! lives in `ebus-registry`.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod arn;
pub mod bus;
pub mod envelope;
pub mod error;
pub mod key;
pub mod rule;

// Re-exports
pub use arn::{event_bus_arn, extract_bus_name};
pub use bus::{EventBus, Tag, DEFAULT_BUS_NAME};
pub use envelope::EventEnvelope;
pub use error::RegistryError;
pub use key::BusKey;
pub use rule::{Rule, RuleState};
