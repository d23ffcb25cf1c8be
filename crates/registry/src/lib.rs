// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ebus-registry: Concurrency-safe control plane for event buses
//!
//! The registry is the single source of truth for bus existence and
//! identity. Callers construct a [`Registry`] handle explicitly (no
//! ambient singleton), pass tenant context (account id + region) per
//! operation, and receive typed results back. The protocol layer that
//! authenticates callers and parses wire payloads lives outside this
//! crate.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod registry;

pub use registry::{
    CreatedEventBus, EventBusDescription, Registry, DEFAULT_ACCOUNT_ID, DEFAULT_REGION,
};
