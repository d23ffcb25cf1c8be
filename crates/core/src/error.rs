// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types surfaced by registry operations

use thiserror::Error;

/// Errors that can occur in registry operations.
///
/// Every rejected operation yields exactly one of these; nothing is
/// retried or swallowed. `Validation` and the not-found variants are
/// caller-fault; `Internal` covers unexpected conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("event bus {name} for region {region} does not exist")]
    BusNotFound { name: String, region: String },
    #[error("rule {rule} does not exist on event bus {bus}")]
    RuleNotFound { rule: String, bus: String },
    #[error("internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    pub fn bus_not_found(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self::BusNotFound {
            name: name.into(),
            region: region.into(),
        }
    }

    pub fn rule_not_found(rule: impl Into<String>, bus: impl Into<String>) -> Self {
        Self::RuleNotFound {
            rule: rule.into(),
            bus: bus.into(),
        }
    }
}
