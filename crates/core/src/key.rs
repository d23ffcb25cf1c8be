// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Composite addressing of buses within the registry

use serde::{Deserialize, Serialize};

/// Addresses one bus within the registry.
///
/// A pure function of name and region. Account id is deliberately not
/// part of the key: two accounts naming a bus identically in the same
/// region address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusKey {
    pub name: String,
    pub region: String,
}

impl BusKey {
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
        }
    }
}

impl std::fmt::Display for BusKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.region, self.name)
    }
}
