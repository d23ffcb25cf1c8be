// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rule lifecycle and metadata
//!
//! A rule is exclusively owned by one event bus and carries only its
//! enable state plus static metadata. Pattern compilation and event
//! matching live elsewhere.

use serde::{Deserialize, Serialize};

/// Whether a rule participates in event matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleState {
    #[default]
    Enabled,
    Disabled,
}

/// A named rule attached to one event bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub state: RuleState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

impl Rule {
    /// Create a new rule in the enabled state
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RuleState::Enabled,
            description: None,
            role_arn: None,
        }
    }

    /// Set the initial state
    pub fn with_state(self, state: RuleState) -> Self {
        Self { state, ..self }
    }

    /// Set the description
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    /// Set the IAM role the rule assumes when invoking targets
    pub fn with_role_arn(self, role_arn: impl Into<String>) -> Self {
        Self {
            role_arn: Some(role_arn.into()),
            ..self
        }
    }

    /// Enable the rule. Idempotent.
    pub fn enable(&mut self) {
        self.state = RuleState::Enabled;
    }

    /// Disable the rule. Idempotent.
    pub fn disable(&mut self) {
        self.state = RuleState::Disabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.state == RuleState::Enabled
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
