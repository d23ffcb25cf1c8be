// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus ownership of rules
//!
//! A bus exclusively owns its rules: they are addressed by name, replaced
//! on re-put, and dropped wholesale when the bus is deleted. There is no
//! shared ownership and no back-reference from a rule to its bus.

use crate::rule::Rule;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the bus seeded at registry construction
pub const DEFAULT_BUS_NAME: &str = "default";

/// A key/value tag attached to a bus at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A named event bus and the rules attached to it
#[derive(Debug, Clone)]
pub struct EventBus {
    pub name: String,
    arn: String,
    pub tags: Vec<Tag>,
    rules: HashMap<String, Rule>,
}

impl EventBus {
    pub fn new(name: impl Into<String>, arn: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arn: arn.into(),
            tags: Vec::new(),
            rules: HashMap::new(),
        }
    }

    /// Set the tags attached at creation
    pub fn with_tags(self, tags: Vec<Tag>) -> Self {
        Self { tags, ..self }
    }

    /// The ARN assigned at creation. Immutable for the bus lifetime.
    pub fn arn(&self) -> &str {
        &self.arn
    }

    /// Attach a rule, replacing any existing rule with the same name
    pub fn put_rule(&mut self, rule: Rule) {
        self.rules.insert(rule.name.clone(), rule);
    }

    /// Remove a rule by name. Returns whether a rule was removed.
    pub fn remove_rule(&mut self, name: &str) -> bool {
        self.rules.remove(name).is_some()
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn rule_mut(&mut self, name: &str) -> Option<&mut Rule> {
        self.rules.get_mut(name)
    }

    /// Rules currently attached, in no particular order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Tear down the bus by dropping every owned rule. Idempotent.
    pub fn delete(&mut self) {
        self.rules.clear();
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
