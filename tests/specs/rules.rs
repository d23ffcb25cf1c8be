// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rule lifecycle as driven through the registry.

use ebus_core::{Rule, RuleState};
use ebus_registry::Registry;

const ACCOUNT: &str = "111111111111";
const REGION: &str = "us-east-1";

fn registry_with_bus() -> Registry {
    let registry = Registry::new();
    registry.create_event_bus("orders", REGION, ACCOUNT, None, None);
    registry
}

#[test]
fn rule_lifecycle_end_to_end() {
    let registry = registry_with_bus();

    registry
        .put_rule(
            "orders",
            REGION,
            Rule::new("on-order").with_description("fires on new orders"),
        )
        .unwrap();

    registry.disable_rule("orders", REGION, "on-order").unwrap();
    let rules = registry.list_rules("orders", REGION).unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].state, RuleState::Disabled);
    assert_eq!(rules[0].description.as_deref(), Some("fires on new orders"));

    registry.enable_rule("orders", REGION, "on-order").unwrap();
    assert!(registry.list_rules("orders", REGION).unwrap()[0].is_enabled());

    registry.delete_rule("orders", REGION, "on-order").unwrap();
    assert!(registry.list_rules("orders", REGION).unwrap().is_empty());
}

#[test]
fn rules_on_the_default_bus() {
    let registry = Registry::new();
    registry
        .put_rule("default", REGION, Rule::new("catch-all"))
        .unwrap();
    let rules = registry.list_rules("default", REGION).unwrap();
    assert_eq!(rules[0].name, "catch-all");
}

#[test]
fn deleting_a_bus_makes_its_rules_unreachable() {
    let registry = registry_with_bus();
    registry.put_rule("orders", REGION, Rule::new("a")).unwrap();
    registry.put_rule("orders", REGION, Rule::new("b")).unwrap();

    registry.delete_event_bus("orders", REGION).unwrap();

    assert!(registry.list_rules("orders", REGION).is_err());
    assert!(registry.enable_rule("orders", REGION, "a").is_err());
}

#[test]
fn replacing_a_rule_keeps_one_entry_per_name() {
    let registry = registry_with_bus();
    registry
        .put_rule("orders", REGION, Rule::new("on-order").with_state(RuleState::Disabled))
        .unwrap();
    registry
        .put_rule("orders", REGION, Rule::new("on-order"))
        .unwrap();

    let rules = registry.list_rules("orders", REGION).unwrap();
    assert_eq!(rules.len(), 1);
    // A re-put rule starts from its own construction, not the old state.
    assert_eq!(rules[0].state, RuleState::Enabled);
}
