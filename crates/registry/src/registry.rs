// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus and rule lifecycle operations over a shared bus map
//!
//! One map guarded by a single reader-writer lock: lookups take the
//! shared half, structural changes and rule mutations take the exclusive
//! half. Every operation is synchronous, bounded, and atomic in
//! isolation; there are no cross-operation transactions and no
//! background work.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use ebus_core::arn::{event_bus_arn, extract_bus_name};
use ebus_core::bus::{EventBus, Tag, DEFAULT_BUS_NAME};
use ebus_core::error::RegistryError;
use ebus_core::key::BusKey;
use ebus_core::rule::Rule;

/// Account that owns the pre-seeded default bus
pub const DEFAULT_ACCOUNT_ID: &str = "000000000000";

/// Region of the pre-seeded default bus
pub const DEFAULT_REGION: &str = "us-east-1";

/// Result of a successful create-event-bus operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEventBus {
    pub event_bus_arn: String,
}

/// Read-side view of one bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBusDescription {
    pub name: String,
    pub arn: String,
}

type BusMap = HashMap<BusKey, EventBus>;

/// The in-memory control plane for event buses
#[derive(Debug)]
pub struct Registry {
    buses: RwLock<BusMap>,
}

impl Registry {
    /// Create a registry with the default bus pre-seeded.
    ///
    /// The default bus is owned by the zero tenant (account
    /// `000000000000`, region `us-east-1`) and exists for the registry's
    /// whole lifetime.
    pub fn new() -> Self {
        let arn = event_bus_arn(DEFAULT_BUS_NAME, DEFAULT_REGION, DEFAULT_ACCOUNT_ID);
        let mut buses = BusMap::new();
        buses.insert(
            BusKey::new(DEFAULT_BUS_NAME, DEFAULT_REGION),
            EventBus::new(DEFAULT_BUS_NAME, arn),
        );
        Self {
            buses: RwLock::new(buses),
        }
    }

    /// Create the bus addressed by name and region.
    ///
    /// An existing bus at the same key is replaced and its rules are
    /// dropped. `event_source_name` is accepted for call-shape
    /// compatibility and ignored; partner event sources are not modeled.
    pub fn create_event_bus(
        &self,
        name: &str,
        region: &str,
        account_id: &str,
        tags: Option<Vec<Tag>>,
        _event_source_name: Option<&str>,
    ) -> CreatedEventBus {
        let arn = event_bus_arn(name, region, account_id);
        let bus = EventBus::new(name, arn.clone()).with_tags(tags.unwrap_or_default());
        let replaced = {
            let mut buses = self.write_buses();
            buses.insert(BusKey::new(name, region), bus).is_some()
        };
        if replaced {
            debug!(name, region, account_id, "replaced existing event bus");
        } else {
            debug!(name, region, account_id, "created event bus");
        }
        CreatedEventBus { event_bus_arn: arn }
    }

    /// Delete the bus addressed by name and region, dropping its rules.
    ///
    /// The default bus is never deletable; that check precedes any
    /// lookup, so it rejects with `Validation` for every region.
    pub fn delete_event_bus(&self, name: &str, region: &str) -> Result<(), RegistryError> {
        if name == DEFAULT_BUS_NAME {
            return Err(RegistryError::Validation(
                "cannot delete event bus default".to_string(),
            ));
        }
        let mut buses = self.write_buses();
        match buses.remove(&BusKey::new(name, region)) {
            Some(mut bus) => {
                bus.delete();
                debug!(name, region, "deleted event bus");
                Ok(())
            }
            None => Err(RegistryError::bus_not_found(name, region)),
        }
    }

    /// Describe a bus addressed by bare name, full ARN, or nothing at
    /// all (which resolves to the default bus).
    pub fn describe_event_bus(
        &self,
        name_or_arn: Option<&str>,
        region: &str,
    ) -> Result<EventBusDescription, RegistryError> {
        let name = extract_bus_name(name_or_arn);
        let buses = self.read_buses();
        let bus = lookup_bus(&buses, name, region)?;
        Ok(EventBusDescription {
            name: bus.name.clone(),
            arn: bus.arn().to_string(),
        })
    }

    /// Attach a rule to a bus, replacing any rule with the same name
    pub fn put_rule(&self, bus_name: &str, region: &str, rule: Rule) -> Result<(), RegistryError> {
        let mut buses = self.write_buses();
        let bus = lookup_bus_mut(&mut buses, bus_name, region)?;
        debug!(bus = bus_name, region, rule = %rule.name, "put rule");
        bus.put_rule(rule);
        Ok(())
    }

    /// Remove a rule from a bus
    pub fn delete_rule(
        &self,
        bus_name: &str,
        region: &str,
        rule_name: &str,
    ) -> Result<(), RegistryError> {
        let mut buses = self.write_buses();
        let bus = lookup_bus_mut(&mut buses, bus_name, region)?;
        if bus.remove_rule(rule_name) {
            debug!(bus = bus_name, region, rule = rule_name, "deleted rule");
            Ok(())
        } else {
            Err(RegistryError::rule_not_found(rule_name, bus_name))
        }
    }

    /// Enable a rule. Idempotent once the rule exists.
    pub fn enable_rule(
        &self,
        bus_name: &str,
        region: &str,
        rule_name: &str,
    ) -> Result<(), RegistryError> {
        self.with_rule(bus_name, region, rule_name, Rule::enable)
    }

    /// Disable a rule. Idempotent once the rule exists.
    pub fn disable_rule(
        &self,
        bus_name: &str,
        region: &str,
        rule_name: &str,
    ) -> Result<(), RegistryError> {
        self.with_rule(bus_name, region, rule_name, Rule::disable)
    }

    /// Rules currently attached to a bus, in no particular order
    pub fn list_rules(&self, bus_name: &str, region: &str) -> Result<Vec<Rule>, RegistryError> {
        let buses = self.read_buses();
        let bus = lookup_bus(&buses, bus_name, region)?;
        Ok(bus.rules().cloned().collect())
    }

    fn with_rule(
        &self,
        bus_name: &str,
        region: &str,
        rule_name: &str,
        apply: impl FnOnce(&mut Rule),
    ) -> Result<(), RegistryError> {
        let mut buses = self.write_buses();
        let bus = lookup_bus_mut(&mut buses, bus_name, region)?;
        match bus.rule_mut(rule_name) {
            Some(rule) => {
                apply(rule);
                Ok(())
            }
            None => Err(RegistryError::rule_not_found(rule_name, bus_name)),
        }
    }

    // Poisoned locks are recovered rather than propagated so the
    // registry stays usable after a panicking caller.
    fn read_buses(&self) -> RwLockReadGuard<'_, BusMap> {
        self.buses.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_buses(&self) -> RwLockWriteGuard<'_, BusMap> {
        self.buses.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup_bus<'a>(
    buses: &'a BusMap,
    name: &str,
    region: &str,
) -> Result<&'a EventBus, RegistryError> {
    buses
        .get(&BusKey::new(name, region))
        .ok_or_else(|| RegistryError::bus_not_found(name, region))
}

fn lookup_bus_mut<'a>(
    buses: &'a mut BusMap,
    name: &str,
    region: &str,
) -> Result<&'a mut EventBus, RegistryError> {
    buses
        .get_mut(&BusKey::new(name, region))
        .ok_or_else(|| RegistryError::bus_not_found(name, region))
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
