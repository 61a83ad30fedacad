// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named action registry
//!
//! Factories are declared in an explicit, ordered registration table (the
//! rig catalog's `entries()`); `build` runs once at startup. Lookup
//! constructs a fresh action per call, so a previously-run instance is never
//! handed out again. Name collisions keep the first-registered entry and
//! drop the later one with a non-fatal diagnostic.

use crate::action::BoxedAction;
use crate::event::Event;
use std::collections::HashMap;

/// A zero-argument factory producing a fresh action instance
pub type ActionFactory = Box<dyn Fn() -> BoxedAction + Send + Sync>;

/// One row of the registration table
pub struct RegistryEntry {
    pub name: &'static str,
    pub factory: ActionFactory,
}

impl RegistryEntry {
    pub fn new(
        name: &'static str,
        factory: impl Fn() -> BoxedAction + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            factory: Box::new(factory),
        }
    }
}

/// Read-only name -> factory mapping built once per process
pub struct Registry {
    order: Vec<&'static str>,
    factories: HashMap<&'static str, ActionFactory>,
    collisions: Vec<&'static str>,
}

impl Registry {
    /// Build the mapping from an ordered table. O(table length); returns
    /// the collision diagnostics alongside the registry.
    pub fn build(entries: Vec<RegistryEntry>) -> (Self, Vec<Event>) {
        let mut registry = Self {
            order: Vec::with_capacity(entries.len()),
            factories: HashMap::with_capacity(entries.len()),
            collisions: Vec::new(),
        };
        let mut events = Vec::new();

        for entry in entries {
            if registry.factories.contains_key(entry.name) {
                tracing::warn!(name = entry.name, "duplicate registration, first entry wins");
                registry.collisions.push(entry.name);
                events.push(Event::RegistryCollision {
                    name: entry.name.to_string(),
                });
                continue;
            }
            registry.order.push(entry.name);
            registry.factories.insert(entry.name, entry.factory);
        }

        (registry, events)
    }

    /// Construct a fresh instance of the named action
    pub fn get(&self, name: &str) -> Option<BoxedAction> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Registered names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Names that were dropped as duplicates, in encounter order
    pub fn collisions(&self) -> &[&'static str] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
