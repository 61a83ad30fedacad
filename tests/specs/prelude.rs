// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for workspace specs

pub use gantry_core::{CancelReason, Event, ResourceHandle};

use gantry_core::{Dispatcher, FakeClock, Registry, SequentialIdGen};
use gantry_rig::{Catalog, FakeRig, Rig, RigConfig};

pub struct Harness {
    pub dispatcher: Dispatcher<SequentialIdGen>,
    pub registry: Registry,
    pub fakes: FakeRig,
    pub clock: FakeClock,
}

/// A dispatcher over the shipped catalog, fake drivers, and a fake clock
pub fn harness() -> Harness {
    let (rig, fakes) = Rig::fake();
    let clock = FakeClock::new();
    let catalog = Catalog::new(rig, RigConfig::default(), clock.clone());
    let (registry, events) = Registry::build(catalog.entries());
    assert!(events.is_empty(), "shipped catalog must register cleanly");

    Harness {
        dispatcher: Dispatcher::with_ids(SequentialIdGen::default()),
        registry,
        fakes,
        clock,
    }
}

impl Harness {
    /// Resolve a catalog name or fail the spec
    pub fn action(&self, name: &str) -> gantry_core::BoxedAction {
        self.registry
            .get(name)
            .unwrap_or_else(|| panic!("{name} is not in the catalog"))
    }

    /// Resolve a catalog name and schedule it, like a trigger edge would
    pub fn schedule(&mut self, name: &str) -> (gantry_core::ScheduleId, Vec<Event>) {
        let action = self.action(name);
        self.dispatcher.schedule(action)
    }

    /// Advance one control cycle: step the clock, then poll every action
    pub fn tick(&mut self) -> Vec<Event> {
        self.clock.advance_ticks(1);
        self.dispatcher.tick()
    }

    /// Advance `n` control cycles, collecting every event
    pub fn run_ticks(&mut self, n: u32) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(self.tick());
        }
        events
    }
}
