// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry round-trips over the shipped catalog

use crate::prelude::*;
use gantry_core::Action;

#[test]
fn listed_names_are_stable_across_builds() {
    let first: Vec<&str> = harness().registry.names().collect();
    let second: Vec<&str> = harness().registry.names().collect();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn every_listed_name_resolves_to_a_fresh_instance() {
    let h = harness();
    let names: Vec<&str> = h.registry.names().collect();

    for name in names {
        let a = h.registry.get(name).unwrap();
        let b = h.registry.get(name).unwrap();
        assert_eq!(a.name(), b.name());
        assert!(
            !std::ptr::eq(a.as_ref(), b.as_ref()),
            "{name} returned a shared instance"
        );
    }
}

#[test]
fn unknown_names_miss_without_fault() {
    let h = harness();
    assert!(h.registry.get("warp_drive").is_none());
}

#[test]
fn the_autonomous_selector_surface_is_present() {
    // The names an autonomous routine chooser relies on
    let h = harness();
    for name in [
        "auto_shoot_speaker",
        "auto_stop_shoot",
        "auto_ground_intake",
        "auto_stop_ground_intake",
    ] {
        assert!(h.registry.contains(name), "{name} missing from catalog");
    }
}

#[test]
fn a_looked_up_routine_runs_to_completion_on_the_dispatcher() {
    let mut h = harness();
    let (id, _) = h.schedule("auto_stop_shoot");

    // feed_grace / 2 = 50ms: gone within a handful of ticks
    let events = h.run_ticks(5);

    assert!(events
        .iter()
        .any(|e| matches!(e, Event::ActionFinished { .. })));
    assert!(!h.dispatcher.is_active(&id));
    assert_eq!(h.fakes.shooter.last_output(), Some(0.0));
}
