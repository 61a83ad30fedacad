// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ground-intake gating against the loaded sensor

use crate::prelude::*;

#[test]
fn seated_piece_skips_the_pickup_with_both_actuators_untouched() {
    let mut h = harness();
    h.fakes.loaded_sensor.set(true);

    let (id, _) = h.schedule("ground_intake");
    let events = h.tick();

    assert!(
        matches!(events.as_slice(), [Event::ActionFinished { name, .. }] if name == "ground_intake"),
        "gated pickup must finish on its first tick, got {events:?}"
    );
    assert!(!h.dispatcher.is_active(&id));
    assert!(h.fakes.intake.outputs().is_empty());
    assert!(h.fakes.loader.outputs().is_empty());
}

#[test]
fn empty_loader_keeps_both_rollers_running() {
    let mut h = harness();
    h.fakes.loaded_sensor.set(false);

    let (id, _) = h.schedule("ground_intake");
    let events = h.run_ticks(25);

    assert!(events.is_empty(), "pickup must not finish on its own");
    assert!(h.dispatcher.is_active(&id));
    assert_eq!(h.fakes.intake.outputs().len(), 25);
    assert_eq!(h.fakes.loader.outputs().len(), 25);
}

#[test]
fn sensor_flipping_true_mid_run_does_not_stop_the_pickup() {
    // The gate samples once at start; a piece arriving later is the
    // operator's cue to release the button, not the gate's business.
    let mut h = harness();
    h.fakes.loaded_sensor.set(false);

    let (id, _) = h.schedule("ground_intake");
    h.run_ticks(5);
    h.fakes.loaded_sensor.set(true);
    let events = h.run_ticks(5);

    assert!(events.is_empty());
    assert!(h.dispatcher.is_active(&id));
}
