// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Speaker shot: spin-up deadline, feed handoff, trigger release

use crate::prelude::*;

const SPIN_UP_TICKS: u32 = 50; // 1s of 20ms cycles

#[test]
fn sequence_advances_to_the_feed_at_exactly_spin_up() {
    let mut h = harness();
    let (id, _) = h.schedule("shoot_speaker");

    h.run_ticks(SPIN_UP_TICKS - 1);
    // Spin-up window: the shooter runs, the loader has never been touched
    assert_eq!(h.fakes.shooter.last_output(), Some(1.0));
    assert!(h.fakes.loader.outputs().is_empty());

    // Deadline tick: the spin-up stage is stopped interrupted (safed to
    // zero) and the feed stage starts within the same tick
    h.tick();
    assert_eq!(h.fakes.shooter.last_output(), Some(0.0));

    // First feed tick: shooter and loader both commanded
    h.tick();
    assert_eq!(h.fakes.shooter.last_output(), Some(1.0));
    assert_eq!(h.fakes.loader.last_output(), Some(1.0));
    assert!(h.dispatcher.is_active(&id));
}

#[test]
fn spin_up_never_finishing_naturally_still_hands_off() {
    // The spin-up stage is an endless run action; only the deadline moves
    // the sequence forward. If the handoff happened early the loader would
    // show output before the deadline tick.
    let mut h = harness();
    h.schedule("shoot_speaker");

    for _ in 0..SPIN_UP_TICKS - 1 {
        h.tick();
        assert!(h.fakes.loader.outputs().is_empty());
    }
    h.tick();
    h.tick();
    assert!(!h.fakes.loader.outputs().is_empty());
}

#[test]
fn trigger_release_preempts_the_shot_with_stop_shoot() {
    let mut h = harness();
    let (shot, _) = h.schedule("shoot_speaker");
    h.run_ticks(10);

    // Falling edge: the binding schedules stop_shoot, which shares the
    // shooter and loader and so cancels the shot
    let (stop, events) = h.schedule("stop_shoot");

    assert!(!h.dispatcher.is_active(&shot));
    assert!(h.dispatcher.is_active(&stop));
    assert!(events.iter().any(|e| matches!(
        e,
        Event::ActionCancelled {
            reason: CancelReason::Conflict { .. },
            ..
        }
    )));

    // The cancelled spin-up safed the shooter; the stop action keeps it at
    // zero from the next tick on
    assert_eq!(h.fakes.shooter.last_output(), Some(0.0));
    h.tick();
    assert_eq!(h.fakes.shooter.last_output(), Some(0.0));
    assert_eq!(h.fakes.loader.last_output(), Some(0.0));
}

#[test]
fn amp_shot_uses_the_shorter_spin_up() {
    let mut h = harness();
    h.schedule("shoot_amp");

    // 500ms = 25 ticks
    h.run_ticks(24);
    assert!(h.fakes.loader.outputs().is_empty());
    assert_eq!(h.fakes.shooter.last_output(), Some(0.35));

    h.tick();
    h.tick();
    assert_eq!(h.fakes.loader.last_output(), Some(1.0));
}
