// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource preemption across whole behaviors

use crate::prelude::*;

#[test]
fn scheduling_a_shot_preempts_the_running_pickup() {
    let mut h = harness();
    let (pickup, _) = h.schedule("ground_intake");
    h.run_ticks(5);
    assert_eq!(h.fakes.intake.last_output(), Some(0.45));

    // shoot_speaker shares the loader with the pickup
    let (shot, events) = h.schedule("shoot_speaker");

    assert!(!h.dispatcher.is_active(&pickup));
    assert!(h.dispatcher.is_active(&shot));
    assert!(events.iter().any(|e| matches!(
        e,
        Event::ActionCancelled {
            name,
            reason: CancelReason::Conflict {
                resource: ResourceHandle::Loader,
                winner,
            },
            ..
        } if name == "ground_intake" && winner == "shoot_speaker"
    )));

    // Cancellation safed the pickup rollers on the spot
    assert_eq!(h.fakes.intake.last_output(), Some(0.0));
    assert_eq!(h.fakes.loader.last_output(), Some(0.0));

    // The shot now owns the loader
    assert_eq!(h.dispatcher.holder_of(ResourceHandle::Loader), Some(&shot));
}

#[test]
fn disjoint_behaviors_run_side_by_side() {
    let mut h = harness();
    let (climb, _) = h.schedule("start_climber");
    let (pickup, _) = h.schedule("ground_intake");

    h.run_ticks(3);

    assert!(h.dispatcher.is_active(&climb));
    assert!(h.dispatcher.is_active(&pickup));
    assert_eq!(h.fakes.climber.last_output(), Some(0.6));
    assert_eq!(h.fakes.intake.last_output(), Some(0.45));
}

#[test]
fn rescheduling_the_same_behavior_replaces_its_older_run() {
    let mut h = harness();
    let (first, _) = h.schedule("start_climber");
    let (second, _) = h.schedule("start_climber");

    assert!(!h.dispatcher.is_active(&first));
    assert!(h.dispatcher.is_active(&second));
    assert_eq!(
        h.dispatcher.holder_of(ResourceHandle::Climber),
        Some(&second)
    );
}

#[test]
fn cancel_all_safes_everything_and_empties_the_table() {
    let mut h = harness();
    h.schedule("ground_intake");
    h.schedule("start_climber");
    h.run_ticks(2);

    let events = h.dispatcher.cancel_all();

    assert_eq!(events.len(), 2);
    assert!(h.dispatcher.is_idle());
    assert_eq!(h.fakes.intake.last_output(), Some(0.0));
    assert_eq!(h.fakes.loader.last_output(), Some(0.0));
    assert_eq!(h.fakes.climber.last_output(), Some(0.0));
}

#[test]
fn held_binding_cancels_cleanly_on_release() {
    let mut h = harness();
    let (held, _) = h.schedule("plant_drive_wheels");
    h.run_ticks(4);

    let events = h.dispatcher.cancel(&held);

    assert!(matches!(
        events.as_slice(),
        [Event::ActionCancelled {
            reason: CancelReason::Released,
            ..
        }]
    ));
    assert!(h.dispatcher.is_idle());
}
