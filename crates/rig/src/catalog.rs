// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The action catalog
//!
//! Every named behavior the rig exposes, grouped the way operators think
//! about them: per-subsystem primitives, composite sequences, and the
//! autonomous variants. Factories construct a fresh action per call;
//! `entries()` is the explicit registration table the registry builds from.

use crate::config::RigConfig;
use crate::modes::{DrivePose, LatchMode};
use crate::rig::{LatchHandle, MotorHandle, Rig};
use gantry_core::drivers::{DigitalSensor, DiscreteDriver, MotorDriver};
use gantry_core::{
    BoxedAction, Clock, Deadline, ParallelAll, RegistryEntry, ResourceHandle, RunAction, Sequence,
    SkipIf, SystemClock, WaitAction,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct Catalog<C: Clock = SystemClock> {
    rig: Rig,
    config: RigConfig,
    clock: C,
}

impl<C: Clock + 'static> Catalog<C> {
    pub fn new(rig: Rig, config: RigConfig, clock: C) -> Self {
        Self { rig, config, clock }
    }

    fn run_motor(
        &self,
        name: &'static str,
        resource: ResourceHandle,
        handle: &MotorHandle,
        level: f64,
    ) -> BoxedAction {
        let apply = Arc::clone(handle);
        let safe = Arc::clone(handle);
        RunAction::new(
            name,
            resource,
            move || {
                apply
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .set_output(level)
            },
            move || {
                safe.lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .set_output(0.0)
            },
        )
        .boxed()
    }

    fn set_latch(
        &self,
        name: &'static str,
        resource: ResourceHandle,
        handle: &LatchHandle,
        mode: LatchMode,
    ) -> BoxedAction {
        let apply = Arc::clone(handle);
        RunAction::new(
            name,
            resource,
            move || {
                apply
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .set_state(mode)
            },
            // A latch holds its position; nothing to safe
            || Ok(()),
        )
        .boxed()
    }

    fn deadline(&self, inner: BoxedAction, limit: std::time::Duration) -> BoxedAction {
        Deadline::new(inner, limit, self.clock.clone()).boxed()
    }

    // ~~~~~~~~~~~~~~~~
    // Climber actions
    // ~~~~~~~~~~~~~~~~

    pub fn start_climber(&self) -> BoxedAction {
        self.run_motor(
            "start_climber",
            ResourceHandle::Climber,
            &self.rig.climber,
            self.config.climber.climb,
        )
    }

    pub fn reverse_climber(&self) -> BoxedAction {
        self.run_motor(
            "reverse_climber",
            ResourceHandle::Climber,
            &self.rig.climber,
            self.config.climber.dispense,
        )
    }

    pub fn stop_climber(&self) -> BoxedAction {
        self.run_motor("stop_climber", ResourceHandle::Climber, &self.rig.climber, 0.0)
    }

    // ~~~~~~~~~~~~~~~
    // Flap actions
    // ~~~~~~~~~~~~~~~

    pub fn extend_flap(&self) -> BoxedAction {
        self.set_latch(
            "extend_flap",
            ResourceHandle::Flap,
            &self.rig.flap,
            LatchMode::Extend,
        )
    }

    pub fn retract_flap(&self) -> BoxedAction {
        self.set_latch(
            "retract_flap",
            ResourceHandle::Flap,
            &self.rig.flap,
            LatchMode::Retract,
        )
    }

    // ~~~~~~~~~~~~~~~
    // Hook actions
    // ~~~~~~~~~~~~~~~

    pub fn extend_hook(&self) -> BoxedAction {
        self.set_latch(
            "extend_hook",
            ResourceHandle::Hook,
            &self.rig.hook,
            LatchMode::Extend,
        )
    }

    pub fn retract_hook(&self) -> BoxedAction {
        self.set_latch(
            "retract_hook",
            ResourceHandle::Hook,
            &self.rig.hook,
            LatchMode::Retract,
        )
    }

    // ~~~~~~~~~~~~~~~
    // Intake actions
    // ~~~~~~~~~~~~~~~

    pub fn start_intake(&self) -> BoxedAction {
        self.run_motor(
            "start_intake",
            ResourceHandle::Intake,
            &self.rig.intake,
            self.config.intake.level,
        )
    }

    pub fn stop_intake(&self) -> BoxedAction {
        self.run_motor("stop_intake", ResourceHandle::Intake, &self.rig.intake, 0.0)
    }

    // ~~~~~~~~~~~~~~~
    // Loader actions
    // ~~~~~~~~~~~~~~~

    pub fn start_loader_for_intake(&self) -> BoxedAction {
        self.run_motor(
            "start_loader_for_intake",
            ResourceHandle::Loader,
            &self.rig.loader,
            self.config.loader.intake,
        )
    }

    pub fn start_loader_for_feed(&self) -> BoxedAction {
        self.run_motor(
            "start_loader_for_feed",
            ResourceHandle::Loader,
            &self.rig.loader,
            self.config.loader.feed,
        )
    }

    pub fn reverse_loader(&self) -> BoxedAction {
        self.run_motor(
            "reverse_loader",
            ResourceHandle::Loader,
            &self.rig.loader,
            self.config.loader.exhaust,
        )
    }

    pub fn stop_loader(&self) -> BoxedAction {
        self.run_motor("stop_loader", ResourceHandle::Loader, &self.rig.loader, 0.0)
    }

    // ~~~~~~~~~~~~~~~~
    // Shooter actions
    // ~~~~~~~~~~~~~~~~

    pub fn start_shooter_for_amp(&self) -> BoxedAction {
        self.run_motor(
            "start_shooter_for_amp",
            ResourceHandle::Shooter,
            &self.rig.shooter,
            self.config.shooter.amp,
        )
    }

    pub fn start_shooter_for_speaker(&self) -> BoxedAction {
        self.run_motor(
            "start_shooter_for_speaker",
            ResourceHandle::Shooter,
            &self.rig.shooter,
            self.config.shooter.speaker,
        )
    }

    pub fn reverse_shooter(&self) -> BoxedAction {
        self.run_motor(
            "reverse_shooter",
            ResourceHandle::Shooter,
            &self.rig.shooter,
            self.config.shooter.reverse,
        )
    }

    pub fn stop_shooter(&self) -> BoxedAction {
        self.run_motor("stop_shooter", ResourceHandle::Shooter, &self.rig.shooter, 0.0)
    }

    // ~~~~~~~~~~~~~~~~~~~~
    // Drive-base actions
    // ~~~~~~~~~~~~~~~~~~~~

    /// Turns all of the wheels inwards so we can't be easily pushed
    pub fn plant_drive_wheels(&self) -> BoxedAction {
        let apply = Arc::clone(&self.rig.drive);
        RunAction::new(
            "plant_drive_wheels",
            ResourceHandle::DriveBase,
            move || {
                apply
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .set_state(DrivePose::Plant)
            },
            || Ok(()),
        )
        .boxed()
    }

    // ~~~~~~~~~~~~~~~~~
    // Complex sequences
    // ~~~~~~~~~~~~~~~~~

    /// Pull a piece in from the ground, unless one is already seated
    pub fn ground_intake(&self) -> BoxedAction {
        let sensor = Arc::clone(&self.rig.loaded_sensor);
        SkipIf::new(
            "ground_intake",
            move || {
                sensor
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .read()
                    .unwrap_or_else(|fault| {
                        tracing::warn!(%fault, "loaded sensor read failed, assuming not loaded");
                        false
                    })
            },
            ParallelAll::new(
                "ground_intake_rollers",
                vec![self.start_intake(), self.start_loader_for_intake()],
            )
            .boxed(),
        )
        .boxed()
    }

    /// Settle the rollers, backfeed briefly so the piece doesn't jam the
    /// shooter wheel, then hold everything stopped until preempted
    pub fn stop_ground_intake(&self) -> BoxedAction {
        let handoff = &self.config.handoff;
        Sequence::new(
            "stop_ground_intake",
            vec![
                self.deadline(
                    ParallelAll::new("settle", vec![self.stop_intake(), self.stop_loader()])
                        .boxed(),
                    handoff.settle,
                ),
                self.deadline(
                    ParallelAll::new(
                        "backfeed",
                        vec![self.reverse_shooter(), self.reverse_loader()],
                    )
                    .boxed(),
                    handoff.backfeed,
                ),
                ParallelAll::new("hold_stopped", vec![self.stop_shooter(), self.stop_loader()])
                    .boxed(),
            ],
        )
        .boxed()
    }

    /// Spin up for an amp shot, then feed
    pub fn shoot_amp(&self) -> BoxedAction {
        Sequence::new(
            "shoot_amp",
            vec![
                self.deadline(self.start_shooter_for_amp(), self.config.shooter.amp_spin_up),
                ParallelAll::new(
                    "feed_amp",
                    vec![self.start_shooter_for_amp(), self.start_loader_for_feed()],
                )
                .boxed(),
            ],
        )
        .boxed()
    }

    /// Spin up for a speaker shot, then feed
    pub fn shoot_speaker(&self) -> BoxedAction {
        Sequence::new(
            "shoot_speaker",
            vec![
                self.deadline(
                    self.start_shooter_for_speaker(),
                    self.config.shooter.speaker_spin_up,
                ),
                ParallelAll::new(
                    "feed_speaker",
                    vec![
                        self.start_shooter_for_speaker(),
                        self.start_loader_for_feed(),
                    ],
                )
                .boxed(),
            ],
        )
        .boxed()
    }

    /// Zero the shooter and loader together
    pub fn stop_shoot(&self) -> BoxedAction {
        ParallelAll::new("stop_shoot", vec![self.stop_shooter(), self.stop_loader()]).boxed()
    }

    // ~~~~~~~~~~~~
    // Auto actions
    // ~~~~~~~~~~~~
    //
    // Autonomous steps are deadline-trimmed so a routine always hands its
    // resources back on schedule, even when the underlying behavior would
    // hold them.

    pub fn auto_shoot_speaker(&self) -> BoxedAction {
        let spin = self.config.shooter.speaker_spin_up;
        let grace = self.config.handoff.feed_grace;
        self.deadline(
            Sequence::new(
                "auto_shoot_speaker",
                vec![
                    self.deadline(self.shoot_speaker(), spin + grace * 3),
                    WaitAction::new(grace, self.clock.clone()).boxed(),
                ],
            )
            .boxed(),
            spin + grace * 2,
        )
    }

    pub fn auto_stop_shoot(&self) -> BoxedAction {
        self.deadline(self.stop_shoot(), self.config.handoff.feed_grace / 2)
    }

    pub fn auto_ground_intake(&self) -> BoxedAction {
        self.deadline(self.ground_intake(), self.config.handoff.feed_grace / 2)
    }

    pub fn auto_stop_ground_intake(&self) -> BoxedAction {
        let handoff = &self.config.handoff;
        self.deadline(self.stop_ground_intake(), handoff.settle + handoff.backfeed)
    }

    // ~~~~~~~~~~~~~~~~~~
    // Registration table
    // ~~~~~~~~~~~~~~~~~~

    /// The explicit, ordered registration table for the registry.
    ///
    /// Adding a factory means adding a row here; the registry reports any
    /// name accidentally reused.
    pub fn entries(&self) -> Vec<RegistryEntry> {
        fn entry<C: Clock + 'static>(
            name: &'static str,
            catalog: &Catalog<C>,
            build: fn(&Catalog<C>) -> BoxedAction,
        ) -> RegistryEntry {
            let catalog = catalog.clone();
            RegistryEntry::new(name, move || build(&catalog))
        }

        vec![
            entry("start_climber", self, Catalog::start_climber),
            entry("reverse_climber", self, Catalog::reverse_climber),
            entry("stop_climber", self, Catalog::stop_climber),
            entry("extend_flap", self, Catalog::extend_flap),
            entry("retract_flap", self, Catalog::retract_flap),
            entry("extend_hook", self, Catalog::extend_hook),
            entry("retract_hook", self, Catalog::retract_hook),
            entry("start_intake", self, Catalog::start_intake),
            entry("stop_intake", self, Catalog::stop_intake),
            entry("start_loader_for_intake", self, Catalog::start_loader_for_intake),
            entry("start_loader_for_feed", self, Catalog::start_loader_for_feed),
            entry("reverse_loader", self, Catalog::reverse_loader),
            entry("stop_loader", self, Catalog::stop_loader),
            entry("start_shooter_for_amp", self, Catalog::start_shooter_for_amp),
            entry("start_shooter_for_speaker", self, Catalog::start_shooter_for_speaker),
            entry("reverse_shooter", self, Catalog::reverse_shooter),
            entry("stop_shooter", self, Catalog::stop_shooter),
            entry("plant_drive_wheels", self, Catalog::plant_drive_wheels),
            entry("ground_intake", self, Catalog::ground_intake),
            entry("stop_ground_intake", self, Catalog::stop_ground_intake),
            entry("shoot_amp", self, Catalog::shoot_amp),
            entry("shoot_speaker", self, Catalog::shoot_speaker),
            entry("stop_shoot", self, Catalog::stop_shoot),
            entry("auto_shoot_speaker", self, Catalog::auto_shoot_speaker),
            entry("auto_stop_shoot", self, Catalog::auto_stop_shoot),
            entry("auto_ground_intake", self, Catalog::auto_ground_intake),
            entry("auto_stop_ground_intake", self, Catalog::auto_stop_ground_intake),
        ]
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
