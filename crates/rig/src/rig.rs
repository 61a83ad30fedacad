// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The driver table: one driver per physical resource
//!
//! Single-owner by construction: the `Rig` is built once at startup and
//! holds the only table of drivers. Actions receive cloned capability
//! handles at construction; the dispatcher's one-holder-per-resource rule is
//! what keeps two behaviors from writing the same driver in a tick, so the
//! mutexes never see contention on the control thread.

use crate::modes::{DrivePose, LatchMode};
use gantry_core::drivers::{
    DigitalSensor, DiscreteDriver, FakeDiscrete, FakeMotor, FakeSensor, MotorDriver,
};
use std::sync::{Arc, Mutex};

pub type MotorHandle = Arc<Mutex<dyn MotorDriver>>;
pub type LatchHandle = Arc<Mutex<dyn DiscreteDriver<LatchMode>>>;
pub type DriveHandle = Arc<Mutex<dyn DiscreteDriver<DrivePose>>>;
pub type SensorHandle = Arc<Mutex<dyn DigitalSensor>>;

/// The driver table for the seven-subsystem rig
#[derive(Clone)]
pub struct Rig {
    pub drive: DriveHandle,
    pub intake: MotorHandle,
    pub loader: MotorHandle,
    pub shooter: MotorHandle,
    pub climber: MotorHandle,
    pub hook: LatchHandle,
    pub flap: LatchHandle,
    /// Beam-break style switch that reports a piece seated in the loader
    pub loaded_sensor: SensorHandle,
}

/// The fake drivers behind `Rig::fake`, kept for assertions
pub struct FakeRig {
    pub drive: FakeDiscrete<DrivePose>,
    pub intake: FakeMotor,
    pub loader: FakeMotor,
    pub shooter: FakeMotor,
    pub climber: FakeMotor,
    pub hook: FakeDiscrete<LatchMode>,
    pub flap: FakeDiscrete<LatchMode>,
    pub loaded_sensor: FakeSensor,
}

impl Rig {
    /// A rig wired to fake drivers, plus the fakes for assertions.
    ///
    /// Fakes share state with their handles, so a test can drive actions
    /// through the dispatcher and read the recorded writes here.
    pub fn fake() -> (Rig, FakeRig) {
        let fakes = FakeRig {
            drive: FakeDiscrete::new(),
            intake: FakeMotor::new(),
            loader: FakeMotor::new(),
            shooter: FakeMotor::new(),
            climber: FakeMotor::new(),
            hook: FakeDiscrete::new(),
            flap: FakeDiscrete::new(),
            loaded_sensor: FakeSensor::new(false),
        };
        let rig = Rig {
            drive: Arc::new(Mutex::new(fakes.drive.clone())),
            intake: Arc::new(Mutex::new(fakes.intake.clone())),
            loader: Arc::new(Mutex::new(fakes.loader.clone())),
            shooter: Arc::new(Mutex::new(fakes.shooter.clone())),
            climber: Arc::new(Mutex::new(fakes.climber.clone())),
            hook: Arc::new(Mutex::new(fakes.hook.clone())),
            flap: Arc::new(Mutex::new(fakes.flap.clone())),
            loaded_sensor: Arc::new(Mutex::new(fakes.loaded_sensor.clone())),
        };
        (rig, fakes)
    }
}
