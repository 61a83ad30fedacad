// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actuator driver interfaces consumed by primitive actions

pub mod fake;
pub mod traits;

// Re-export traits
pub use traits::{ActuatorFault, DigitalSensor, DiscreteDriver, MotorDriver};

// Re-export fake drivers
pub use fake::{FakeDiscrete, FakeMotor, FakeSensor};
