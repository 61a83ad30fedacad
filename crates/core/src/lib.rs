// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! gantry-core: Action-sequencing core for multi-actuator machines
//!
//! This crate provides:
//! - The `Action` contract: cooperative start/poll/stop units of work
//! - Combinators for sequential, parallel, timed, and gated composition
//! - A name -> factory registry for autonomous routine selection
//! - Resource-conflict bookkeeping driven by the host tick loop
//! - Actuator driver traits consumed by primitive actions

pub mod clock;
pub mod id;

pub mod drivers;

// Action model (order matters for dependencies)
pub mod resource;
pub mod event;
pub mod action;
pub mod primitive;
pub mod combinator;
pub mod registry;
pub mod dispatch;

#[cfg(test)]
pub(crate) mod testutil;

// Re-exports
pub use action::{Action, ActionState, BoxedAction};
pub use clock::{Clock, FakeClock, SystemClock, TICK_PERIOD};
pub use combinator::{Deadline, ParallelAll, ParallelRace, Sequence, SkipIf};
pub use dispatch::{Dispatcher, ScheduleId};
pub use event::{CancelReason, Event};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use primitive::{RunAction, WaitAction};
pub use registry::{ActionFactory, Registry, RegistryEntry};
pub use resource::{ResourceHandle, ResourceSet};

// Re-export drivers
pub use drivers::{
    ActuatorFault, DigitalSensor, DiscreteDriver, FakeDiscrete, FakeMotor, FakeSensor, MotorDriver,
};
