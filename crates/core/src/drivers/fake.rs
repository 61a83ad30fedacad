// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake driver implementations for testing
//!
//! Each fake records every write and can be armed to fault, so tests can
//! assert both what a behavior commanded and how it unwinds when hardware
//! misbehaves. Clones share state, like the real CAN handles they stand for.

use super::traits::{ActuatorFault, DigitalSensor, DiscreteDriver, MotorDriver};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MotorState {
    outputs: Vec<f64>,
    fail_writes: bool,
}

/// A motor fake that records every output write
#[derive(Clone, Default)]
pub struct FakeMotor {
    state: Arc<Mutex<MotorState>>,
}

impl FakeMotor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every output written so far, in order
    pub fn outputs(&self) -> Vec<f64> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .outputs
            .clone()
    }

    pub fn last_output(&self) -> Option<f64> {
        self.outputs().last().copied()
    }

    /// Arm or disarm the fault mode; while armed every write fails
    pub fn fail_writes(&self, fail: bool) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_writes = fail;
    }
}

impl MotorDriver for FakeMotor {
    fn set_output(&mut self, percent: f64) -> Result<(), ActuatorFault> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.fail_writes {
            return Err(ActuatorFault::Unresponsive("fake motor offline".into()));
        }
        if !(-1.0..=1.0).contains(&percent) {
            return Err(ActuatorFault::OutOfRange(percent));
        }
        state.outputs.push(percent);
        Ok(())
    }
}

struct DiscreteState<S> {
    states: Vec<S>,
    fail_writes: bool,
}

impl<S> Default for DiscreteState<S> {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            fail_writes: false,
        }
    }
}

/// A discrete-actuator fake that records every requested state
pub struct FakeDiscrete<S> {
    state: Arc<Mutex<DiscreteState<S>>>,
}

impl<S> Clone for FakeDiscrete<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> Default for FakeDiscrete<S> {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(DiscreteState::default())),
        }
    }
}

impl<S: Clone> FakeDiscrete<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every state written so far, in order
    pub fn states(&self) -> Vec<S> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .states
            .clone()
    }

    pub fn last_state(&self) -> Option<S> {
        self.states().last().cloned()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_writes = fail;
    }
}

impl<S: Clone + Send> DiscreteDriver<S> for FakeDiscrete<S> {
    fn set_state(&mut self, state: S) -> Result<(), ActuatorFault> {
        let mut inner = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if inner.fail_writes {
            return Err(ActuatorFault::Unresponsive("fake actuator offline".into()));
        }
        inner.states.push(state);
        Ok(())
    }
}

struct SensorState {
    value: bool,
    fail_reads: bool,
}

/// A digital sensor fake with a settable value
#[derive(Clone)]
pub struct FakeSensor {
    state: Arc<Mutex<SensorState>>,
}

impl FakeSensor {
    pub fn new(value: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(SensorState {
                value,
                fail_reads: false,
            })),
        }
    }

    pub fn set(&self, value: bool) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).value = value;
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_reads = fail;
    }
}

impl Default for FakeSensor {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DigitalSensor for FakeSensor {
    fn read(&self) -> Result<bool, ActuatorFault> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.fail_reads {
            return Err(ActuatorFault::Unresponsive("fake sensor offline".into()));
        }
        Ok(state.value)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
