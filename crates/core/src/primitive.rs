// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reusable leaf actions
//!
//! `RunAction` applies an actuator write every poll and never finishes on
//! its own; it exists to be bounded by a `Deadline`, raced against a sensor,
//! or cancelled by a trigger edge. `WaitAction` holds no resources and
//! finishes once its duration elapses.

use crate::action::Action;
use crate::clock::Clock;
use crate::drivers::ActuatorFault;
use crate::resource::{ResourceHandle, ResourceSet};
use std::time::{Duration, Instant};

/// An actuator write, typically a closure over a cloned driver handle
pub type Write = Box<dyn FnMut() -> Result<(), ActuatorFault> + Send>;

/// A leaf action that repeats one actuator write until stopped.
///
/// A failed write does not propagate: the action safes its actuator, logs
/// the fault, and reports finished, so the enclosing composite unwinds the
/// same way it would for any finished child.
pub struct RunAction {
    name: String,
    resources: ResourceSet,
    apply: Write,
    safe: Write,
    faulted: bool,
    safed: bool,
}

impl RunAction {
    /// An action driving a single resource. `apply` runs every poll;
    /// `safe` runs once on stop.
    pub fn new(
        name: impl Into<String>,
        resource: ResourceHandle,
        apply: impl FnMut() -> Result<(), ActuatorFault> + Send + 'static,
        safe: impl FnMut() -> Result<(), ActuatorFault> + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            resources: ResourceSet::single(resource),
            apply: Box::new(apply),
            safe: Box::new(safe),
            faulted: false,
            safed: false,
        }
    }

    pub fn boxed(self) -> Box<dyn Action> {
        Box::new(self)
    }

    /// Run the safe-state write once; later calls are no-ops
    fn safe_out(&mut self) {
        if self.safed {
            return;
        }
        self.safed = true;
        if let Err(fault) = (self.safe)() {
            tracing::warn!(action = %self.name, %fault, "safe-state write failed");
        }
    }
}

impl Action for RunAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn resources(&self) -> ResourceSet {
        self.resources.clone()
    }

    fn start(&mut self) {
        self.faulted = false;
        self.safed = false;
    }

    fn poll(&mut self) -> bool {
        if self.faulted {
            return true;
        }
        match (self.apply)() {
            Ok(()) => false,
            Err(fault) => {
                tracing::warn!(action = %self.name, %fault, "actuator fault, ending interrupted");
                self.faulted = true;
                self.safe_out();
                true
            }
        }
    }

    fn stop(&mut self, _interrupted: bool) {
        self.safe_out();
    }
}

/// A leaf action that finishes once its duration has elapsed
pub struct WaitAction<C: Clock> {
    name: String,
    duration: Duration,
    clock: C,
    started_at: Option<Instant>,
}

impl<C: Clock> WaitAction<C> {
    pub fn new(duration: Duration, clock: C) -> Self {
        Self {
            name: format!("wait-{}ms", duration.as_millis()),
            duration,
            clock,
            started_at: None,
        }
    }

    pub fn boxed(self) -> Box<dyn Action>
    where
        C: 'static,
    {
        Box::new(self)
    }
}

impl<C: Clock> Action for WaitAction<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn resources(&self) -> ResourceSet {
        ResourceSet::new()
    }

    fn start(&mut self) {
        self.started_at = Some(self.clock.now());
    }

    fn poll(&mut self) -> bool {
        match self.started_at {
            Some(started) => self.clock.now().duration_since(started) >= self.duration,
            None => true,
        }
    }

    fn stop(&mut self, _interrupted: bool) {}
}

#[cfg(test)]
#[path = "primitive_tests.rs"]
mod tests;
