// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional gate
//!
//! `SkipIf` wraps an action with a predicate sampled exactly once at
//! `start()`. A true sample means the work is already satisfied: the wrapped
//! action is never started, polled, or stopped. A false sample makes the
//! gate a transparent passthrough for the rest of the lifecycle.

use crate::action::{Action, BoxedAction};
use crate::resource::ResourceSet;

/// A zero-argument condition, typically a closure over a sensor handle
pub type Predicate = Box<dyn FnMut() -> bool + Send>;

pub struct SkipIf {
    name: String,
    predicate: Predicate,
    inner: BoxedAction,
    skipped: bool,
}

impl SkipIf {
    pub fn new(
        name: impl Into<String>,
        predicate: impl FnMut() -> bool + Send + 'static,
        inner: BoxedAction,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            inner,
            skipped: false,
        }
    }

    pub fn boxed(self) -> BoxedAction {
        Box::new(self)
    }
}

impl Action for SkipIf {
    fn name(&self) -> &str {
        &self.name
    }

    fn resources(&self) -> ResourceSet {
        self.inner.resources()
    }

    fn start(&mut self) {
        self.skipped = (self.predicate)();
        if !self.skipped {
            self.inner.start();
        }
    }

    fn poll(&mut self) -> bool {
        if self.skipped {
            return true;
        }
        self.inner.poll()
    }

    fn stop(&mut self, interrupted: bool) {
        if !self.skipped {
            self.inner.stop(interrupted);
        }
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
