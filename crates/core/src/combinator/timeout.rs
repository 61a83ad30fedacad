// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timeout decorator
//!
//! The deadline is measured from the decorator's own `start()`, not the
//! wrapped action's. The elapsed check runs before the wrapped poll, so the
//! decorator finishes on the first tick at or past the deadline even if the
//! wrapped action would have kept running; the wrapped action is then
//! stopped `interrupted = true` unless it had already finished.

use crate::action::{Action, BoxedAction};
use crate::clock::Clock;
use crate::resource::ResourceSet;
use std::time::{Duration, Instant};

pub struct Deadline<C: Clock> {
    name: String,
    inner: BoxedAction,
    limit: Duration,
    clock: C,
    started_at: Option<Instant>,
    inner_done: bool,
}

impl<C: Clock> Deadline<C> {
    pub fn new(inner: BoxedAction, limit: Duration, clock: C) -> Self {
        let name = format!("{}@{}ms", inner.name(), limit.as_millis());
        Self {
            name,
            inner,
            limit,
            clock,
            started_at: None,
            inner_done: false,
        }
    }

    pub fn boxed(self) -> BoxedAction
    where
        C: 'static,
    {
        Box::new(self)
    }

    fn expired(&self) -> bool {
        match self.started_at {
            Some(started) => self.clock.now().duration_since(started) >= self.limit,
            None => false,
        }
    }
}

impl<C: Clock> Action for Deadline<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn resources(&self) -> ResourceSet {
        self.inner.resources()
    }

    fn start(&mut self) {
        self.started_at = Some(self.clock.now());
        self.inner_done = false;
        self.inner.start();
    }

    fn poll(&mut self) -> bool {
        if self.expired() {
            if !self.inner_done {
                self.inner.stop(true);
                self.inner_done = true;
            }
            return true;
        }
        if !self.inner_done && self.inner.poll() {
            self.inner.stop(false);
            self.inner_done = true;
        }
        self.inner_done
    }

    fn stop(&mut self, interrupted: bool) {
        if !self.inner_done {
            self.inner.stop(interrupted);
            self.inner_done = true;
        }
    }
}

#[cfg(test)]
#[path = "timeout_tests.rs"]
mod tests;
