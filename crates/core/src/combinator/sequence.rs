// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential combinator
//!
//! Children run one at a time in declaration order. When the active child
//! reports finished, its successor is started within the same tick so no
//! tick is wasted on the transition; the successor's first poll happens on
//! the following tick.

use crate::action::{Action, BoxedAction};
use crate::resource::ResourceSet;

pub struct Sequence {
    name: String,
    children: Vec<BoxedAction>,
    resources: ResourceSet,
    index: usize,
}

impl Sequence {
    pub fn new(name: impl Into<String>, children: Vec<BoxedAction>) -> Self {
        let resources = super::union_of(&children);
        Self {
            name: name.into(),
            children,
            resources,
            index: 0,
        }
    }

    pub fn boxed(self) -> BoxedAction {
        Box::new(self)
    }
}

impl Action for Sequence {
    fn name(&self) -> &str {
        &self.name
    }

    fn resources(&self) -> ResourceSet {
        self.resources.clone()
    }

    fn start(&mut self) {
        self.index = 0;
        if let Some(first) = self.children.first_mut() {
            first.start();
        }
    }

    fn poll(&mut self) -> bool {
        if self.index >= self.children.len() {
            return true;
        }
        if self.children[self.index].poll() {
            self.children[self.index].stop(false);
            self.index += 1;
            match self.children.get_mut(self.index) {
                Some(next) => next.start(),
                None => return true,
            }
        }
        false
    }

    fn stop(&mut self, interrupted: bool) {
        // Finished children were stopped as they finished; children that
        // never started get no call. Only the active child is forwarded to.
        if let Some(active) = self.children.get_mut(self.index) {
            active.stop(interrupted);
        }
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
