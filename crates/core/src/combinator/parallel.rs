// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel combinators
//!
//! `ParallelAll` finishes once every child has; `ParallelRace` finishes as
//! soon as any child does. Children are polled in insertion order and a
//! finish is visible to the rest of the same tick's bookkeeping. Race
//! tie-break: every child finishing in the deciding tick is a winner; only
//! children still running after all finish-checks are interrupted.

use crate::action::{Action, BoxedAction};
use crate::resource::ResourceSet;

struct Child {
    action: BoxedAction,
    finished: bool,
}

fn wrap(children: Vec<BoxedAction>) -> (Vec<Child>, ResourceSet) {
    let resources = super::union_of(&children);
    let children = children
        .into_iter()
        .map(|action| Child {
            action,
            finished: false,
        })
        .collect();
    (children, resources)
}

/// Runs every child concurrently; complete when the last one finishes
pub struct ParallelAll {
    name: String,
    children: Vec<Child>,
    resources: ResourceSet,
}

impl ParallelAll {
    pub fn new(name: impl Into<String>, children: Vec<BoxedAction>) -> Self {
        let (children, resources) = wrap(children);
        Self {
            name: name.into(),
            children,
            resources,
        }
    }

    pub fn boxed(self) -> BoxedAction {
        Box::new(self)
    }
}

impl Action for ParallelAll {
    fn name(&self) -> &str {
        &self.name
    }

    fn resources(&self) -> ResourceSet {
        self.resources.clone()
    }

    fn start(&mut self) {
        for child in &mut self.children {
            child.finished = false;
            child.action.start();
        }
    }

    fn poll(&mut self) -> bool {
        let mut all_finished = true;
        for child in &mut self.children {
            if child.finished {
                continue;
            }
            if child.action.poll() {
                child.action.stop(false);
                child.finished = true;
            } else {
                all_finished = false;
            }
        }
        all_finished
    }

    fn stop(&mut self, interrupted: bool) {
        for child in &mut self.children {
            if !child.finished {
                child.action.stop(interrupted);
                child.finished = true;
            }
        }
    }
}

/// Runs every child concurrently; complete when the first one finishes
pub struct ParallelRace {
    name: String,
    children: Vec<Child>,
    resources: ResourceSet,
}

impl ParallelRace {
    pub fn new(name: impl Into<String>, children: Vec<BoxedAction>) -> Self {
        let (children, resources) = wrap(children);
        Self {
            name: name.into(),
            children,
            resources,
        }
    }

    pub fn boxed(self) -> BoxedAction {
        Box::new(self)
    }
}

impl Action for ParallelRace {
    fn name(&self) -> &str {
        &self.name
    }

    fn resources(&self) -> ResourceSet {
        self.resources.clone()
    }

    fn start(&mut self) {
        for child in &mut self.children {
            child.finished = false;
            child.action.start();
        }
    }

    fn poll(&mut self) -> bool {
        if self.children.is_empty() {
            return true;
        }
        // Every child gets its finish-check before anyone is interrupted,
        // so same-tick ties all count as winners.
        let mut any_finished = false;
        for child in &mut self.children {
            if child.finished {
                continue;
            }
            if child.action.poll() {
                child.action.stop(false);
                child.finished = true;
                any_finished = true;
            }
        }
        if !any_finished {
            return false;
        }
        for child in &mut self.children {
            if !child.finished {
                child.action.stop(true);
                child.finished = true;
            }
        }
        true
    }

    fn stop(&mut self, interrupted: bool) {
        for child in &mut self.children {
            if !child.finished {
                child.action.stop(interrupted);
                child.finished = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "parallel_tests.rs"]
mod tests;
