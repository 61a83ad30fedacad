// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The action contract
//!
//! An action is the smallest schedulable behavior: a cooperative unit of
//! work the host loop drives through `start`/`poll`/`stop`. Combinators
//! implement the same trait over child actions, so a whole behavior tree is
//! one `Action` to the dispatcher.

use crate::resource::ResourceSet;
use serde::{Deserialize, Serialize};

/// A boxed action, the ownership unit of composition
pub type BoxedAction = Box<dyn Action>;

/// The capability contract every schedulable behavior implements.
///
/// Calling discipline (enforced by the dispatcher and combinators):
/// `start` exactly once per scheduling, before the first `poll`; `poll`
/// once per tick until it returns true; `stop` exactly once, with
/// `interrupted = true` when the action did not run to natural completion.
/// No hook may block or sleep.
pub trait Action: Send {
    /// Identity used in registry lookups, events, and logs
    fn name(&self) -> &str;

    /// The exclusive resources this action drives.
    ///
    /// A composite's claim is the union of its children's.
    fn resources(&self) -> ResourceSet;

    /// Per-scheduling setup
    fn start(&mut self);

    /// Advance one tick; true means the work is complete
    fn poll(&mut self) -> bool;

    /// Drive actuators to a safe state
    fn stop(&mut self, interrupted: bool);
}

/// Lifecycle state as tracked by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionState {
    Idle,
    Running,
    Finished,
    Cancelled,
}

impl ActionState {
    /// Check if this state is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, ActionState::Finished | ActionState::Cancelled)
    }
}
