// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource-conflict bookkeeping and the active-action table
//!
//! The host loop owns the tick cadence; the dispatcher owns which actions
//! are Running and which resources they hold. Scheduling an action first
//! cancels every active holder of an overlapping resource, so the invariant
//! "at most one Running holder per resource" is maintained across every
//! transition, never just eventually.

use crate::action::{ActionState, BoxedAction};
use crate::event::{CancelReason, Event};
use crate::id::{IdGen, UuidIdGen};
use serde::{Deserialize, Serialize};

/// Identifier for one scheduling of an action
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(pub String);

impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct ActiveAction {
    id: ScheduleId,
    action: BoxedAction,
    state: ActionState,
}

/// The active-action table the host tick loop drives
pub struct Dispatcher<G: IdGen = UuidIdGen> {
    active: Vec<ActiveAction>,
    ids: G,
}

impl Dispatcher<UuidIdGen> {
    pub fn new() -> Self {
        Self::with_ids(UuidIdGen)
    }
}

impl Default for Dispatcher<UuidIdGen> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGen> Dispatcher<G> {
    pub fn with_ids(ids: G) -> Self {
        Self {
            active: Vec::new(),
            ids,
        }
    }

    /// Start an action, cancelling every active holder of an overlapping
    /// resource first.
    pub fn schedule(&mut self, mut action: BoxedAction) -> (ScheduleId, Vec<Event>) {
        let claim = action.resources();
        let winner = action.name().to_string();
        let mut events = Vec::new();

        for entry in &mut self.active {
            let held = entry.action.resources();
            if let Some(resource) = claim.first_shared(&held) {
                entry.action.stop(true);
                entry.state = ActionState::Cancelled;
                tracing::info!(
                    id = %entry.id,
                    name = entry.action.name(),
                    %resource,
                    winner = %winner,
                    "action preempted over resource conflict"
                );
                events.push(Event::ActionCancelled {
                    id: entry.id.0.clone(),
                    name: entry.action.name().to_string(),
                    reason: CancelReason::Conflict {
                        resource,
                        winner: winner.clone(),
                    },
                });
            }
        }
        self.active.retain(|e| e.state == ActionState::Running);

        let id = ScheduleId(self.ids.next());
        action.start();
        tracing::debug!(id = %id, name = %winner, resources = %claim, "action scheduled");
        events.push(Event::ActionScheduled {
            id: id.0.clone(),
            name: winner,
        });
        self.active.push(ActiveAction {
            id: id.clone(),
            action,
            state: ActionState::Running,
        });

        (id, events)
    }

    /// Poll every active action once, in scheduling order. Finished actions
    /// are stopped normally and retired.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        for entry in &mut self.active {
            if entry.action.poll() {
                entry.action.stop(false);
                entry.state = ActionState::Finished;
                tracing::debug!(id = %entry.id, name = entry.action.name(), "action finished");
                events.push(Event::ActionFinished {
                    id: entry.id.0.clone(),
                    name: entry.action.name().to_string(),
                });
            }
        }
        self.active.retain(|e| e.state == ActionState::Running);
        events
    }

    /// Cancel one scheduling (falling trigger edge, mode change)
    pub fn cancel(&mut self, id: &ScheduleId) -> Vec<Event> {
        let mut events = Vec::new();
        for entry in &mut self.active {
            if &entry.id == id {
                entry.action.stop(true);
                entry.state = ActionState::Cancelled;
                tracing::debug!(id = %entry.id, name = entry.action.name(), "action cancelled");
                events.push(Event::ActionCancelled {
                    id: entry.id.0.clone(),
                    name: entry.action.name().to_string(),
                    reason: CancelReason::Released,
                });
            }
        }
        self.active.retain(|e| e.state == ActionState::Running);
        events
    }

    /// Cancel everything (disable / end of match)
    pub fn cancel_all(&mut self) -> Vec<Event> {
        let ids: Vec<ScheduleId> = self.active.iter().map(|e| e.id.clone()).collect();
        ids.iter().flat_map(|id| self.cancel(id)).collect()
    }

    pub fn is_active(&self, id: &ScheduleId) -> bool {
        self.active.iter().any(|e| &e.id == id)
    }

    /// Lifecycle state of a scheduling; None once it has been retired
    pub fn state_of(&self, id: &ScheduleId) -> Option<ActionState> {
        self.active.iter().find(|e| &e.id == id).map(|e| e.state)
    }

    /// The scheduling currently holding a resource, if any
    pub fn holder_of(&self, resource: crate::resource::ResourceHandle) -> Option<&ScheduleId> {
        self.active
            .iter()
            .find(|e| e.action.resources().contains(resource))
            .map(|e| &e.id)
    }

    /// Names of active actions, in scheduling order
    pub fn active_names(&self) -> Vec<&str> {
        self.active.iter().map(|e| e.action.name()).collect()
    }

    /// Every active scheduling and the resources it holds
    pub fn active_claims(&self) -> Vec<(&ScheduleId, crate::resource::ResourceSet)> {
        self.active
            .iter()
            .map(|e| (&e.id, e.action.resources()))
            .collect()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
