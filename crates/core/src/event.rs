// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic events for host telemetry
//!
//! The dispatcher and registry report transitions as events rather than
//! faults; what to publish (dashboard, log sink) is the host's concern.

use crate::resource::ResourceHandle;
use serde::{Deserialize, Serialize};

/// Events emitted by the dispatcher and registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// An action was started and now holds its resources
    ActionScheduled { id: String, name: String },
    /// An action reported finished and was stopped normally
    ActionFinished { id: String, name: String },
    /// An action was stopped before natural completion
    ActionCancelled {
        id: String,
        name: String,
        reason: CancelReason,
    },
    /// A later factory reused an already-registered name and was dropped
    RegistryCollision { name: String },
}

/// Why an action was cancelled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancelReason {
    /// A newly scheduled action claimed an overlapping resource
    Conflict {
        resource: ResourceHandle,
        winner: String,
    },
    /// The triggering input released or the host cancelled explicitly
    Released,
}

impl Event {
    /// Get the event name for pattern matching
    /// Format: "category:action"
    pub fn name(&self) -> String {
        match self {
            Event::ActionScheduled { .. } => "action:scheduled".to_string(),
            Event::ActionFinished { .. } => "action:finished".to_string(),
            Event::ActionCancelled { .. } => "action:cancelled".to_string(),
            Event::RegistryCollision { .. } => "registry:collision".to_string(),
        }
    }
}
