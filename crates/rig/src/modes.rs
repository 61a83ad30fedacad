// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discrete actuator value types

use serde::{Deserialize, Serialize};

/// Position of a solenoid-driven latch (hook, flap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatchMode {
    Extend,
    Retract,
}

/// Discrete drive-base poses the sequencing layer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrivePose {
    /// Wheels turned inward so the machine resists being pushed
    Plant,
}
