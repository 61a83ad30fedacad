// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default operator bindings
//!
//! Pure data: which catalog action fires on which input edge. The
//! operator-input layer owns debouncing and edge detection; on a matched
//! edge it resolves the name through the registry and hands the action to
//! the dispatcher (cancelling the held scheduling again on release for
//! `WhileHeld` rows).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Controller {
    Driver,
    Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Button {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
    RightTrigger,
    Start,
    Back,
}

/// How an input edge maps to a catalog action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trigger {
    /// Schedule on the rising edge
    OnRise(&'static str),
    /// Schedule on the falling edge
    OnFall(&'static str),
    /// Schedule on rise, cancel that scheduling on fall
    WhileHeld(&'static str),
}

impl Trigger {
    /// The catalog name this trigger schedules
    pub fn action(&self) -> &'static str {
        match self {
            Trigger::OnRise(name) | Trigger::OnFall(name) | Trigger::WhileHeld(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub controller: Controller,
    pub button: Button,
    pub trigger: Trigger,
}

impl Binding {
    const fn new(controller: Controller, button: Button, trigger: Trigger) -> Self {
        Self {
            controller,
            button,
            trigger,
        }
    }
}

/// The shipped operator layout
pub fn default_bindings() -> Vec<Binding> {
    use Button::*;
    use Controller::*;
    use Trigger::*;

    vec![
        // Right trigger on the drive controller locks the wheels in place
        Binding::new(Driver, RightTrigger, WhileHeld("plant_drive_wheels")),
        // Y controls ground intake
        Binding::new(Operator, Y, OnRise("ground_intake")),
        Binding::new(Operator, Y, OnFall("stop_ground_intake")),
        // Left bumper shoots speaker
        Binding::new(Operator, LeftBumper, OnRise("shoot_speaker")),
        Binding::new(Operator, LeftBumper, OnFall("stop_shoot")),
        // Right bumper shoots amp
        Binding::new(Operator, RightBumper, OnRise("shoot_amp")),
        Binding::new(Operator, RightBumper, OnFall("stop_shoot")),
        // B reverses the loader
        Binding::new(Operator, B, OnRise("reverse_loader")),
        Binding::new(Operator, B, OnFall("stop_loader")),
        // X extends the flap, A retracts it
        Binding::new(Operator, X, OnRise("extend_flap")),
        Binding::new(Operator, A, OnRise("retract_flap")),
        // Start runs the climber, Back reverses it
        Binding::new(Driver, Start, OnRise("start_climber")),
        Binding::new(Driver, Start, OnFall("stop_climber")),
        Binding::new(Driver, Back, OnRise("reverse_climber")),
        Binding::new(Driver, Back, OnFall("stop_climber")),
        // X extends the hook, Y retracts it
        Binding::new(Driver, X, OnRise("extend_hook")),
        Binding::new(Driver, Y, OnRise("retract_hook")),
    ]
}

#[cfg(test)]
#[path = "bindings_tests.rs"]
mod tests;
