// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted probe actions for exercising combinators in tests

use crate::action::{Action, BoxedAction};
use crate::resource::{ResourceHandle, ResourceSet};
use std::sync::{Arc, Mutex};

/// One recorded lifecycle call on a probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProbeCall {
    Start(&'static str),
    Poll(&'static str),
    Stop(&'static str, bool),
}

/// Shared call log so ordering can be asserted across sibling probes
#[derive(Clone, Default)]
pub(crate) struct ProbeLog(Arc<Mutex<Vec<ProbeCall>>>);

impl ProbeLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: ProbeCall) {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).push(call);
    }

    pub fn calls(&self) -> Vec<ProbeCall> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Just the stop calls, in order
    pub fn stops(&self) -> Vec<(&'static str, bool)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ProbeCall::Stop(name, interrupted) => Some((name, interrupted)),
                _ => None,
            })
            .collect()
    }

    /// Names of probes that have been started, in order
    pub fn starts(&self) -> Vec<&'static str> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ProbeCall::Start(name) => Some(name),
                _ => None,
            })
            .collect()
    }
}

/// An action that finishes after a scripted number of polls (or never)
pub(crate) struct Probe {
    name: &'static str,
    resources: ResourceSet,
    finish_after: Option<u32>,
    polls: u32,
    log: ProbeLog,
}

impl Probe {
    /// A probe that never finishes on its own
    pub fn endless(name: &'static str, log: &ProbeLog) -> Self {
        Self {
            name,
            resources: ResourceSet::new(),
            finish_after: None,
            polls: 0,
            log: log.clone(),
        }
    }

    /// A probe whose `polls`-th poll reports finished
    pub fn finishing_after(name: &'static str, polls: u32, log: &ProbeLog) -> Self {
        Self {
            finish_after: Some(polls),
            ..Self::endless(name, log)
        }
    }

    pub fn claiming(mut self, handle: ResourceHandle) -> Self {
        self.resources.insert(handle);
        self
    }

    pub fn boxed(self) -> BoxedAction {
        Box::new(self)
    }
}

impl Action for Probe {
    fn name(&self) -> &str {
        self.name
    }

    fn resources(&self) -> ResourceSet {
        self.resources.clone()
    }

    fn start(&mut self) {
        self.polls = 0;
        self.log.record(ProbeCall::Start(self.name));
    }

    fn poll(&mut self) -> bool {
        self.log.record(ProbeCall::Poll(self.name));
        self.polls += 1;
        match self.finish_after {
            Some(n) => self.polls >= n,
            None => false,
        }
    }

    fn stop(&mut self, interrupted: bool) {
        self.log.record(ProbeCall::Stop(self.name, interrupted));
    }
}
