// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Physical resource identity and exclusive-ownership sets
//!
//! A `ResourceHandle` names one physical subsystem. At most one Running
//! action may hold a given handle at any instant; the dispatcher enforces
//! this by cancelling any active holder whose claim overlaps a newly
//! scheduled action's (see `dispatch`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifies a physical subsystem
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ResourceHandle {
    DriveBase,
    Intake,
    Loader,
    Shooter,
    Climber,
    Hook,
    Flap,
}

impl ResourceHandle {
    pub const ALL: [ResourceHandle; 7] = [
        ResourceHandle::DriveBase,
        ResourceHandle::Intake,
        ResourceHandle::Loader,
        ResourceHandle::Shooter,
        ResourceHandle::Climber,
        ResourceHandle::Hook,
        ResourceHandle::Flap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResourceHandle::DriveBase => "drive-base",
            ResourceHandle::Intake => "intake",
            ResourceHandle::Loader => "loader",
            ResourceHandle::Shooter => "shooter",
            ResourceHandle::Climber => "climber",
            ResourceHandle::Hook => "hook",
            ResourceHandle::Flap => "flap",
        }
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An ordered set of resource handles.
///
/// Iteration order is the handle declaration order, so conflict checks and
/// event payloads are deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSet(BTreeSet<ResourceHandle>);

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding a single handle
    pub fn single(handle: ResourceHandle) -> Self {
        Self(BTreeSet::from([handle]))
    }

    pub fn insert(&mut self, handle: ResourceHandle) {
        self.0.insert(handle);
    }

    pub fn contains(&self, handle: ResourceHandle) -> bool {
        self.0.contains(&handle)
    }

    /// The union of this set and another (a composite's claim is the union
    /// of its children's)
    pub fn union(&self, other: &ResourceSet) -> ResourceSet {
        Self(self.0.union(&other.0).copied().collect())
    }

    /// Whether any handle appears in both sets
    pub fn intersects(&self, other: &ResourceSet) -> bool {
        self.0.intersection(&other.0).next().is_some()
    }

    /// The first handle shared with `other`, in declaration order
    pub fn first_shared(&self, other: &ResourceSet) -> Option<ResourceHandle> {
        self.0.intersection(&other.0).next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ResourceHandle> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ResourceHandle> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = ResourceHandle>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ResourceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for handle in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", handle)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
