// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Combinators: actions built by composing other actions
//!
//! Each combinator implements the same `Action` contract as its children,
//! so composition nests arbitrarily. A composite's resource claim is always
//! the union of its children's.

pub mod gate;
pub mod parallel;
pub mod sequence;
pub mod timeout;

pub use gate::SkipIf;
pub use parallel::{ParallelAll, ParallelRace};
pub use sequence::Sequence;
pub use timeout::Deadline;

use crate::action::BoxedAction;
use crate::resource::ResourceSet;

/// Union of the children's claims, cached at construction by composites
fn union_of(children: &[BoxedAction]) -> ResourceSet {
    children
        .iter()
        .fold(ResourceSet::new(), |acc, c| acc.union(&c.resources()))
}
