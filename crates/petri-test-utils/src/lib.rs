//! Test utilities and rule fixtures for Petri development.
//!
//! Four standard rules for engine and integration testing:
//!
//! - [`IdentityRule`] — every cell is unchanged (fixed-point tests).
//! - [`ConstRule`] — every cell becomes a constant (full-sweep tests).
//! - [`FlipRule`] — every `bool` cell toggles (double-buffer tests).
//! - [`SnapshotProbeRule`] — flips cells while recording whether any
//!   transition ever observed a same-step write.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use petri_core::CellState;
use petri_grid::Neighborhood;
use petri_rule::{Outcome, Rule};

/// Leaves every cell unchanged. The published grid is a fixed point.
pub struct IdentityRule<S: CellState> {
    default: S,
}

impl<S: CellState> IdentityRule<S> {
    pub fn new(default: S) -> Self {
        Self { default }
    }
}

impl<S: CellState> Rule for IdentityRule<S> {
    type State = S;

    fn name(&self) -> &str {
        "identity"
    }

    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::Moore
    }

    fn default_state(&self) -> S {
        self.default
    }

    fn transition(&mut self, _state: S, _neighbors: &[S]) -> Outcome<S> {
        Outcome::Unchanged
    }
}

/// Rewrites every cell to a constant value each generation.
///
/// Useful for verifying that a step really visits the whole grid and
/// that staged writes land in the published buffer after the swap.
pub struct ConstRule<S: CellState> {
    default: S,
    value: S,
}

impl<S: CellState> ConstRule<S> {
    pub fn new(default: S, value: S) -> Self {
        Self { default, value }
    }
}

impl<S: CellState> Rule for ConstRule<S> {
    type State = S;

    fn name(&self) -> &str {
        "const"
    }

    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::Moore
    }

    fn default_state(&self) -> S {
        self.default
    }

    fn transition(&mut self, _state: S, _neighbors: &[S]) -> Outcome<S> {
        Outcome::Become(self.value)
    }
}

/// Toggles every `bool` cell each generation — period 2 everywhere.
pub struct FlipRule;

impl Rule for FlipRule {
    type State = bool;

    fn name(&self) -> &str {
        "flip"
    }

    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::Moore
    }

    fn default_state(&self) -> bool {
        false
    }

    fn transition(&mut self, state: bool, _neighbors: &[bool]) -> Outcome<bool> {
        Outcome::Become(!state)
    }
}

/// Flips all-`false` cells to `true` while probing snapshot semantics.
///
/// Starting from an all-`false` grid, every transition in the first
/// sweep flips its cell to `true`. Under correct snapshot semantics no
/// transition can see a `true` neighbor during that sweep; an engine
/// that lets staged writes leak back into neighbor reads trips the
/// probe.
pub struct SnapshotProbeRule {
    saw_updated_neighbor: bool,
}

impl SnapshotProbeRule {
    pub fn new() -> Self {
        Self {
            saw_updated_neighbor: false,
        }
    }

    /// Whether any transition so far observed a `true` neighbor.
    pub fn saw_updated_neighbor(&self) -> bool {
        self.saw_updated_neighbor
    }
}

impl Default for SnapshotProbeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for SnapshotProbeRule {
    type State = bool;

    fn name(&self) -> &str {
        "snapshot_probe"
    }

    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::Moore
    }

    fn default_state(&self) -> bool {
        false
    }

    fn transition(&mut self, _state: bool, neighbors: &[bool]) -> Outcome<bool> {
        if neighbors.iter().any(|&n| n) {
            self.saw_updated_neighbor = true;
        }
        Outcome::Become(true)
    }
}
