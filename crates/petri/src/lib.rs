//! Petri: a discrete cellular automaton workbench.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Petri sub-crates. For most users, adding `petri` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use petri::prelude::*;
//!
//! // A 3-cell blinker on a 5x5 grid.
//! let rule = LifeRule::builder()
//!     .layout([Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)])
//!     .build()
//!     .unwrap();
//! let mut sim = Automaton::new(5, 5, rule).unwrap();
//!
//! sim.step();
//!
//! // The horizontal triple became a vertical triple: still 3 alive.
//! assert_eq!(sim.generation(), Generation(1));
//! assert_eq!(sim.census()[&LifeState::Alive], 3);
//! assert_eq!(sim.grid().state(Coord::new(1, 2)).unwrap(), LifeState::Alive);
//! ```
//!
//! Custom dynamics implement the [`rule::Rule`] trait: a seeding
//! function plus a per-cell transition evaluated against the frozen
//! pre-step snapshot. See [`rules`] for the three reference rules.
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `petri-core` | `Coord`, `Generation`, error types |
//! | [`grid`] | `petri-grid` | `Grid`, `Cell`, `Neighborhood` |
//! | [`rule`] | `petri-rule` | The `Rule` trait and the `Automaton` engine |
//! | [`rules`] | `petri-rules` | Life, Fire, and Segregation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`petri-core`).
pub use petri_core as types;

/// Grid storage and neighbor topology (`petri-grid`).
///
/// Provides [`grid::Grid`], [`grid::Cell`], and the boundary-clipped
/// [`grid::Neighborhood`] queries.
pub use petri_grid as grid;

/// The rule trait and update engine (`petri-rule`).
///
/// The [`rule::Rule`] trait is the main extension point for
/// user-defined dynamics; [`rule::Automaton`] runs them.
pub use petri_rule as rule;

/// Reference rule implementations (`petri-rules`).
///
/// Includes [`rules::LifeRule`], [`rules::FireRule`], and
/// [`rules::SegregationRule`].
pub use petri_rules as rules;

/// Common imports for typical Petri usage.
///
/// ```rust
/// use petri::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use petri_core::{CellState, ConfigError, Coord, Generation, GridError};

    // Grid
    pub use petri_grid::{Cell, Grid, Neighborhood};

    // Rule trait and engine
    pub use petri_rule::{Automaton, Outcome, Rule};

    // Reference rules
    pub use petri_rules::{
        FireRule, FireState, LifeRule, LifeState, SegState, SegregationRule,
    };
}
