//! Reference rules for the Petri cellular automaton workbench.
//!
//! Three rule families exercising the three kinds of dynamics the
//! engine supports:
//!
//! - [`LifeRule`] — deterministic (Conway's Game of Life).
//! - [`FireRule`] — probabilistic (forest-fire spread).
//! - [`SegregationRule`] — relocation-based (Schelling segregation).
//!
//! Every rule is configured through a validating builder and owns an
//! independent `ChaCha8` random source seeded from an injectable
//! `u64`, so identical configurations produce identical runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fire;
pub mod life;
pub mod segregation;

pub use fire::{FireRule, FireRuleBuilder, FireState};
pub use life::{LifeRule, LifeRuleBuilder, LifeState};
pub use segregation::{SegState, SegregationRule, SegregationRuleBuilder};
