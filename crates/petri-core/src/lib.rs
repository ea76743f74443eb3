//! Core types for the Petri cellular automaton workbench.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Petri workspace:
//! grid coordinates, the generation counter, the [`CellState`] bound,
//! and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;
pub mod state;

pub use coord::Coord;
pub use error::{ConfigError, GridError};
pub use id::Generation;
pub use state::CellState;
