//! Grid storage and neighbor topology for Petri simulations.
//!
//! This crate defines the [`Grid`] — a fully populated, fixed-size
//! rectangular collection of [`Cell`]s — and the [`Neighborhood`]
//! queries rules use to inspect a cell's surroundings. Boundary
//! handling is always clipping: out-of-bounds neighbor candidates are
//! excluded, never wrapped or clamped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod neighborhood;

pub use cell::Cell;
pub use grid::Grid;
pub use neighborhood::Neighborhood;
