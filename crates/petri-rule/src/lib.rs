//! The [`Rule`] trait and the [`Automaton`] generation-update engine.
//!
//! A rule supplies a seeding function and a per-cell transition
//! function; the automaton composes them into the synchronous update
//! skeleton: sweep every coordinate, fetch its neighbor set from the
//! frozen pre-step snapshot, apply the transition, stage the writes,
//! swap buffers. Rules are selected at construction — there is no
//! inheritance hierarchy, just a strategy object.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod rule;

pub use automaton::Automaton;
pub use rule::{Outcome, Rule};
