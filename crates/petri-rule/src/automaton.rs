//! The double-buffered generation-update engine.

use crate::rule::{Outcome, Rule};
use indexmap::IndexMap;
use petri_core::{ConfigError, Coord, Generation, GridError};
use petri_grid::{Cell, Grid};
use std::mem;

/// A cellular automaton: a grid evolved by a pluggable [`Rule`].
///
/// The automaton owns two grid buffers. `current` holds the published
/// generation; `staged` is the write target during a step. Each
/// [`step`](Automaton::step) evaluates every transition against
/// `current` — the frozen pre-step snapshot — stages the results, then
/// swaps the buffers. Mutating a cell can therefore never leak into a
/// neighbor's transition within the same generation, for any rule.
///
/// # Lifecycle
///
/// Constructed once with dimensions and a rule; seeding runs inside
/// [`new`](Automaton::new) and any failure aborts construction. Each
/// generation mutates state in place; dropping the automaton releases
/// everything — no external resources are held.
#[derive(Debug)]
pub struct Automaton<R: Rule> {
    rule: R,
    current: Grid<R::State>,
    staged: Grid<R::State>,
    generation: Generation,
}

impl<R: Rule> Automaton<R> {
    /// Build a `rows × cols` automaton and run the rule's seeding.
    ///
    /// Fails with a [`ConfigError`] if either dimension is invalid or
    /// the rule rejects its layout; no partially-initialized automaton
    /// results.
    pub fn new(rows: u32, cols: u32, mut rule: R) -> Result<Self, ConfigError> {
        let mut current = Grid::new(rows, cols, rule.default_state())?;
        rule.seed(&mut current)?;
        let staged = current.clone();
        Ok(Self {
            rule,
            current,
            staged,
            generation: Generation(0),
        })
    }

    /// Number of rows. Invariant across steps.
    pub fn rows(&self) -> u32 {
        self.current.rows()
    }

    /// Number of columns. Invariant across steps.
    pub fn cols(&self) -> u32 {
        self.current.cols()
    }

    /// The published generation counter.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The rule driving this automaton.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The published grid.
    pub fn grid(&self) -> &Grid<R::State> {
        &self.current
    }

    /// Row-major iterator over the published cells, for rendering.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<R::State>> {
        self.current.cells()
    }

    /// Per-state cell counts for the published generation.
    ///
    /// Covers every state present; the counts sum to `rows × cols`.
    pub fn census(&self) -> IndexMap<R::State, usize> {
        self.current.census()
    }

    /// Override a single cell in the published generation.
    ///
    /// Driver-facing: explicit layouts and interactive editing go
    /// through here between steps. Out-of-bounds coordinates fail
    /// explicitly.
    pub fn set_state(&mut self, coord: Coord, state: R::State) -> Result<(), GridError> {
        self.current.set_state(coord, state)
    }

    /// Advance one generation and return the new counter.
    ///
    /// One step is one complete synchronous sweep: every coordinate is
    /// visited in row-major order, its neighbor set fetched from the
    /// pre-step snapshot, and the rule's transition applied. `Become`
    /// writes land in the staged buffer; `Relocate` coordinates are
    /// collected and handed to [`Rule::settle`] after the sweep. The
    /// buffers swap only once the generation is complete.
    pub fn step(&mut self) -> Generation {
        let Self {
            rule,
            current,
            staged,
            generation,
        } = self;

        // Incremental write mode: staged starts as a copy of the
        // published generation, transitions overwrite what changes.
        staged.clone_from(current);

        let mut movers: Vec<Coord> = Vec::new();
        current.sweep(rule.neighborhood(), |coord, state, neighbors| {
            match rule.transition(state, neighbors) {
                Outcome::Unchanged => {}
                Outcome::Become(next) => staged[coord] = next,
                Outcome::Relocate => movers.push(coord),
            }
        });

        if !movers.is_empty() {
            rule.settle(staged, &movers);
        }

        mem::swap(current, staged);
        *generation = generation.next();
        *generation
    }

    /// Run `generations` steps back to back.
    pub fn advance(&mut self, generations: u64) -> Generation {
        for _ in 0..generations {
            self.step();
        }
        self.generation
    }
}
