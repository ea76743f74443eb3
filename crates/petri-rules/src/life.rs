//! Conway's Game of Life.
//!
//! Deterministic two-state rule over the Moore neighborhood: a live
//! cell survives with 2 or 3 live neighbors, a dead cell is born with
//! exactly 3. Transitions are evaluated against the pre-step snapshot,
//! so the result is identical for any cell visitation order.
//!
//! Seeding is either an independent per-cell Bernoulli draw
//! (`percent_alive`) or an explicit list of initially-alive
//! coordinates; the two are mutually exclusive.

use petri_core::{ConfigError, Coord};
use petri_grid::{Grid, Neighborhood};
use petri_rule::{Outcome, Rule};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::str::FromStr;

/// The Life alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifeState {
    /// No organism in the cell.
    #[default]
    Dead,
    /// A live organism.
    Alive,
}

impl fmt::Display for LifeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "dead"),
            Self::Alive => write!(f, "alive"),
        }
    }
}

impl FromStr for LifeState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dead" => Ok(Self::Dead),
            "alive" => Ok(Self::Alive),
            other => Err(ConfigError::UnknownState {
                label: other.to_string(),
            }),
        }
    }
}

/// How the initial generation is populated.
#[derive(Clone, Debug)]
enum Seeding {
    /// Each cell independently alive with this probability.
    Density(f64),
    /// Exactly these coordinates start alive.
    Layout(Vec<Coord>),
}

/// Conway's Game of Life rule.
///
/// Constructed via [`LifeRule::builder`].
#[derive(Debug)]
pub struct LifeRule {
    seeding: Seeding,
    rng: ChaCha8Rng,
}

/// Builder for [`LifeRule`].
///
/// Exactly one of [`percent_alive`](LifeRuleBuilder::percent_alive) or
/// [`layout`](LifeRuleBuilder::layout) must be supplied.
pub struct LifeRuleBuilder {
    percent_alive: Option<f64>,
    layout: Option<Vec<Coord>>,
    seed: u64,
}

impl LifeRule {
    /// Create a new builder for configuring a `LifeRule`.
    pub fn builder() -> LifeRuleBuilder {
        LifeRuleBuilder {
            percent_alive: None,
            layout: None,
            seed: 0,
        }
    }
}

impl LifeRuleBuilder {
    /// Seed each cell alive with this probability in `[0, 1]`.
    pub fn percent_alive(mut self, p: f64) -> Self {
        self.percent_alive = Some(p);
        self
    }

    /// Seed exactly these coordinates alive.
    pub fn layout(mut self, coords: impl IntoIterator<Item = Coord>) -> Self {
        self.layout = Some(coords.into_iter().collect());
        self
    }

    /// Seed for the rule's random source (default: 0).
    ///
    /// Only the density seeding draws from it; layout seeding is
    /// fully deterministic regardless.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the rule, validating all configuration.
    ///
    /// # Errors
    ///
    /// - `MissingParameter` if neither seeding mode is set
    /// - `ConflictingParameters` if both are set
    /// - `ParameterOutOfRange` if `percent_alive` is not in `[0, 1]`
    pub fn build(self) -> Result<LifeRule, ConfigError> {
        let seeding = match (self.percent_alive, self.layout) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::ConflictingParameters {
                    first: "percent_alive",
                    second: "layout",
                })
            }
            (None, None) => {
                return Err(ConfigError::MissingParameter {
                    name: "percent_alive",
                })
            }
            (Some(p), None) => {
                if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                    return Err(ConfigError::ParameterOutOfRange {
                        name: "percent_alive",
                        value: p,
                    });
                }
                Seeding::Density(p)
            }
            (None, Some(coords)) => Seeding::Layout(coords),
        };
        Ok(LifeRule {
            seeding,
            rng: ChaCha8Rng::seed_from_u64(self.seed),
        })
    }
}

impl Rule for LifeRule {
    type State = LifeState;

    fn name(&self) -> &str {
        "life"
    }

    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::Moore
    }

    fn default_state(&self) -> LifeState {
        LifeState::Dead
    }

    fn seed(&mut self, grid: &mut Grid<LifeState>) -> Result<(), ConfigError> {
        match &self.seeding {
            Seeding::Density(p) => {
                let p = *p;
                for r in 0..grid.rows() {
                    for c in 0..grid.cols() {
                        if self.rng.random_bool(p) {
                            grid[Coord::new(r, c)] = LifeState::Alive;
                        }
                    }
                }
            }
            Seeding::Layout(coords) => {
                for &coord in coords {
                    grid.set_state(coord, LifeState::Alive).map_err(|_| {
                        ConfigError::LayoutOutOfBounds {
                            coord,
                            rows: grid.rows(),
                            cols: grid.cols(),
                        }
                    })?;
                }
            }
        }
        Ok(())
    }

    fn transition(&mut self, state: LifeState, neighbors: &[LifeState]) -> Outcome<LifeState> {
        let alive = neighbors.iter().filter(|&&n| n == LifeState::Alive).count();
        match (state, alive) {
            (LifeState::Alive, 2 | 3) => Outcome::Unchanged,
            (LifeState::Alive, _) => Outcome::Become(LifeState::Dead),
            (LifeState::Dead, 3) => Outcome::Become(LifeState::Alive),
            (LifeState::Dead, _) => Outcome::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_rule::Automaton;

    fn c(row: u32, col: u32) -> Coord {
        Coord::new(row, col)
    }

    fn alive_coords(sim: &Automaton<LifeRule>) -> Vec<Coord> {
        sim.cells()
            .filter(|cell| cell.state() == LifeState::Alive)
            .map(|cell| cell.coord())
            .collect()
    }

    // ── Builder ─────────────────────────────────────────────────

    #[test]
    fn builder_requires_a_seeding_mode() {
        assert!(matches!(
            LifeRule::builder().build(),
            Err(ConfigError::MissingParameter { .. })
        ));
    }

    #[test]
    fn builder_rejects_both_seeding_modes() {
        let result = LifeRule::builder()
            .percent_alive(0.5)
            .layout([c(0, 0)])
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::ConflictingParameters { .. })
        ));
    }

    #[test]
    fn builder_rejects_out_of_range_density() {
        for p in [-0.1, 1.1, f64::NAN] {
            assert!(matches!(
                LifeRule::builder().percent_alive(p).build(),
                Err(ConfigError::ParameterOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn layout_out_of_bounds_aborts_construction() {
        let rule = LifeRule::builder().layout([c(9, 9)]).build().unwrap();
        assert!(matches!(
            Automaton::new(3, 3, rule),
            Err(ConfigError::LayoutOutOfBounds { .. })
        ));
    }

    // ── Seeding ─────────────────────────────────────────────────

    #[test]
    fn density_zero_seeds_all_dead() {
        let rule = LifeRule::builder().percent_alive(0.0).build().unwrap();
        let sim = Automaton::new(8, 8, rule).unwrap();
        assert_eq!(sim.census()[&LifeState::Dead], 64);
    }

    #[test]
    fn density_one_seeds_all_alive() {
        let rule = LifeRule::builder().percent_alive(1.0).build().unwrap();
        let sim = Automaton::new(8, 8, rule).unwrap();
        assert_eq!(sim.census()[&LifeState::Alive], 64);
    }

    #[test]
    fn same_seed_same_seeding() {
        let make = |seed| {
            let rule = LifeRule::builder()
                .percent_alive(0.4)
                .seed(seed)
                .build()
                .unwrap();
            let sim = Automaton::new(16, 16, rule).unwrap();
            alive_coords(&sim)
        };
        assert_eq!(make(7), make(7));
        assert_ne!(make(7), make(8));
    }

    // ── Dynamics ────────────────────────────────────────────────

    #[test]
    fn block_is_a_fixed_point() {
        let block = [c(1, 1), c(1, 2), c(2, 1), c(2, 2)];
        let rule = LifeRule::builder().layout(block).build().unwrap();
        let mut sim = Automaton::new(4, 4, rule).unwrap();
        sim.step();
        assert_eq!(alive_coords(&sim), block.to_vec());
        sim.advance(10);
        assert_eq!(alive_coords(&sim), block.to_vec());
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = vec![c(2, 1), c(2, 2), c(2, 3)];
        let vertical = vec![c(1, 2), c(2, 2), c(3, 2)];
        let rule = LifeRule::builder().layout(horizontal.clone()).build().unwrap();
        let mut sim = Automaton::new(5, 5, rule).unwrap();

        sim.step();
        assert_eq!(alive_coords(&sim), vertical);
        sim.step();
        assert_eq!(alive_coords(&sim), horizontal);
    }

    #[test]
    fn underpopulation_and_overpopulation_kill() {
        // A lone pair dies; the center of a 3x3 full block dies of
        // overpopulation.
        let rule = LifeRule::builder().layout([c(0, 0), c(0, 1)]).build().unwrap();
        let mut sim = Automaton::new(3, 3, rule).unwrap();
        sim.step();
        assert!(alive_coords(&sim).is_empty());

        let full: Vec<Coord> = (0..3).flat_map(|r| (0..3).map(move |col| c(r, col))).collect();
        let rule = LifeRule::builder().layout(full).build().unwrap();
        let mut sim = Automaton::new(3, 3, rule).unwrap();
        sim.step();
        assert!(!alive_coords(&sim).contains(&c(1, 1)));
        // Corners keep 3 neighbors and survive.
        assert!(alive_coords(&sim).contains(&c(0, 0)));
    }

    // ── Labels ──────────────────────────────────────────────────

    #[test]
    fn labels_round_trip() {
        for state in [LifeState::Dead, LifeState::Alive] {
            assert_eq!(state.to_string().parse::<LifeState>().unwrap(), state);
        }
        assert!(matches!(
            "zombie".parse::<LifeState>(),
            Err(ConfigError::UnknownState { .. })
        ));
    }
}
