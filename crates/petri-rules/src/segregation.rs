//! Schelling segregation.
//!
//! Relocation-based three-state rule over the Moore neighborhood. An
//! occupied cell is satisfied when at least `satisfied_threshold × 8`
//! of its neighbors share its group (the scale factor is always 8,
//! also for boundary cells with fewer neighbors). Unsatisfied agents
//! relocate at the end of the generation: a vacancy list is built from
//! the staged grid and each mover, in sweep order, draws a uniformly
//! random vacancy, moves there, and vacates its origin — which then
//! becomes available to movers behind it. With no vacancy left, the
//! remaining movers stay put, so a step terminates at any occupancy.
//!
//! Seeding performs two independent Bernoulli draws per cell at
//! `percent_full / 2` each, first for group A, then for group B; when
//! both succeed the second draw overwrites the first.

use petri_core::{ConfigError, Coord};
use petri_grid::{Grid, Neighborhood};
use petri_rule::{Outcome, Rule};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::str::FromStr;

/// The Segregation alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SegState {
    /// An unoccupied cell, available as a relocation target.
    #[default]
    Empty,
    /// An agent of the first group.
    GroupA,
    /// An agent of the second group.
    GroupB,
}

impl fmt::Display for SegState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::GroupA => write!(f, "A"),
            Self::GroupB => write!(f, "B"),
        }
    }
}

impl FromStr for SegState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Self::Empty),
            "A" => Ok(Self::GroupA),
            "B" => Ok(Self::GroupB),
            other => Err(ConfigError::UnknownState {
                label: other.to_string(),
            }),
        }
    }
}

/// The Schelling segregation rule.
///
/// Constructed via [`SegregationRule::builder`].
#[derive(Debug)]
pub struct SegregationRule {
    /// Same-group neighbor count an agent needs to stay put.
    required_same: f64,
    percent_full: f64,
    rng: ChaCha8Rng,
}

/// Builder for [`SegregationRule`].
///
/// Required parameters:
/// [`satisfied_threshold`](SegregationRuleBuilder::satisfied_threshold)
/// and [`percent_full`](SegregationRuleBuilder::percent_full).
pub struct SegregationRuleBuilder {
    satisfied_threshold: Option<f64>,
    percent_full: Option<f64>,
    seed: u64,
}

impl SegregationRule {
    /// Create a new builder for configuring a `SegregationRule`.
    pub fn builder() -> SegregationRuleBuilder {
        SegregationRuleBuilder {
            satisfied_threshold: None,
            percent_full: None,
            seed: 0,
        }
    }
}

impl SegregationRuleBuilder {
    /// Fraction in `[0, 1]` of the full Moore neighborhood that must
    /// share an agent's group for it to be satisfied.
    pub fn satisfied_threshold(mut self, t: f64) -> Self {
        self.satisfied_threshold = Some(t);
        self
    }

    /// Probability mass in `[0, 1]` used to seed occupants, split
    /// evenly between the two groups.
    pub fn percent_full(mut self, p: f64) -> Self {
        self.percent_full = Some(p);
        self
    }

    /// Seed for the rule's random source (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the rule, validating all configuration.
    ///
    /// # Errors
    ///
    /// - `MissingParameter` if either parameter is not set
    /// - `ParameterOutOfRange` if either is not in `[0, 1]`
    pub fn build(self) -> Result<SegregationRule, ConfigError> {
        let threshold = self
            .satisfied_threshold
            .ok_or(ConfigError::MissingParameter {
                name: "satisfied_threshold",
            })?;
        let percent_full = self.percent_full.ok_or(ConfigError::MissingParameter {
            name: "percent_full",
        })?;
        for (name, value) in [
            ("satisfied_threshold", threshold),
            ("percent_full", percent_full),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ParameterOutOfRange { name, value });
            }
        }
        Ok(SegregationRule {
            required_same: threshold * Neighborhood::Moore.max_degree() as f64,
            percent_full,
            rng: ChaCha8Rng::seed_from_u64(self.seed),
        })
    }
}

impl Rule for SegregationRule {
    type State = SegState;

    fn name(&self) -> &str {
        "segregation"
    }

    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::Moore
    }

    fn default_state(&self) -> SegState {
        SegState::Empty
    }

    fn seed(&mut self, grid: &mut Grid<SegState>) -> Result<(), ConfigError> {
        let half = self.percent_full / 2.0;
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                if self.rng.random_bool(half) {
                    grid[Coord::new(r, c)] = SegState::GroupA;
                }
                if self.rng.random_bool(half) {
                    grid[Coord::new(r, c)] = SegState::GroupB;
                }
            }
        }
        Ok(())
    }

    fn transition(&mut self, state: SegState, neighbors: &[SegState]) -> Outcome<SegState> {
        if state == SegState::Empty {
            return Outcome::Unchanged;
        }
        let same = neighbors.iter().filter(|&&n| n == state).count();
        if same as f64 >= self.required_same {
            Outcome::Unchanged
        } else {
            Outcome::Relocate
        }
    }

    fn settle(&mut self, staged: &mut Grid<SegState>, movers: &[Coord]) {
        let mut vacancies: Vec<Coord> = staged
            .cells()
            .filter(|cell| cell.state() == SegState::Empty)
            .map(|cell| cell.coord())
            .collect();
        for &from in movers {
            // Saturated grid: nowhere to go, the rest stay put.
            if vacancies.is_empty() {
                break;
            }
            let pick = self.rng.random_range(0..vacancies.len());
            let to = vacancies.swap_remove(pick);
            let occupant = staged[from];
            staged[to] = occupant;
            staged[from] = SegState::Empty;
            vacancies.push(from);
        }
    }
}
