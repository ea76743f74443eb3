//! Forest-fire spread.
//!
//! Probabilistic three-state rule over the von Neumann neighborhood.
//! The outer ring of the grid is a permanently empty firebreak; the
//! interior seeds as solid forest. A burning cell burns out fully in
//! one generation; a tree with at least one burning cardinal neighbor
//! in the pre-step snapshot catches fire with probability
//! `prob_catch`, drawn independently per eligible cell per generation.
//!
//! Neighbor burning status is read from the previous generation only —
//! fire ignited this step cannot spread further until the next step.

use petri_core::{ConfigError, Coord};
use petri_grid::{Grid, Neighborhood};
use petri_rule::{Outcome, Rule};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::str::FromStr;

/// The Fire alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FireState {
    /// Bare ground: burnt out, or part of the firebreak border.
    #[default]
    Empty,
    /// A flammable tree.
    Tree,
    /// A tree currently on fire.
    Burning,
}

impl fmt::Display for FireState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Tree => write!(f, "tree"),
            Self::Burning => write!(f, "burning"),
        }
    }
}

impl FromStr for FireState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Self::Empty),
            "tree" => Ok(Self::Tree),
            "burning" => Ok(Self::Burning),
            other => Err(ConfigError::UnknownState {
                label: other.to_string(),
            }),
        }
    }
}

/// The forest-fire rule.
///
/// Constructed via [`FireRule::builder`].
#[derive(Debug)]
pub struct FireRule {
    prob_catch: f64,
    rng: ChaCha8Rng,
}

/// Builder for [`FireRule`].
///
/// Required parameter: [`prob_catch`](FireRuleBuilder::prob_catch).
pub struct FireRuleBuilder {
    prob_catch: Option<f64>,
    seed: u64,
}

impl FireRule {
    /// Create a new builder for configuring a `FireRule`.
    pub fn builder() -> FireRuleBuilder {
        FireRuleBuilder {
            prob_catch: None,
            seed: 0,
        }
    }

    /// The configured ignition probability.
    pub fn prob_catch(&self) -> f64 {
        self.prob_catch
    }
}

impl FireRuleBuilder {
    /// Probability in `[0, 1]` that a tree with a burning neighbor
    /// ignites this generation.
    pub fn prob_catch(mut self, p: f64) -> Self {
        self.prob_catch = Some(p);
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
    /// - `MissingParameter` if `prob_catch` is not set
    /// - `ParameterOutOfRange` if `prob_catch` is not in `[0, 1]`
    pub fn build(self) -> Result<FireRule, ConfigError> {
        let p = self.prob_catch.ok_or(ConfigError::MissingParameter {
            name: "prob_catch",
        })?;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ParameterOutOfRange {
                name: "prob_catch",
                value: p,
            });
        }
        Ok(FireRule {
            prob_catch: p,
            rng: ChaCha8Rng::seed_from_u64(self.seed),
        })
    }
}

impl Rule for FireRule {
    type State = FireState;

    fn name(&self) -> &str {
        "fire"
    }

    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::VonNeumann
    }

    fn default_state(&self) -> FireState {
        FireState::Empty
    }

    /// Interior forest surrounded by the firebreak ring.
    ///
    /// Grids narrower than 3 cells on either axis have no interior
    /// and stay entirely empty.
    fn seed(&mut self, grid: &mut Grid<FireState>) -> Result<(), ConfigError> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows > 2 && cols > 2 {
            for r in 1..rows - 1 {
                for c in 1..cols - 1 {
                    grid[Coord::new(r, c)] = FireState::Tree;
                }
            }
        }
        Ok(())
    }

    fn transition(&mut self, state: FireState, neighbors: &[FireState]) -> Outcome<FireState> {
        match state {
            // Burns out fully in one generation, no smolder state.
            FireState::Burning => Outcome::Become(FireState::Empty),
            FireState::Tree if neighbors.contains(&FireState::Burning) => {
                if self.rng.random_bool(self.prob_catch) {
                    Outcome::Become(FireState::Burning)
                } else {
                    Outcome::Unchanged
                }
            }
            // Empty never transitions, which keeps the firebreak
            // invariant without special-casing border coordinates.
            _ => Outcome::Unchanged,
        }
    }
}
