//! Integration tests driving the reference rules through the full
//! engine, not just individual transitions in isolation.

use petri_core::{Coord, Generation};
use petri_rule::Automaton;
use petri_rules::{FireRule, FireState, LifeRule, LifeState, SegState, SegregationRule};
use proptest::prelude::*;

#[test]
fn thousand_generation_life_run() {
    let rule = LifeRule::builder()
        .percent_alive(0.35)
        .seed(42)
        .build()
        .unwrap();
    let mut sim = Automaton::new(32, 32, rule).unwrap();

    sim.advance(1000);

    assert_eq!(sim.generation(), Generation(1000));
    assert_eq!(sim.rows(), 32);
    assert_eq!(sim.cols(), 32);
    let total: usize = sim.census().values().sum();
    assert_eq!(total, 1024);
}

#[test]
fn life_is_deterministic_for_a_fixed_seed() {
    let run = |seed: u64| {
        let rule = LifeRule::builder()
            .percent_alive(0.4)
            .seed(seed)
            .build()
            .unwrap();
        let mut sim = Automaton::new(24, 24, rule).unwrap();
        sim.advance(50);
        sim.cells().map(|cell| cell.state()).collect::<Vec<_>>()
    };
    assert_eq!(run(5), run(5));
    assert_ne!(run(5), run(6));
}

#[test]
fn glider_travels_diagonally() {
    // The standard glider displaces itself by (1, 1) every 4 steps.
    let glider = [
        Coord::new(1, 2),
        Coord::new(2, 3),
        Coord::new(3, 1),
        Coord::new(3, 2),
        Coord::new(3, 3),
    ];
    let rule = LifeRule::builder().layout(glider).build().unwrap();
    let mut sim = Automaton::new(12, 12, rule).unwrap();
    sim.advance(4);
    let alive: Vec<Coord> = sim
        .cells()
        .filter(|cell| cell.state() == LifeState::Alive)
        .map(|cell| cell.coord())
        .collect();
    let shifted: Vec<Coord> = glider
        .iter()
        .map(|c| Coord::new(c.row + 1, c.col + 1))
        .collect();
    assert_eq!(alive, shifted);
}

#[test]
fn fire_burns_out_completely_at_prob_one() {
    // With certain ignition the fire front sweeps the whole forest
    // and every tree eventually burns out.
    let rule = FireRule::builder().prob_catch(1.0).build().unwrap();
    let mut sim = Automaton::new(16, 16, rule).unwrap();
    sim.set_state(Coord::new(8, 8), FireState::Burning).unwrap();

    // Front advances at most one cell per step; 64 steps is plenty.
    sim.advance(64);

    let census = sim.census();
    assert_eq!(census.get(&FireState::Tree), None);
    assert_eq!(census.get(&FireState::Burning), None);
    assert_eq!(census[&FireState::Empty], 256);
}

#[test]
fn segregation_settles_toward_satisfaction() {
    let rule = SegregationRule::builder()
        .satisfied_threshold(0.3)
        .percent_full(0.7)
        .seed(4)
        .build()
        .unwrap();
    let mut sim = Automaton::new(20, 20, rule).unwrap();
    let before = sim.census();
    sim.advance(200);
    let after = sim.census();
    // Relocation shuffles occupants but never creates or destroys them.
    assert_eq!(
        before.get(&SegState::GroupA),
        after.get(&SegState::GroupA)
    );
    assert_eq!(
        before.get(&SegState::GroupB),
        after.get(&SegState::GroupB)
    );
}

proptest! {
    // Spec property: a lone burning interior cell with no tree
    // neighbors becomes empty after exactly one step, whatever the
    // ignition probability.
    #[test]
    fn lone_burning_cell_always_burns_out(p in 0.0f64..=1.0, seed in 0u64..256) {
        let rule = FireRule::builder().prob_catch(p).seed(seed).build().unwrap();
        let mut sim = Automaton::new(5, 5, rule).unwrap();
        for coord in [Coord::new(1, 2), Coord::new(3, 2), Coord::new(2, 1), Coord::new(2, 3)] {
            sim.set_state(coord, FireState::Empty).unwrap();
        }
        sim.set_state(Coord::new(2, 2), FireState::Burning).unwrap();
        sim.step();
        prop_assert_eq!(sim.grid().state(Coord::new(2, 2)).unwrap(), FireState::Empty);
    }

    // Spec property: census counts always sum to rows x cols, for any
    // seeding of any rule.
    #[test]
    fn census_total_matches_grid_size(
        rows in 1u32..24,
        cols in 1u32..24,
        percent in 0.0f64..=1.0,
        seed in 0u64..256,
    ) {
        let life = LifeRule::builder().percent_alive(percent).seed(seed).build().unwrap();
        let sim = Automaton::new(rows, cols, life).unwrap();
        let total: usize = sim.census().values().sum();
        prop_assert_eq!(total, (rows as usize) * (cols as usize));

        let seg = SegregationRule::builder()
            .satisfied_threshold(0.5)
            .percent_full(percent)
            .seed(seed)
            .build()
            .unwrap();
        let sim = Automaton::new(rows, cols, seg).unwrap();
        let total: usize = sim.census().values().sum();
        prop_assert_eq!(total, (rows as usize) * (cols as usize));
    }
}
