mod common;

use common::{corridor_world, p, OURS};
use pursuit_policy::{DeadEndProber, Probe};

#[test]
fn zero_budget_is_always_dead_end() {
    let mut state = corridor_world();
    let side = state.side_of(OURS);
    // Even at the junction itself, with its three exits.
    state.add_agent(OURS, side, p(2, 3));
    assert_eq!(DeadEndProber::classify(OURS, &state, 0), Probe::DeadEnd);
    assert_eq!(DeadEndProber::classify(OURS, &state, 0).score(), 1);
}

#[test]
fn closed_corridor_end_is_dead() {
    let mut state = corridor_world();
    let side = state.side_of(OURS);
    // C4, the closed end: only Stop and one retreat move are legal.
    state.add_agent(OURS, side, p(7, 3));
    assert_eq!(DeadEndProber::classify(OURS, &state, 3), Probe::DeadEnd);
}

#[test]
fn junction_within_budget_frees_the_corridor_mouth() {
    let mut state = corridor_world();
    let side = state.side_of(OURS);
    // C1, one step from C0 and two from the three-exit junction.
    state.add_agent(OURS, side, p(4, 3));
    let verdict = DeadEndProber::classify(OURS, &state, 3);
    assert_eq!(verdict, Probe::Free);
    assert_eq!(verdict.score(), -1);
}

#[test]
fn deep_corridor_cell_escapes_toward_the_junction() {
    let mut state = corridor_world();
    let side = state.side_of(OURS);
    // C3: the branch into C4 dead-ends, the branch toward the junction
    // stays open within the horizon, and one escape is enough.
    state.add_agent(OURS, side, p(6, 3));
    assert_eq!(DeadEndProber::classify(OURS, &state, 3), Probe::Free);
}

#[test]
fn short_budget_cannot_see_past_the_corridor() {
    let mut state = corridor_world();
    let side = state.side_of(OURS);
    // From C3 with budget 1: C4 is narrow, C2 is still open.
    state.add_agent(OURS, side, p(6, 3));
    assert_eq!(DeadEndProber::classify(OURS, &state, 1), Probe::Free);

    // From C4 any budget agrees: the cell itself is the trap.
    state.add_agent(OURS, side, p(7, 3));
    assert_eq!(DeadEndProber::classify(OURS, &state, 1), Probe::DeadEnd);
}

#[test]
fn probe_scratch_never_leaks_between_calls() {
    let mut state = corridor_world();
    let side = state.side_of(OURS);
    state.add_agent(OURS, side, p(4, 3));
    let first = DeadEndProber::classify(OURS, &state, 3);
    // A second probe of the identical state must see fresh memo/visited
    // scratch and reproduce the verdict exactly.
    let second = DeadEndProber::classify(OURS, &state, 3);
    assert_eq!(first, second);
}

#[test]
fn free_orders_below_dead_end() {
    // The parent verdict is the minimum over children: one escaping branch
    // wins.
    assert!(Probe::Free < Probe::DeadEnd);
    assert_eq!(Probe::Free.min(Probe::DeadEnd), Probe::Free);
}
