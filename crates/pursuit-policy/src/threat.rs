//! Shared opponent-threat queries.

use pursuit_core::{AgentId, GameState, Position};

/// Positions of opponents that are live ghost threats: on their own half,
/// not incapacitated, and currently observable. Unobservable opponents are
/// excluded rather than guessed at.
pub(crate) fn ghost_positions<S: GameState>(state: &S, opponents: &[AgentId]) -> Vec<Position> {
    opponents
        .iter()
        .filter_map(|op| {
            let info = state.info(*op);
            if info.intruder || info.incapacitated > 0 {
                return None;
            }
            state.position(*op)
        })
        .collect()
}

/// Maze distance to the nearest of `targets`, `None` when there are none.
pub(crate) fn nearest_distance<S: GameState>(
    state: &S,
    from: Position,
    targets: &[Position],
) -> Option<u32> {
    targets.iter().map(|t| state.distance(from, *t)).min()
}
