use pursuit_core::{AgentId, GameState};

/// Behavioral stance for one decision. Recomputed from live opponent state
/// every turn, never smoothed, so it may oscillate between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Offensive,
    Defensive,
}

/// Flip defensive as soon as any opponent is carrying `carry_threshold` or
/// more pellets. An empty opponent set (cannot happen under the game's
/// rules, but must not be undefined) stays offensive.
pub fn select_role<S: GameState>(
    state: &S,
    opponents: &[AgentId],
    carry_threshold: u32,
) -> Role {
    let max_carry = opponents
        .iter()
        .map(|op| state.info(*op).carrying)
        .max();
    match max_carry {
        Some(carry) if carry >= carry_threshold => Role::Defensive,
        _ => Role::Offensive,
    }
}
