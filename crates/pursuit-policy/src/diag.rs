//! Displacement diagnostics.
//!
//! Between two consecutive observed turns an agent can legally move at most
//! one maze step. A larger jump means it was captured and sent home (or the
//! host did something stranger), and the interesting evidence is the turn
//! that walked into it — so the previous turn's scored actions and the ghost
//! picture are kept for exactly one turn and dumped through `tracing`.
//! Logging only; the decision itself never reads this.

use pursuit_core::{AgentId, Position};

use crate::evaluate::ScoredAction;

/// What the policy remembers from its previous decision.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    /// Where the agent stood when it decided.
    pub position: Position,
    /// Every legal action it scored, in evaluation order.
    pub scored: Vec<ScoredAction>,
    /// Live ghost positions observed that turn.
    pub ghosts: Vec<Position>,
}

pub(crate) fn report_displacement(
    agent: AgentId,
    prev: &TurnRecord,
    now: Position,
    jump: u32,
) {
    tracing::warn!(
        agent = agent.0,
        from = ?prev.position,
        to = ?now,
        jump,
        "position jumped more than one step since last turn"
    );
    for s in &prev.scored {
        tracing::debug!(
            agent = agent.0,
            action = ?s.action,
            score = s.score,
            "scored action from the turn before the jump"
        );
    }
    tracing::debug!(
        agent = agent.0,
        ghosts = ?prev.ghosts,
        "ghost positions from the turn before the jump"
    );
}
