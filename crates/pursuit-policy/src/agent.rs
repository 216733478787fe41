//! Per-agent bootstrap and the turn driver.

use pursuit_core::{
    derive_seed, AgentId, Direction, GameState, PolicyError, Position, Side, SplitMix64,
    WeightVector,
};

use crate::config::PolicyConfig;
use crate::diag::{self, TurnRecord};
use crate::role::{self, Role};
use crate::{evaluate, threat, weights};

/// RNG stream dedicated to tie-breaking, so future draws for other purposes
/// never shift the tie-break sequence.
const TIE_BREAK_STREAM: u64 = 1;

/// Fixed facts about one agent, captured once at match start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentContext {
    pub id: AgentId,
    pub partner: AgentId,
    pub opponents: [AgentId; 2],
    pub side: Side,
    /// Spawn cell; the retreat feature measures distance back to here.
    pub start: Position,
}

impl AgentContext {
    /// Bootstrap from the host's initial state. `None` when the agent is not
    /// observable there, which the host contract rules out.
    pub fn from_state<S: GameState>(id: AgentId, side: Side, state: &S) -> Option<Self> {
        let [a, b] = state.roster(side);
        let partner = if a == id { b } else { a };
        let start = state.position(id)?;
        Some(Self {
            id,
            partner,
            opponents: state.roster(side.opposite()),
            side,
            start,
        })
    }
}

/// One agent's complete decision state: context, config, weight tables, the
/// tie-break RNG stream, and the single-turn diagnostic record.
pub struct TurnPolicy {
    ctx: AgentContext,
    config: PolicyConfig,
    offensive: WeightVector,
    defensive: WeightVector,
    rng: SplitMix64,
    last_turn: Option<TurnRecord>,
}

impl TurnPolicy {
    pub fn new(ctx: AgentContext, config: PolicyConfig, match_seed: u64) -> Self {
        let seed = derive_seed(match_seed, ctx.id.stable_id(), TIE_BREAK_STREAM);
        Self {
            ctx,
            config,
            offensive: weights::offensive(),
            defensive: weights::defensive(),
            rng: SplitMix64::new(seed),
            last_turn: None,
        }
    }

    pub fn context(&self) -> &AgentContext {
        &self.ctx
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// The previous turn's record, until the next decision replaces it.
    pub fn last_turn(&self) -> Option<&TurnRecord> {
        self.last_turn.as_ref()
    }

    /// Decide this turn's action.
    ///
    /// Role selection happens once, before any feature is computed, so every
    /// action this turn is scored under the same role.
    pub fn choose_action<S: GameState>(&mut self, state: &S) -> Result<Direction, PolicyError> {
        let actions = state.legal_actions(self.ctx.id);
        if actions.is_empty() {
            return Err(PolicyError::ExhaustedOptions { agent: self.ctx.id });
        }

        let role = role::select_role(state, &self.ctx.opponents, self.config.defend_carry_threshold);
        let table = match role {
            Role::Offensive => &self.offensive,
            Role::Defensive => &self.defensive,
        };
        let scored =
            evaluate::score_actions(role, &self.ctx, &self.config, table, state, &actions);
        let choice = evaluate::select(&scored, &mut self.rng)
            .ok_or(PolicyError::ExhaustedOptions { agent: self.ctx.id })?;

        if let Some(now) = state.position(self.ctx.id) {
            if let Some(prev) = &self.last_turn {
                let jump = state.distance(prev.position, now);
                if jump > 1 {
                    diag::report_displacement(self.ctx.id, prev, now, jump);
                }
            }
            self.last_turn = Some(TurnRecord {
                position: now,
                scored,
                ghosts: threat::ghost_positions(state, &self.ctx.opponents),
            });
        }

        Ok(choice)
    }
}
