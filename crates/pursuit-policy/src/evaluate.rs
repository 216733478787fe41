//! Per-turn action evaluation: features · weights, argmax, seeded tie-break.

use pursuit_core::{Direction, GameState, SplitMix64, WeightVector};

use crate::agent::AgentContext;
use crate::config::PolicyConfig;
use crate::role::Role;
use crate::{defense, offense};

/// One action with its evaluated score, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredAction {
    pub action: Direction,
    pub score: f64,
}

/// Score every candidate action under `role`.
///
/// Evaluation is pure: each action gets a fresh feature vector and nothing
/// outside the per-action scratch is mutated.
pub fn score_actions<S: GameState>(
    role: Role,
    ctx: &AgentContext,
    config: &PolicyConfig,
    weights: &WeightVector,
    state: &S,
    actions: &[Direction],
) -> Vec<ScoredAction> {
    actions
        .iter()
        .map(|action| {
            let features = match role {
                Role::Offensive => offense::extract(ctx, config, state, *action),
                Role::Defensive => defense::extract(ctx, config, state, *action),
            };
            let score = features.dot(weights);
            ScoredAction {
                action: *action,
                // A NaN score would poison the argmax; treat it as worst.
                score: if score.is_nan() { f64::NEG_INFINITY } else { score },
            }
        })
        .collect()
}

/// Pick a maximizer, breaking ties uniformly with the caller's RNG stream so
/// equal-scoring actions carry no positional bias. `None` only for empty
/// input.
pub fn select(scored: &[ScoredAction], rng: &mut SplitMix64) -> Option<Direction> {
    let best = scored
        .iter()
        .map(|s| s.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let ties: Vec<Direction> = scored
        .iter()
        .filter(|s| s.score == best)
        .map(|s| s.action)
        .collect();
    if ties.is_empty() {
        return None;
    }
    let pick = rng.next_below(ties.len() as u64) as usize;
    Some(ties[pick])
}
