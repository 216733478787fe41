//! Offensive (foraging) feature extraction.

use pursuit_core::{Direction, FeatureVector, GameState};

use crate::agent::AgentContext;
use crate::config::PolicyConfig;
use crate::deadend::{DeadEndProber, Probe};
use crate::{keys, threat};

/// Score-ready features for taking `action` while foraging.
///
/// All threat positions are read from the pre-move `state`; threat distances
/// are measured from where the agent would land. Missing observations and
/// empty pellet lists degrade to omitted features, never to errors.
pub fn extract<S: GameState>(
    ctx: &AgentContext,
    config: &PolicyConfig,
    state: &S,
    action: Direction,
) -> FeatureVector {
    let successor = state.successor(ctx.id, action);
    let mut features = FeatureVector::new();

    let Some(my_pos) = successor.position(ctx.id) else {
        return features;
    };

    let food = successor.food_for(ctx.side);
    let my_share = config
        .partition
        .assign(ctx.id < ctx.partner, successor.walls(), &food);

    features.set(keys::SUCCESSOR_SCORE, -(my_share.len() as f64));
    features.set(keys::DEAD_END, 0.0);

    if let Some(dist) = threat::nearest_distance(&successor, my_pos, &my_share) {
        features.set(keys::DISTANCE_TO_FOOD, dist as f64);
    }

    let ghosts = threat::ghost_positions(state, &ctx.opponents);
    let ghost_dist = threat::nearest_distance(&successor, my_pos, &ghosts);

    match ghost_dist {
        Some(d) if d <= config.threat_radius => {
            features.set(keys::AVOID_GHOST, 1.0 / (d as f64 + 1.0));
            // Only probe under threat; the recursive search is too expensive
            // to run unconditionally.
            let verdict = DeadEndProber::classify(ctx.id, &successor, config.probe_depth);
            // Floored at zero: a free verdict is not a bonus.
            features.set(
                keys::DEAD_END,
                if verdict == Probe::DeadEnd { 1.0 } else { 0.0 },
            );
        }
        _ => features.set(keys::AVOID_GHOST, 0.0),
    }

    let carrying = state.info(ctx.id).carrying;
    let food_left = state.food_for(ctx.side).len();
    let ghost_near = ghost_dist.is_some_and(|d| d < config.retreat_ghost_radius);

    if (carrying >= config.retreat_carry && ghost_near) || food_left <= config.endgame_food_left {
        features.set(
            keys::GO_BACK,
            -(successor.distance(ctx.start, my_pos) as f64),
        );
    } else {
        features.set(keys::GO_BACK, 0.0);
    }

    features
}
