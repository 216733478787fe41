//! Defensive (area-denial) feature extraction.

use pursuit_core::{Direction, FeatureVector, GameState, Position};

use crate::agent::AgentContext;
use crate::config::PolicyConfig;
use crate::deadend::{DeadEndProber, Probe};
use crate::{intercept, keys, threat};

/// Score-ready features for taking `action` while defending.
///
/// With no visible invader the vector short-circuits to `num-invaders = 0`
/// and nothing else; every other feature only exists relative to an invader
/// or a live ghost threat.
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

    let invaders: Vec<Position> = ctx
        .opponents
        .iter()
        .filter_map(|op| {
            let pos = successor.position(*op)?;
            successor.info(*op).intruder.then_some(pos)
        })
        .collect();
    features.set(keys::NUM_INVADERS, invaders.len() as f64);
    if invaders.is_empty() {
        return features;
    }

    let Some((invader, my_dist)) = invaders
        .iter()
        .map(|p| (*p, successor.distance(my_pos, *p)))
        .min_by_key(|(_, d)| *d)
    else {
        return features;
    };
    features.set(keys::INVADER_DISTANCE, my_dist as f64);

    // Closer agent chases head-on, the farther one detours to block the
    // boundary crossing nearest the invader's row.
    let partner_dist = successor
        .position(ctx.partner)
        .map(|p| successor.distance(p, invader));
    let detour = if my_dist <= 1 {
        0.0
    } else if partner_dist.is_some_and(|d| d <= my_dist) {
        let column = intercept::center_column(ctx.side, successor.walls());
        match intercept::blocking_waypoint(successor.walls(), column, invader.y) {
            Some(goal) => -(successor.distance(goal, invader) as f64),
            None => 0.0,
        }
    } else {
        0.0
    };
    features.set(keys::DETOUR, detour);

    if action == Direction::Stop {
        features.set(keys::STOP, 1.0);
    }
    if action == state.info(ctx.id).facing.reverse() {
        features.set(keys::REVERSE, 1.0);
    }

    // A defender crossing the midline can itself be hunted. Same avoidance
    // as offense; note the weight table scores `dead-end` at zero here.
    let ghosts = threat::ghost_positions(state, &ctx.opponents);
    if let Some(d) = threat::nearest_distance(&successor, my_pos, &ghosts) {
        if d <= config.threat_radius {
            features.set(keys::AVOID_GHOST, 1.0 / (d as f64 + 1.0));
            let verdict = DeadEndProber::classify(ctx.id, &successor, config.probe_depth);
            features.set(
                keys::DEAD_END,
                if verdict == Probe::DeadEnd { 1.0 } else { 0.0 },
            );
        }
    }

    features
}
