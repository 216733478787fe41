use pursuit_core::{Position, WallMap};

/// How two teammates split responsibility for the remaining pellets.
///
/// This is a coordination heuristic, not a game rule: the roster's lower
/// `AgentId` covers the near band, its partner the far band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodPartition {
    /// Split along the horizontal midline (lower ID takes rows `y <= h/2`).
    SplitRows,
    /// Split along the vertical midline (lower ID takes columns `x <= w/2`).
    SplitColumns,
    /// No split; both teammates chase the full list.
    Shared,
}

impl FoodPartition {
    /// The pellets this agent is responsible for. `near` is true for the
    /// roster's lower `AgentId`, which covers the low-coordinate band.
    pub fn assign(self, near: bool, walls: &WallMap, food: &[Position]) -> Vec<Position> {
        let keep = |p: &Position| match self {
            FoodPartition::Shared => true,
            FoodPartition::SplitRows => {
                let mid = walls.height() / 2;
                if near {
                    p.y <= mid
                } else {
                    p.y > mid
                }
            }
            FoodPartition::SplitColumns => {
                let mid = walls.width() / 2;
                if near {
                    p.x <= mid
                } else {
                    p.x > mid
                }
            }
        };
        food.iter().copied().filter(keep).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyConfig {
    /// Ghost proximity (maze steps) that triggers avoidance and the
    /// dead-end probe. The probe is expensive; it never runs outside this
    /// radius.
    pub threat_radius: u32,
    /// Dead-end probe horizon. Small on purpose: recall is traded for
    /// per-turn responsiveness.
    pub probe_depth: u32,
    /// Opponent carry count at which the whole team flips defensive.
    pub defend_carry_threshold: u32,
    /// Own carry count at which a nearby ghost triggers the retreat term.
    pub retreat_carry: u32,
    /// Ghost proximity that makes a loaded agent head home.
    pub retreat_ghost_radius: u32,
    /// Global remaining-pellet count at which everyone heads home.
    pub endgame_food_left: usize,
    pub partition: FoodPartition,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            threat_radius: 4,
            probe_depth: 3,
            defend_carry_threshold: 5,
            retreat_carry: 3,
            retreat_ghost_radius: 8,
            endgame_food_left: 2,
            partition: FoodPartition::SplitRows,
        }
    }
}
