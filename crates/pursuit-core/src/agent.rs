#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier for an agent.
///
/// Deterministic play requires stable ordering: the roster's lower ID drives
/// the food-partition tie-break and each agent seeds its own RNG stream from
/// `stable_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentId(pub u8);

impl AgentId {
    pub fn stable_id(self) -> u64 {
        self.0 as u64
    }
}

/// Which half of the grid a team calls home.
///
/// `Left` owns columns `x < width / 2`; `Right` owns the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Whether column `x` lies on this side of a grid `width` columns wide.
    pub const fn owns_column(self, x: i32, width: i32) -> bool {
        match self {
            Side::Left => x < width / 2,
            Side::Right => x >= width / 2,
        }
    }
}
