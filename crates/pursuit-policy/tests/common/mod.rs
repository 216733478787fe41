//! Shared fixtures. Coordinates are (x, y) with the ASCII top line as the
//! highest row.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use pursuit_core::{AgentId, Position, Side, WallMap};
use pursuit_grid::GridState;

pub const OURS: AgentId = AgentId(0);
pub const PARTNER: AgentId = AgentId(2);
pub const OPP_A: AgentId = AgentId(1);
pub const OPP_B: AgentId = AgentId(3);

pub fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// A junction with three exits feeding a one-wide corridor of length five.
///
/// ```text
///   #########
///   #########
///   ##.######      exit (2,4)
///   ##......#      J=(2,3), C0=(3,3) .. C4=(7,3)
///   ##.######      exit (2,2)
///   #########
///   #########
/// ```
///
/// Midline at x=4: the junction side is the left half, the corridor's far
/// end the right. `OURS` stands at C3, its would-be killer at C1, the rest
/// of both rosters tucked away on the junction side.
pub fn corridor_world() -> GridState {
    let walls = WallMap::from_ascii(
        "#########\n\
         #########\n\
         ##.######\n\
         ##......#\n\
         ##.######\n\
         #########\n\
         #########",
    );
    let mut state = GridState::new(walls);
    state.add_agent(OURS, Side::Left, p(6, 3));
    state.add_agent(PARTNER, Side::Left, p(2, 2));
    state.add_agent(OPP_A, Side::Right, p(4, 3));
    state.add_agent(OPP_B, Side::Right, p(2, 4));
    // OPP_B sits out of observation range for these scenarios.
    state.hide_agent(OPP_B);
    state
}

/// A 12x7 bordered room with nothing inside. Midline at x=6. Tests add food,
/// carry counts, and positions per scenario.
pub fn open_world() -> GridState {
    let walls = WallMap::from_ascii(
        "############\n\
         #..........#\n\
         #..........#\n\
         #..........#\n\
         #..........#\n\
         #..........#\n\
         ############",
    );
    let mut state = GridState::new(walls);
    state.add_agent(OURS, Side::Left, p(2, 3));
    state.add_agent(PARTNER, Side::Left, p(1, 1));
    state.add_agent(OPP_A, Side::Right, p(10, 5));
    state.add_agent(OPP_B, Side::Right, p(10, 4));
    state
}
