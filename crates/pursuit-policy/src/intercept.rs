//! Interception waypoints on the home/away boundary.
//!
//! Instead of joining a chase the teammate already leads, a defender can cut
//! off the invader's retreat: pick the open boundary cell nearest the
//! invader's row and race there.

use pursuit_core::{Position, Side, WallMap};

/// The boundary column one step inside `side`'s home half.
pub fn center_column(side: Side, walls: &WallMap) -> i32 {
    match side {
        Side::Left => walls.width() / 2 - 1,
        Side::Right => walls.width() / 2 + 1,
    }
}

/// The open cell in `column` whose row is closest to `target_row`.
///
/// Ties resolve to the lower row. `None` when the column is fully walled;
/// callers degrade the detour term to zero in that case.
pub fn blocking_waypoint(walls: &WallMap, column: i32, target_row: i32) -> Option<Position> {
    walls
        .open_in_column(column)
        .into_iter()
        .min_by_key(|p| ((p.y - target_row).abs(), p.y))
}
