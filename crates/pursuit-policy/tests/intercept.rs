use pursuit_core::{Position, Side, WallMap};
use pursuit_policy::intercept::{blocking_waypoint, center_column};

#[test]
fn center_column_sits_one_inside_each_half() {
    let walls = WallMap::new(12, 7);
    assert_eq!(center_column(Side::Left, &walls), 5);
    assert_eq!(center_column(Side::Right, &walls), 7);
}

#[test]
fn waypoint_picks_the_row_nearest_the_invader() {
    let walls = WallMap::from_ascii(
        "#####\n\
         ##.##\n\
         ##.##\n\
         ##.##\n\
         #####",
    );
    assert_eq!(blocking_waypoint(&walls, 2, 3), Some(Position::new(2, 3)));
    assert_eq!(blocking_waypoint(&walls, 2, 0), Some(Position::new(2, 1)));
    assert_eq!(blocking_waypoint(&walls, 2, 9), Some(Position::new(2, 3)));
}

#[test]
fn equidistant_rows_resolve_to_the_lower_one() {
    let walls = WallMap::from_ascii(
        "#####\n\
         ##.##\n\
         #####\n\
         ##.##\n\
         #####",
    );
    // Rows 1 and 3 are both one step from row 2.
    assert_eq!(blocking_waypoint(&walls, 2, 2), Some(Position::new(2, 1)));
}

#[test]
fn fully_walled_column_has_no_waypoint() {
    let walls = WallMap::from_ascii(
        "#####\n\
         ##.##\n\
         ##.##\n\
         #####",
    );
    assert_eq!(blocking_waypoint(&walls, 0, 1), None);
    assert_eq!(blocking_waypoint(&walls, 4, 2), None);
}
