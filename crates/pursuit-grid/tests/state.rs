use pursuit_core::{AgentId, Direction, GameState, Position, Side, WallMap};
use pursuit_grid::GridState;

const LEFT_A: AgentId = AgentId(0);
const RIGHT_A: AgentId = AgentId(1);
const LEFT_B: AgentId = AgentId(2);
const RIGHT_B: AgentId = AgentId(3);

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// 8x5 open room, border walls. Midline at x=4.
fn room() -> GridState {
    let walls = WallMap::from_ascii(
        "########\n\
         #......#\n\
         #......#\n\
         #......#\n\
         ########",
    );
    let mut state = GridState::new(walls);
    state.add_agent(LEFT_A, Side::Left, p(1, 1));
    state.add_agent(LEFT_B, Side::Left, p(1, 3));
    state.add_agent(RIGHT_A, Side::Right, p(6, 1));
    state.add_agent(RIGHT_B, Side::Right, p(6, 3));
    state
}

#[test]
fn legal_actions_are_stop_plus_open_neighbors() {
    let state = room();
    // Corner-adjacent cell (1,1): walls to the south and west.
    let actions = state.legal_actions(LEFT_A);
    assert_eq!(
        actions,
        vec![Direction::Stop, Direction::North, Direction::East]
    );
}

#[test]
fn successor_moves_one_cell_and_turns() {
    let state = room();
    let next = state.successor(LEFT_A, Direction::East);
    assert_eq!(next.position(LEFT_A), Some(p(2, 1)));
    assert_eq!(next.info(LEFT_A).facing, Direction::East);
    // The source state is a value; it never mutates.
    assert_eq!(state.position(LEFT_A), Some(p(1, 1)));
}

#[test]
fn stop_keeps_position_and_facing() {
    let mut state = room();
    state.set_facing(LEFT_A, Direction::North);
    let next = state.successor(LEFT_A, Direction::Stop);
    assert_eq!(next.position(LEFT_A), Some(p(1, 1)));
    assert_eq!(next.info(LEFT_A).facing, Direction::North);
}

#[test]
fn food_is_eaten_only_on_the_opposing_half() {
    let mut state = room();
    state.add_food(p(2, 1));
    state.add_food(p(6, 2));

    // Left team eats on the right half and vice versa.
    assert_eq!(state.food_for(Side::Left), vec![p(6, 2)]);
    assert_eq!(state.food_for(Side::Right), vec![p(2, 1)]);

    // A left agent stepping onto left-half food leaves it alone.
    let next = state.successor(LEFT_A, Direction::East);
    assert_eq!(next.food_for(Side::Right), vec![p(2, 1)]);
    assert_eq!(next.info(LEFT_A).carrying, 0);
}

#[test]
fn crossing_agent_picks_up_food() {
    let mut state = room();
    state.add_food(p(5, 1));
    // Walk LEFT_A across the midline to the pellet.
    let mut s = state;
    for _ in 0..4 {
        s = s.successor(LEFT_A, Direction::East);
    }
    assert_eq!(s.position(LEFT_A), Some(p(5, 1)));
    assert_eq!(s.info(LEFT_A).carrying, 1);
    assert!(s.food_for(Side::Left).is_empty());
}

#[test]
fn intruder_flag_tracks_the_midline() {
    let state = room();
    assert!(!state.info(LEFT_A).intruder);
    let mut s = state;
    for _ in 0..3 {
        s = s.successor(LEFT_A, Direction::East);
    }
    assert_eq!(s.position(LEFT_A), Some(p(4, 1)));
    assert!(s.info(LEFT_A).intruder);
}

#[test]
fn hidden_agents_have_no_position() {
    let mut state = room();
    state.hide_agent(RIGHT_A);
    assert_eq!(state.position(RIGHT_A), None);
    assert_eq!(state.legal_actions(RIGHT_A), vec![Direction::Stop]);
}

#[test]
fn roster_is_stable_ascending() {
    let state = room();
    assert_eq!(state.roster(Side::Left), [LEFT_A, LEFT_B]);
    assert_eq!(state.roster(Side::Right), [RIGHT_A, RIGHT_B]);
}

#[test]
fn distance_uses_the_precomputed_oracle() {
    let state = room();
    assert_eq!(state.distance(p(1, 1), p(6, 3)), 7);
    assert_eq!(state.distance(p(1, 1), p(0, 0)), u32::MAX);
}
