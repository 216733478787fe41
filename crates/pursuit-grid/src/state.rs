use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use pursuit_core::{AgentId, AgentInfo, Direction, GameState, Position, Side, WallMap};

use crate::MazeDistances;

#[derive(Debug, Clone)]
struct AgentSlot {
    side: Side,
    /// `None` models an agent outside observation range.
    pos: Option<Position>,
    carrying: u32,
    incapacitated: u32,
    facing: Direction,
}

/// Concrete [`GameState`] over a wall map.
///
/// Successors move one full cell, update facing, and pick up opposing-half
/// pellets under the new cell. The immutable parts (walls, distance table)
/// are shared between a state and its successors, so generating successors
/// in a lookahead stays cheap.
#[derive(Debug, Clone)]
pub struct GridState {
    walls: Arc<WallMap>,
    distances: Arc<MazeDistances>,
    food: BTreeSet<Position>,
    agents: BTreeMap<AgentId, AgentSlot>,
}

impl GridState {
    pub fn new(walls: WallMap) -> Self {
        let distances = MazeDistances::new(&walls);
        Self {
            walls: Arc::new(walls),
            distances: Arc::new(distances),
            food: BTreeSet::new(),
            agents: BTreeMap::new(),
        }
    }

    pub fn add_agent(&mut self, id: AgentId, side: Side, pos: Position) {
        assert!(
            !self.walls.is_wall(pos.x, pos.y),
            "agent placed inside a wall"
        );
        self.agents.insert(
            id,
            AgentSlot {
                side,
                pos: Some(pos),
                carrying: 0,
                incapacitated: 0,
                facing: Direction::Stop,
            },
        );
    }

    pub fn add_food(&mut self, pos: Position) {
        assert!(!self.walls.is_wall(pos.x, pos.y), "food placed inside a wall");
        self.food.insert(pos);
    }

    pub fn set_carrying(&mut self, id: AgentId, pellets: u32) {
        self.slot_mut(id).carrying = pellets;
    }

    pub fn set_incapacitated(&mut self, id: AgentId, turns: u32) {
        self.slot_mut(id).incapacitated = turns;
    }

    pub fn set_facing(&mut self, id: AgentId, facing: Direction) {
        self.slot_mut(id).facing = facing;
    }

    /// Take the agent out of observation range: `position()` reports `None`.
    pub fn hide_agent(&mut self, id: AgentId) {
        self.slot_mut(id).pos = None;
    }

    pub fn side_of(&self, id: AgentId) -> Side {
        self.slot(id).side
    }

    fn slot(&self, id: AgentId) -> &AgentSlot {
        self.agents.get(&id).expect("unknown agent id")
    }

    fn slot_mut(&mut self, id: AgentId) -> &mut AgentSlot {
        self.agents.get_mut(&id).expect("unknown agent id")
    }

    fn on_opposing_half(&self, side: Side, pos: Position) -> bool {
        side.opposite().owns_column(pos.x, self.walls.width())
    }
}

impl GameState for GridState {
    fn walls(&self) -> &WallMap {
        &self.walls
    }

    fn legal_actions(&self, agent: AgentId) -> Vec<Direction> {
        let Some(pos) = self.slot(agent).pos else {
            return vec![Direction::Stop];
        };
        let mut actions = vec![Direction::Stop];
        for dir in Direction::CARDINAL {
            let n = pos.step(dir);
            if !self.walls.is_wall(n.x, n.y) {
                actions.push(dir);
            }
        }
        actions
    }

    fn successor(&self, agent: AgentId, action: Direction) -> Self {
        let mut next = self.clone();
        let Some(pos) = next.slot(agent).pos else {
            return next;
        };

        let landed = pos.step(action);
        debug_assert!(
            !next.walls.is_wall(landed.x, landed.y),
            "illegal action passed to successor"
        );
        let slot = next.slot_mut(agent);
        slot.pos = Some(landed);
        if action != Direction::Stop {
            slot.facing = action;
        }

        let side = slot.side;
        if next.on_opposing_half(side, landed) && next.food.remove(&landed) {
            next.slot_mut(agent).carrying += 1;
        }
        next
    }

    fn distance(&self, a: Position, b: Position) -> u32 {
        self.distances.distance(a, b)
    }

    fn position(&self, agent: AgentId) -> Option<Position> {
        self.slot(agent).pos
    }

    fn info(&self, agent: AgentId) -> AgentInfo {
        let slot = self.slot(agent);
        let intruder = slot
            .pos
            .is_some_and(|p| self.on_opposing_half(slot.side, p));
        AgentInfo {
            intruder,
            carrying: slot.carrying,
            incapacitated: slot.incapacitated,
            facing: slot.facing,
        }
    }

    fn food_for(&self, side: Side) -> Vec<Position> {
        // A team eats the pellets sitting on the opposing half.
        self.food
            .iter()
            .copied()
            .filter(|p| self.on_opposing_half(side, *p))
            .collect()
    }

    fn roster(&self, side: Side) -> [AgentId; 2] {
        let ids: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|(_, s)| s.side == side)
            .map(|(id, _)| *id)
            .collect();
        ids.as_slice()
            .try_into()
            .expect("each side fields exactly two agents")
    }
}
