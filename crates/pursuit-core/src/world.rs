use crate::{AgentId, Direction, Position, Side, WallMap};

/// What the host engine reports about one agent in one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentInfo {
    /// Standing on the opposing half (eligible to collect pellets there,
    /// and an invader from the opponents' point of view).
    pub intruder: bool,
    /// Pellets picked up and not yet delivered home.
    pub carrying: u32,
    /// Turns of incapacitation left; `0` means the agent is a live threat.
    pub incapacitated: u32,
    pub facing: Direction,
}

/// Read-only view of the host engine's game state.
///
/// This crate consumes the engine, it never reimplements it: rules
/// enforcement, legal-move generation, successor generation, and the
/// maze-distance oracle all live behind this trait. Every method is a pure
/// query of one immutable state value.
pub trait GameState {
    fn walls(&self) -> &WallMap;

    /// Legal actions for `agent` in this state. Guaranteed non-empty in
    /// normal play (`Stop` is always legal).
    fn legal_actions(&self, agent: AgentId) -> Vec<Direction>;

    /// The state after `agent` takes `action`. Deterministic for a legal
    /// action. Hosts whose engines move in half grid steps must advance the
    /// extra half so the agent lands on a full cell.
    fn successor(&self, agent: AgentId, action: Direction) -> Self
    where
        Self: Sized;

    /// Maze (shortest-path) distance between two cells, from the host's
    /// precomputed oracle: exact and symmetric, `u32::MAX` when unreachable.
    fn distance(&self, a: Position, b: Position) -> u32;

    /// Where `agent` is, or `None` when it is not currently observable.
    fn position(&self, agent: AgentId) -> Option<Position>;

    fn info(&self, agent: AgentId) -> AgentInfo;

    /// Pellets team `side` may still collect.
    fn food_for(&self, side: Side) -> Vec<Position>;

    /// The two cooperating agents on `side`, in stable ascending order.
    fn roster(&self, side: Side) -> [AgentId; 2];
}
