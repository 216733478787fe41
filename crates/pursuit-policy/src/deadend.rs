//! Bounded-depth dead-end classification.
//!
//! From a hypothetical successor position, estimate whether every
//! continuation runs into a topological trap within a short horizon. The
//! probe is only triggered for positions already inside a threat radius, so
//! its branching cost stays bounded in practice.

use std::collections::{HashMap, HashSet};

use pursuit_core::{AgentId, GameState, Position};

/// Verdict for one position. `Free < DeadEnd`, so a parent's verdict is the
/// minimum over its children: a single escaping branch frees the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Probe {
    Free,
    DeadEnd,
}

impl Probe {
    /// Numeric form: `-1` free, `1` dead end.
    pub const fn score(self) -> i8 {
        match self {
            Probe::Free => -1,
            Probe::DeadEnd => 1,
        }
    }
}

/// Scratch state for one top-level probe.
///
/// The memo and visited set live exactly as long as one classification and
/// are threaded through the recursion by `&mut`. Reusing them across probes
/// would treat stale cells as already expanded and corrupt the verdict, so
/// there is intentionally no way to construct one except through
/// [`DeadEndProber::classify`].
pub struct DeadEndProber {
    memo: HashMap<Position, Probe>,
    visited: HashSet<Position>,
}

impl DeadEndProber {
    /// Classify the position of `agent` in `state`, looking at most `depth`
    /// moves ahead.
    ///
    /// A zero budget is conservatively a dead end: the caller asked for a
    /// verdict but allowed no lookahead to confirm an escape. Inside the
    /// recursion the bias flips: a branch still open when the horizon runs
    /// out counts as an escape, otherwise every bounded probe would trivially
    /// classify dead-end.
    pub fn classify<S: GameState>(agent: AgentId, state: &S, depth: u32) -> Probe {
        if depth == 0 {
            return Probe::DeadEnd;
        }
        let mut prober = Self {
            memo: HashMap::new(),
            visited: HashSet::new(),
        };
        if let Some(origin) = state.position(agent) {
            prober.visited.insert(origin);
        }
        prober.probe(agent, state, depth)
    }

    fn probe<S: GameState>(&mut self, agent: AgentId, state: &S, depth: u32) -> Probe {
        let Some(pos) = state.position(agent) else {
            // Unobservable self cannot happen mid-probe; degrade to free
            // rather than poison the verdict.
            return Probe::Free;
        };
        self.visited.insert(pos);

        // Revisits along different call paths within one probe.
        if let Some(verdict) = self.memo.get(&pos) {
            return *verdict;
        }

        if depth == 0 {
            return self.remember(pos, Probe::Free);
        }

        // `Stop` is always legal, so a corridor or corner offers at most two
        // legal actions. That is trapped enough; no need to search further.
        let actions = state.legal_actions(agent);
        if actions.len() <= 2 {
            return self.remember(pos, Probe::DeadEnd);
        }

        // Forward progress only: successors that land on an already-expanded
        // cell are dropped up front.
        let forward: Vec<S> = actions
            .iter()
            .map(|a| state.successor(agent, *a))
            .filter(|s| {
                s.position(agent)
                    .is_some_and(|p| !self.visited.contains(&p))
            })
            .collect();

        if forward.is_empty() {
            return self.remember(pos, Probe::DeadEnd);
        }

        let mut verdict = Probe::DeadEnd;
        for next in &forward {
            verdict = verdict.min(self.probe(agent, next, depth - 1));
        }
        self.remember(pos, verdict)
    }

    fn remember(&mut self, pos: Position, verdict: Probe) -> Probe {
        self.memo.insert(pos, verdict);
        verdict
    }
}
