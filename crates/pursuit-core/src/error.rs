use crate::AgentId;
use thiserror::Error;

/// Failures a decision turn can surface to the caller.
///
/// Partial observations and empty aggregates are *not* errors: extractors
/// degrade those to omitted features locally so a turn always yields an
/// action when any legal action exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The host reported no legal actions. The engine guarantees this never
    /// happens in play, so callers should treat it as unrecoverable.
    #[error("no legal actions for agent {agent:?}")]
    ExhaustedOptions { agent: AgentId },
}
