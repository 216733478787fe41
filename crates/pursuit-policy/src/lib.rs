//! Feature-scored turn policy for grid-pursuit agents.
//!
//! Each turn the policy picks a role from the live threat level, scores every
//! legal action as a linear combination of hand-engineered features (some of
//! which run a bounded-depth dead-end probe over the reachable grid), and
//! returns the argmax with seeded uniform tie-breaking. The host engine is
//! consumed exclusively through [`pursuit_core::GameState`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod deadend;
pub mod defense;
pub mod diag;
pub mod evaluate;
pub mod intercept;
pub mod keys;
pub mod offense;
pub mod role;
mod threat;
pub mod weights;

pub use agent::{AgentContext, TurnPolicy};
pub use config::{FoodPartition, PolicyConfig};
pub use deadend::{DeadEndProber, Probe};
pub use diag::TurnRecord;
pub use evaluate::ScoredAction;
pub use role::Role;
