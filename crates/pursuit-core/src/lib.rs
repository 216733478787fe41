//! Deterministic, engine-agnostic primitives for grid-pursuit agents.
//!
//! This crate defines the narrow seam between a decision policy and the host
//! game engine: grid geometry, the read-only [`GameState`] view, the feature
//! algebra policies score with, and seedable RNG helpers. It deliberately
//! implements no game rules of its own.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod error;
pub mod features;
pub mod grid;
pub mod rng;
pub mod world;

pub use agent::{AgentId, Side};
pub use error::PolicyError;
pub use features::{FeatureKey, FeatureVector, WeightVector};
pub use grid::{Direction, Position, WallMap};
pub use rng::{derive_seed, SplitMix64};
pub use world::{AgentInfo, GameState};
