//! Reference grid world backend.
//!
//! The decision core only ever consumes a host engine through the
//! [`pursuit_core::GameState`] trait. This crate provides the reference
//! implementation of that seam — a BFS maze-distance oracle and a small
//! concrete world — so policies can be tested and benchmarked without the
//! host. It is deliberately not a rules engine: captures, scoring, and
//! timers beyond what the features read are out of scope.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod oracle;
pub mod state;

pub use oracle::MazeDistances;
pub use state::GridState;
