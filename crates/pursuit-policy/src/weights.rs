//! Fixed policy weights.
//!
//! Hand-tuned constants, identical for both teammates. Note the defensive
//! table carries no `dead-end` entry: the defensive extractor still computes
//! the feature under threat, but it scores zero until a weight is added.

use pursuit_core::WeightVector;

use crate::keys;

pub fn offensive() -> WeightVector {
    WeightVector::from([
        (keys::SUCCESSOR_SCORE, 10.0),
        (keys::DISTANCE_TO_FOOD, -1.0),
        (keys::AVOID_GHOST, -180.0),
        (keys::GO_BACK, 2.0),
        (keys::DEAD_END, -250.0),
    ])
}

pub fn defensive() -> WeightVector {
    WeightVector::from([
        (keys::NUM_INVADERS, -1000.0),
        (keys::INVADER_DISTANCE, -10.0),
        (keys::STOP, -100.0),
        (keys::REVERSE, -2.0),
        (keys::DETOUR, 100.0),
        (keys::AVOID_GHOST, -100.0),
    ])
}
