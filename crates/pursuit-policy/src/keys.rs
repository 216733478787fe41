//! Feature names shared by the extractors and the weight tables.

use pursuit_core::FeatureKey;

pub const SUCCESSOR_SCORE: FeatureKey = FeatureKey("successor-score");
pub const DISTANCE_TO_FOOD: FeatureKey = FeatureKey("distance-to-food");
pub const AVOID_GHOST: FeatureKey = FeatureKey("avoid-ghost");
pub const GO_BACK: FeatureKey = FeatureKey("go-back");
pub const DEAD_END: FeatureKey = FeatureKey("dead-end");

pub const NUM_INVADERS: FeatureKey = FeatureKey("num-invaders");
pub const INVADER_DISTANCE: FeatureKey = FeatureKey("invader-distance");
pub const STOP: FeatureKey = FeatureKey("stop");
pub const REVERSE: FeatureKey = FeatureKey("reverse");
pub const DETOUR: FeatureKey = FeatureKey("detour");
