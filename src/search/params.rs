//! Search parameters and configuration

use crate::eval::EvalParams;

/// Default search horizon in plies
pub const DEPTH_LIMIT: u8 = 8;

/// Search parameters for the engine
#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Maximum search depth in plies; the root ply counts as depth 1
    pub max_depth: u8,

    /// Evaluation terms used at leaves and for move ordering
    pub eval: EvalParams,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: DEPTH_LIMIT,
            eval: EvalParams::default(),
        }
    }
}

impl SearchParams {
    /// Create new search params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum depth in plies
    pub fn max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the chasing-heuristic weight (0 disables it)
    pub fn chase_weight(mut self, weight: i32) -> Self {
        self.eval.chase_weight = weight;
        self
    }
}
