//! Alpha-beta search for the damista checkers engine

pub mod params;
pub mod search;
pub mod stats;

pub use self::params::{SearchParams, DEPTH_LIMIT};
pub use self::search::{Decision, Search, INFINITE};
pub use self::stats::SearchStats;
