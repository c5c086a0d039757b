//! Ranks candidate sensory modes by a weighted linear/quadratic score and measures
//! how close the best one lands to the H7 target.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::{H7_TARGET, Mode, OptimaResult, Triad, Weights, build_mode};
pub use pipeline::{compute_optima, score_mode};
