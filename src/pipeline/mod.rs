pub mod channels;
pub mod scorer;

pub use channels::{normalize, soft_floor};
pub use scorer::{compute_optima, score_mode};
