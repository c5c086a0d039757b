mod coerce;
pub mod descriptor;
pub mod mode;
pub mod optima;
pub mod weights;

pub use descriptor::{OptimaBand, describe_score};
pub use mode::{Mode, build_mode};
pub use optima::{H7_TARGET, OptimaResult, Triad};
pub use weights::Weights;
