use serde::Deserialize;

use crate::model::coerce::{lenient_f64, lenient_opt_f64};

/// One candidate sensory channel. Numeric fields are nominally in `[0, 1]` but are
/// never clamped. `lambda` stays `None` when the record omits it; scoring then
/// treats it as 0.0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mode {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub lambda: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub snr: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub coverage: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cost: f64,
}

impl Mode {
    pub fn lambda_or_zero(&self) -> f64 {
        self.lambda.unwrap_or(0.0)
    }
}

pub fn build_mode(name: &str, lambda: f64, snr: f64, coverage: f64, cost: f64) -> Mode {
    Mode {
        name: name.to_string(),
        lambda: Some(lambda),
        snr,
        coverage,
        cost,
    }
}

fn default_name() -> String {
    "unnamed".to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/mode.rs"]
mod tests;
