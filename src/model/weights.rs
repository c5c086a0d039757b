use serde::Deserialize;

use crate::model::coerce::lenient_f64;

/// Linear weights applied to snr, coverage and cost. Keys missing from a partial
/// map keep their `default_v1` value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Weights {
    #[serde(deserialize_with = "lenient_f64")]
    pub snr: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub coverage: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub cost: f64,
}

impl Weights {
    pub fn default_v1() -> Self {
        Self {
            snr: 0.55,
            coverage: 0.35,
            cost: 0.25,
        }
    }

    pub fn with_overrides(
        mut self,
        snr: Option<f64>,
        coverage: Option<f64>,
        cost: Option<f64>,
    ) -> Self {
        if let Some(v) = snr {
            self.snr = v;
        }
        if let Some(v) = coverage {
            self.coverage = v;
        }
        if let Some(v) = cost {
            self.cost = v;
        }
        self
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::default_v1()
    }
}
