use serde::{Deserialize, Serialize};

/// Coherence target the best score is compared against.
pub const H7_TARGET: f64 = 0.70;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Triad {
    pub energy: f64,
    pub information: f64,
    pub consciousness: f64,
}

/// Outcome of one scoring pass. Scalar fields are `None` only when no modes were
/// supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimaResult {
    pub mode_star: Option<String>,
    pub lambda_star: Option<f64>,
    pub score_star: Option<f64>,
    pub delta_phi: Option<f64>,
    pub alignment: Option<f64>,
    pub ranking: Vec<(String, f64)>,
    pub triad: Triad,
    #[serde(rename = "H7_target")]
    pub h7_target: f64,
}

impl OptimaResult {
    pub fn empty() -> Self {
        Self {
            mode_star: None,
            lambda_star: None,
            score_star: None,
            delta_phi: None,
            alignment: None,
            ranking: Vec::new(),
            triad: Triad::default(),
            h7_target: H7_TARGET,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}
