use tracing::debug;

use crate::model::{H7_TARGET, Mode, OptimaResult, Triad, Weights};

/// `base = w_snr*snr + w_cov*coverage - w_cost*cost`, then lambda interpolates
/// between the linear and quadratic response. Inputs are not clamped.
pub fn score_mode(mode: &Mode, weights: &Weights) -> f64 {
    let base = weights.snr * mode.snr + weights.coverage * mode.coverage - weights.cost * mode.cost;
    let lam = mode.lambda_or_zero();
    (1.0 - lam) * base + lam * (base * base)
}

pub fn compute_optima(modes: &[Mode], weights: Option<&Weights>) -> OptimaResult {
    if modes.is_empty() {
        return OptimaResult::empty();
    }
    let defaults = Weights::default_v1();
    let weights = weights.unwrap_or(&defaults);

    let mut scored = modes
        .iter()
        .map(|m| (m, score_mode(m, weights)))
        .collect::<Vec<_>>();
    // sort_by is stable, so ties keep input order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let (best, score_star) = scored[0];
    let delta_phi = (score_star - H7_TARGET).abs();
    let alignment = (1.0 - delta_phi).max(0.0);

    let n = modes.len() as f64;
    let energy = modes.iter().map(|m| m.snr).sum::<f64>() / n;
    let information = modes.iter().map(|m| m.coverage).sum::<f64>() / n;

    debug!(
        mode_star = %best.name,
        score_star,
        delta_phi,
        n_modes = modes.len(),
        "scored modes"
    );

    OptimaResult {
        mode_star: Some(best.name.clone()),
        lambda_star: best.lambda,
        score_star: Some(score_star),
        delta_phi: Some(delta_phi),
        alignment: Some(alignment),
        ranking: scored
            .iter()
            .map(|(m, s)| (m.name.clone(), *s))
            .collect(),
        triad: Triad {
            energy,
            information,
            consciousness: alignment,
        },
        h7_target: H7_TARGET,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/scorer.rs"]
mod tests;
