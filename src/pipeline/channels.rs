/// Scales values by their maximum. A non-positive maximum maps everything to zero.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max_val <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / max_val).collect()
}

pub fn soft_floor(values: &[f64], floor: f64) -> Vec<f64> {
    values.iter().map(|&v| v.max(floor)).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/channels.rs"]
mod tests;
