use crate::model::{OptimaResult, describe_score};
use crate::pipeline::{normalize, soft_floor};
use crate::report::{format_f64_4, format_f64_6, format_opt_6};

const BAR_WIDTH: usize = 40;

pub fn render_report_text(result: &OptimaResult) -> String {
    let mut out = String::new();

    out.push_str("Sensory Optima Report\n");
    out.push_str("=====================\n\n");

    out.push_str(&format!(
        "Mode*:  {}\n",
        result.mode_star.as_deref().unwrap_or("None")
    ));
    out.push_str(&format!("λ*:     {}\n", format_opt_6(result.lambda_star)));
    out.push_str(&format!(
        "Score*: {}\n",
        result
            .score_star
            .map(format_f64_4)
            .unwrap_or_else(|| "None".to_string())
    ));
    out.push_str(&format!("ΔΦ(H7): {}\n", format_opt_6(result.delta_phi)));
    out.push_str(&format!("Align:  {}\n", format_opt_6(result.alignment)));
    out.push_str(&format!(
        "Band:   {}\n",
        describe_score(result.score_star).as_str()
    ));
    out.push_str(&format!(
        "Triad:  energy={}, information={}, consciousness={}\n\n",
        format_f64_6(result.triad.energy),
        format_f64_6(result.triad.information),
        format_f64_6(result.triad.consciousness)
    ));

    out.push_str("Ranking:\n");
    if result.is_empty() {
        out.push_str("  (no modes)\n");
        return out;
    }
    for (name, score) in &result.ranking {
        out.push_str(&format!("  - {:10} : {}\n", name, format_f64_4(*score)));
    }

    out.push_str("\nScores:\n");
    out.push_str(&render_bar_chart(&result.ranking));
    out
}

/// Horizontal bars scaled to the best score; non-positive scores draw empty.
pub fn render_bar_chart(ranking: &[(String, f64)]) -> String {
    let scores = ranking.iter().map(|(_, s)| *s).collect::<Vec<_>>();
    let fractions = soft_floor(&normalize(&scores), 0.0);

    let mut out = String::new();
    for ((name, score), frac) in ranking.iter().zip(fractions) {
        let filled = (frac * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        out.push_str(&format!(
            "  {:10} |{}{}| {}\n",
            name,
            "#".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            format_f64_4(*score)
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
