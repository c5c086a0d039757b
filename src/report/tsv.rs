use crate::model::{OptimaResult, describe_score};
use crate::report::format_f64_6;

pub fn render_ranking_tsv(result: &OptimaResult) -> String {
    let mut out = String::from("rank\tname\tscore\tdescriptor\n");
    for (i, (name, score)) in result.ranking.iter().enumerate() {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            i + 1,
            name,
            format_f64_6(*score),
            describe_score(Some(*score)).as_str()
        ));
    }
    out
}
