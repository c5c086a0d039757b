use crate::model::OptimaResult;
use crate::report::ReportError;

pub fn render_summary_json(result: &OptimaResult) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(result)?;
    out.push('\n');
    Ok(out)
}
