pub mod json;
pub mod text;
pub mod tsv;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::OptimaResult;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::tsv::render_ranking_tsv;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(result: &OptimaResult, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(render_report_text(result)),
        OutputFormat::Json => render_summary_json(result),
    }
}

pub fn write_reports(result: &OptimaResult, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_text(&out_dir.join("summary.json"), &render_summary_json(result)?)?;
    write_text(&out_dir.join("report.txt"), &render_report_text(result))?;
    write_text(&out_dir.join("ranking.tsv"), &render_ranking_tsv(result))?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_opt_6(v: Option<f64>) -> String {
    match v {
        Some(v) => format_f64_6(v),
        None => "None".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
