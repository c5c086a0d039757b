#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimaBand {
    HighOptima,
    MidOptima,
    LowOptima,
    Suboptimal,
    Undefined,
}

impl OptimaBand {
    pub fn as_str(self) -> &'static str {
        match self {
            OptimaBand::HighOptima => "high-optima",
            OptimaBand::MidOptima => "mid-optima",
            OptimaBand::LowOptima => "low-optima",
            OptimaBand::Suboptimal => "suboptimal",
            OptimaBand::Undefined => "undefined",
        }
    }
}

/// Bands are open on the lower edge: exactly 0.7 is still mid-optima.
pub fn describe_score(score: Option<f64>) -> OptimaBand {
    let Some(s) = score else {
        return OptimaBand::Undefined;
    };
    if s > 0.7 {
        OptimaBand::HighOptima
    } else if s > 0.4 {
        OptimaBand::MidOptima
    } else if s > 0.0 {
        OptimaBand::LowOptima
    } else {
        OptimaBand::Suboptimal
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/descriptor.rs"]
mod tests;
