use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::model::{Mode, Weights, build_mode};

/// Input document: the candidate modes plus an optional weight map.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Environment {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub weights: Option<Weights>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_env(path: &Path) -> Result<Environment, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_env(&text)
}

pub fn parse_env(text: &str) -> Result<Environment, InputError> {
    Ok(serde_json::from_str(text)?)
}

pub fn demo_env() -> Environment {
    Environment {
        modes: vec![
            build_mode("audio", 0.35, 0.82, 0.55, 0.18),
            build_mode("visual", 0.60, 0.92, 0.90, 0.45),
            build_mode("tactile", 0.25, 0.60, 0.40, 0.12),
            build_mode("vestibular", 0.40, 0.70, 0.50, 0.30),
        ],
        weights: None,
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Mode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Mode>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
