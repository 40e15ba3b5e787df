use crate::error::{EdgeFilterError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `sobel_tool` binary.
#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    /// Filtered bitmap.
    pub image: PathBuf,
    /// Optional run report (geometry, pixel tally, timings).
    #[serde(default, rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig> {
    let config_err = |message: String| EdgeFilterError::Config {
        path: path.to_path_buf(),
        message,
    };
    let data = fs::read_to_string(path).map_err(|e| config_err(format!("read failed: {e}")))?;
    parse_config(&data).map_err(|e| config_err(format!("parse failed: {e}")))
}

pub fn parse_config(data: &str) -> serde_json::Result<EdgeToolConfig> {
    serde_json::from_str(data)
}
