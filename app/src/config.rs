//! Application configuration
//!
//! A single JSON file, every field optional. A missing file means defaults;
//! a file that fails to parse is a configuration error.

use anyhow::{bail, Context, Result};
use pdf_export::{PageSettings, DEFAULT_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use worksheet_model::{Operator, WorksheetSettings, DEFAULT_PROBLEM_COUNT};

/// Everything needed to generate and export one worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub operator: Operator,
    /// Problems on each page
    pub problem_count: usize,
    /// Pages to generate
    pub page_count: usize,
    /// Fixed seed for reproducible worksheets
    pub seed: Option<u64>,
    pub worksheet: WorksheetSettings,
    pub page: PageSettings,
    pub output: PathBuf,
    pub compress: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            operator: Operator::default(),
            problem_count: DEFAULT_PROBLEM_COUNT,
            page_count: 1,
            seed: None,
            worksheet: WorksheetSettings::default(),
            page: PageSettings::default(),
            output: PathBuf::from(DEFAULT_FILE_NAME),
            compress: true,
        }
    }
}

impl AppConfig {
    /// Load the configuration at `path`, falling back to defaults
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config = serde_json::from_str::<AppConfig>(&content)
            .with_context(|| format!("Invalid config {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_count == 0 {
            bail!("pageCount must be at least 1");
        }
        self.worksheet.validate()?;
        Ok(())
    }
}
