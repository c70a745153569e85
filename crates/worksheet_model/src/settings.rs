//! Worksheet settings: grid geometry and operand range
//!
//! The grid describes the visual cell geometry of a page. It does not decide
//! how many problems a page holds; that is the separately configured problem
//! count.

use crate::{ModelError, OperandRange, Result};
use serde::{Deserialize, Serialize};

/// Problem counts offered by the count selector
pub const PROBLEM_COUNT_PRESETS: [usize; 5] = [10, 15, 20, 25, 30];

/// Default number of problems per page
pub const DEFAULT_PROBLEM_COUNT: usize = 25;

/// Grid geometry of a worksheet page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSpec {
    /// Number of problems per row
    pub columns: u32,
    /// Number of rows per page
    pub rows: u32,
    /// Width of each problem cell
    pub item_width: f64,
    /// Height of each problem cell
    pub item_height: f64,
    /// Space between rows
    pub row_spacing: f64,
    /// Space between columns
    pub column_spacing: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 5,
            item_width: 120.0,
            item_height: 100.0,
            row_spacing: 16.0,
            column_spacing: 16.0,
        }
    }
}

impl GridSpec {
    /// Validate the grid geometry
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ModelError::Configuration(format!(
                "Grid must have at least one column and row, got {}x{}",
                self.columns, self.rows
            )));
        }
        if !(self.item_width.is_finite() && self.item_width > 0.0)
            || !(self.item_height.is_finite() && self.item_height > 0.0)
        {
            return Err(ModelError::Configuration(format!(
                "Grid cells must have a positive size, got {}x{}",
                self.item_width, self.item_height
            )));
        }
        if !(self.row_spacing.is_finite() && self.row_spacing >= 0.0)
            || !(self.column_spacing.is_finite() && self.column_spacing >= 0.0)
        {
            return Err(ModelError::Configuration(format!(
                "Grid spacing must be non-negative, got row {} column {}",
                self.row_spacing, self.column_spacing
            )));
        }
        Ok(())
    }

    /// Number of cells in the nominal grid (`columns * rows`)
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Settings from the worksheet panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WorksheetSettings {
    #[serde(default)]
    pub grid: GridSpec,
    #[serde(default)]
    pub operands: OperandRange,
}

impl WorksheetSettings {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.operands.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = GridSpec::default();
        assert_eq!(grid.columns, 5);
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.capacity(), 25);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_grid_rejects_zero_columns() {
        let grid = GridSpec {
            columns: 0,
            ..Default::default()
        };
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_grid_rejects_negative_spacing() {
        let grid = GridSpec {
            row_spacing: -1.0,
            ..Default::default()
        };
        assert!(grid.validate().is_err());

        let grid = GridSpec {
            item_height: 0.0,
            ..Default::default()
        };
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_settings_deserialize_camel_case() {
        let json = r#"{
            "grid": {"columns": 4, "rows": 6, "itemWidth": 150, "itemHeight": 90,
                     "rowSpacing": 8, "columnSpacing": 24},
            "operands": {"min": 2, "max": 12}
        }"#;
        let settings: WorksheetSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.grid.columns, 4);
        assert_eq!(settings.grid.column_spacing, 24.0);
        assert_eq!(settings.operands, OperandRange { min: 2, max: 12 });
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_defaults_when_missing() {
        let settings: WorksheetSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, WorksheetSettings::default());
    }
}
