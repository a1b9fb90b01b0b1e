//! Configuration options for cleaning and label layout.

use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Default honorific appended to display names.
pub const DEFAULT_HONORIFIC: &str = "様";

/// Options for the record cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Suffix appended (after a space) to every non-empty display name.
    pub honorific: String,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            honorific: DEFAULT_HONORIFIC.to_string(),
        }
    }
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_honorific(mut self, honorific: impl Into<String>) -> Self {
        self.honorific = honorific.into();
        self
    }
}

/// Page size and grid shape of a label sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelSheet {
    pub page_width: f64,
    pub page_height: f64,
    pub columns: usize,
    pub rows: usize,
}

impl LabelSheet {
    pub fn new(page_width: f64, page_height: f64, columns: usize, rows: usize) -> Self {
        Self {
            page_width,
            page_height,
            columns,
            rows,
        }
    }

    /// A4 portrait split into 2 columns by 5 rows.
    pub fn a4_ten_up() -> Self {
        Self::new(210.0 * POINTS_PER_MM, 297.0 * POINTS_PER_MM, 2, 5)
    }

    /// Standard Japanese postcard (100 mm x 148 mm), one card per page.
    pub fn hagaki() -> Self {
        Self::new(100.0 * POINTS_PER_MM, 148.0 * POINTS_PER_MM, 1, 1)
    }

    pub fn cells_per_page(&self) -> usize {
        self.columns * self.rows
    }

    pub fn cell_width(&self) -> f64 {
        self.page_width / self.columns as f64
    }

    pub fn cell_height(&self) -> f64 {
        self.page_height / self.rows as f64
    }
}

impl Default for LabelSheet {
    fn default() -> Self {
        Self::a4_ten_up()
    }
}

/// Text placement inside a single label cell, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    /// Horizontal inset of every line from the cell's left edge.
    pub left_inset: f64,
    /// Postal line baseline, measured down from the cell top.
    pub postal_offset: f64,
    /// First address line baseline, measured down from the cell top.
    pub address_offset: f64,
    /// Distance between consecutive address baselines.
    pub address_line_pitch: f64,
    /// Gap between the last address slot and the name baseline.
    pub name_gap: f64,
    /// Lowest allowed name baseline, measured up from the cell bottom.
    pub bottom_margin: f64,
    /// Characters per wrapped address line.
    pub max_chars_per_line: usize,
    pub postal_font_size: f64,
    pub address_font_size: f64,
    pub name_font_size: f64,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            left_inset: 10.0,
            postal_offset: 30.0,
            address_offset: 50.0,
            address_line_pitch: 14.0,
            name_gap: 20.0,
            bottom_margin: 10.0,
            max_chars_per_line: 25,
            postal_font_size: 11.0,
            address_font_size: 10.0,
            name_font_size: 12.0,
        }
    }
}

impl LabelMetrics {
    pub fn with_max_chars_per_line(mut self, max_chars: usize) -> Self {
        self.max_chars_per_line = max_chars;
        self
    }
}
