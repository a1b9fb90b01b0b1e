use serde::{Deserialize, Serialize};

/// A position in points, origin at the page's bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A fixed rectangular label region on a page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelCell {
    pub page_index: usize,
    pub cell_index: usize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelCell {
    pub fn top(&self) -> f64 {
        self.origin_y + self.height
    }

    /// The same cell geometry placed on another page.
    pub fn on_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }
}

/// One pre-wrapped line of text with its baseline origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    pub origin: Point,
    pub font_size: f64,
}

/// Assignment of one eligible record to one label cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub record_row: usize,
    pub cell: LabelCell,
    pub postal_line: PlacedLine,
    /// Never empty; an empty address yields a single empty line.
    pub address_lines: Vec<PlacedLine>,
    pub name_line: PlacedLine,
}

impl Placement {
    pub fn page_index(&self) -> usize {
        self.cell.page_index
    }

    pub fn cell_index(&self) -> usize {
        self.cell.cell_index
    }

    pub fn address_texts(&self) -> Vec<&str> {
        self.address_lines
            .iter()
            .map(|line| line.text.as_str())
            .collect()
    }

    /// Every line of the label in drawing order.
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        std::iter::once(&self.postal_line)
            .chain(self.address_lines.iter())
            .chain(std::iter::once(&self.name_line))
    }
}
