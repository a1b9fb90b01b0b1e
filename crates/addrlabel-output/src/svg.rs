//! SVG rendering of laid-out label pages.
//!
//! The layout model puts its origin at the bottom-left corner of the page
//! with y growing upward. SVG has its origin at the top-left, so every
//! baseline is flipped to `page_height - y` on the way out.

use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use addrlabel_layout::LabelLayout;
use addrlabel_model::{LabelCell, PlacedLine, Placement};

use crate::common::{ensure_output_dir, write_file};
use crate::error::{OutputError, Result};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Mincho face first, then any serif the viewer has.
pub const DEFAULT_FONT_FAMILY: &str = "HeiseiMin-W3, IPAexMincho, serif";

/// Text direction of rendered labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    #[default]
    Horizontal,
    /// Top-to-bottom columns, right to left.
    Vertical,
}

/// Options for the SVG renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub font_family: String,
    pub direction: TextDirection,
    /// Outline each used cell, for proofing on plain paper.
    pub cell_borders: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            direction: TextDirection::Horizontal,
            cell_borders: false,
        }
    }
}

impl RenderOptions {
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_cell_borders(mut self, cell_borders: bool) -> Self {
        self.cell_borders = cell_borders;
        self
    }
}

/// File name of the page at zero-based `page_index`.
pub fn page_file_name(page_index: usize) -> String {
    format!("labels-page-{:03}.svg", page_index + 1)
}

fn coord(value: f64) -> String {
    format!("{value:.2}")
}

struct PageWriter<'a> {
    xml: Writer<Vec<u8>>,
    page_index: usize,
    page_height: f64,
    options: &'a RenderOptions,
}

impl PageWriter<'_> {
    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.xml
            .write_event(event)
            .map_err(|e| OutputError::Svg {
                page: self.page_index,
                message: e.to_string(),
            })
    }

    fn cell_border(&mut self, cell: &LabelCell) -> Result<()> {
        let x = coord(cell.origin_x);
        let y = coord(self.page_height - cell.top());
        let width = coord(cell.width);
        let height = coord(cell.height);
        let mut rect = BytesStart::new("rect");
        rect.push_attribute(("x", x.as_str()));
        rect.push_attribute(("y", y.as_str()));
        rect.push_attribute(("width", width.as_str()));
        rect.push_attribute(("height", height.as_str()));
        rect.push_attribute(("fill", "none"));
        rect.push_attribute(("stroke", "#999999"));
        rect.push_attribute(("stroke-width", "0.5"));
        self.event(Event::Empty(rect))
    }

    /// Anchor of `line` in SVG coordinates.
    ///
    /// Vertical text transposes the cell: distance below the cell top
    /// becomes distance left of the cell's right edge, and the left inset
    /// becomes distance below the cell top.
    fn anchor(&self, cell: &LabelCell, line: &PlacedLine) -> (f64, f64) {
        match self.options.direction {
            TextDirection::Horizontal => (line.origin.x, self.page_height - line.origin.y),
            TextDirection::Vertical => {
                let depth = cell.top() - line.origin.y;
                let inset = line.origin.x - cell.origin_x;
                (
                    cell.origin_x + cell.width - depth,
                    self.page_height - cell.top() + inset,
                )
            }
        }
    }

    fn text(&mut self, cell: &LabelCell, line: &PlacedLine) -> Result<()> {
        if line.text.is_empty() {
            return Ok(());
        }
        let (x, y) = self.anchor(cell, line);
        let x = coord(x);
        let y = coord(y);
        let font_size = coord(line.font_size);
        let mut text = BytesStart::new("text");
        text.push_attribute(("x", x.as_str()));
        text.push_attribute(("y", y.as_str()));
        text.push_attribute(("font-size", font_size.as_str()));
        if self.options.direction == TextDirection::Vertical {
            text.push_attribute(("writing-mode", "vertical-rl"));
        }
        self.event(Event::Start(text))?;
        self.event(Event::Text(BytesText::new(&line.text)))?;
        self.event(Event::End(BytesEnd::new("text")))
    }

    fn placement(&mut self, placement: &Placement) -> Result<()> {
        let cell = placement.cell;
        if self.options.cell_borders {
            self.cell_border(&cell)?;
        }
        for line in placement.lines() {
            self.text(&cell, line)?;
        }
        Ok(())
    }
}

/// Render one page of `layout` as an SVG document.
pub fn render_page_svg(
    layout: &LabelLayout,
    page_index: usize,
    options: &RenderOptions,
) -> Result<String> {
    if page_index >= layout.page_count {
        return Err(OutputError::Svg {
            page: page_index,
            message: format!("layout has {} page(s)", layout.page_count),
        });
    }
    let sheet = &layout.sheet;
    let width = coord(sheet.page_width);
    let height = coord(sheet.page_height);
    let view_box = format!("0 0 {width} {height}");
    let width_pt = format!("{width}pt");
    let height_pt = format!("{height}pt");

    let mut page = PageWriter {
        xml: Writer::new_with_indent(Vec::new(), b' ', 2),
        page_index,
        page_height: sheet.page_height,
        options,
    };
    page.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", SVG_NS));
    svg.push_attribute(("width", width_pt.as_str()));
    svg.push_attribute(("height", height_pt.as_str()));
    svg.push_attribute(("viewBox", view_box.as_str()));
    page.event(Event::Start(svg))?;

    let mut group = BytesStart::new("g");
    group.push_attribute(("font-family", options.font_family.as_str()));
    group.push_attribute(("fill", "#000000"));
    page.event(Event::Start(group))?;

    for placement in layout.page(page_index) {
        page.placement(placement)?;
    }

    page.event(Event::End(BytesEnd::new("g")))?;
    page.event(Event::End(BytesEnd::new("svg")))?;

    let bytes = page.xml.into_inner();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write every page of `layout` under `output_dir/labels`.
pub fn write_svg_pages(
    layout: &LabelLayout,
    output_dir: &Path,
    options: &RenderOptions,
) -> Result<Vec<PathBuf>> {
    let pages_dir = ensure_output_dir(output_dir, "labels")?;
    let mut outputs = Vec::with_capacity(layout.page_count);
    for page_index in 0..layout.page_count {
        let document = render_page_svg(layout, page_index, options)?;
        let path = pages_dir.join(page_file_name(page_index));
        write_file(&path, document.as_bytes())?;
        debug!(page = page_index + 1, path = %path.display(), "wrote label page");
        outputs.push(path);
    }
    info!(
        pages = outputs.len(),
        dir = %pages_dir.display(),
        "wrote label pages"
    );
    Ok(outputs)
}
