//! Label layout engine.
//!
//! Turns cleaned records into an ordered sequence of [`Placement`]s: which
//! page and cell each printable record lands in, and the pre-wrapped lines to
//! draw there with their baselines. Drawing glyphs is left to the renderer.
//!
//! [`Placement`]: addrlabel_model::Placement

mod engine;
mod error;
mod grid;
mod wrap;

pub use engine::{
    LabelLayout, LabelLayoutEngine, NAME_PLACEHOLDER, POSTAL_MARK, layout_records, name_baseline,
};
pub use error::{LayoutError, Result};
pub use grid::{build_cells, validate_sheet};
pub use wrap::wrap_fixed_width;
