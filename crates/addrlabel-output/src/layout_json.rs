//! Placement export for downstream renderers.

use std::path::Path;

use tracing::info;

use addrlabel_layout::LabelLayout;

use crate::common::write_file;
use crate::error::Result;

pub const LAYOUT_JSON_FILE: &str = "layout.json";

/// Write `layout` as pretty-printed JSON.
pub fn write_layout_json(layout: &LabelLayout, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(layout)?;
    write_file(path, &bytes)?;
    info!(
        path = %path.display(),
        placements = layout.placed_count(),
        "wrote layout JSON"
    );
    Ok(())
}
