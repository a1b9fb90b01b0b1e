//! Output generation for cleaned contact lists.
//!
//! - mail-merge CSV (Shift_JIS, UTF-8 with BOM as fallback)
//! - one SVG document per label page
//! - placement JSON

pub mod common;
mod error;
pub mod layout_json;
pub mod mail_merge;
pub mod svg;

pub use error::{OutputError, Result};
pub use layout_json::{LAYOUT_JSON_FILE, write_layout_json};
pub use mail_merge::{
    CsvEncoding, MailMergeOutcome, encode_mail_merge, render_mail_merge_csv, write_mail_merge_csv,
};
pub use svg::{
    DEFAULT_FONT_FAMILY, RenderOptions, TextDirection, page_file_name, render_page_svg,
    write_svg_pages,
};
