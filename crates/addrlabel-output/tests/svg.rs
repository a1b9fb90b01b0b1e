//! Integration tests for SVG page rendering and layout export.

use addrlabel_layout::{LabelLayout, LabelLayoutEngine};
use addrlabel_model::{CleanedRecord, LabelMetrics, LabelSheet, Record};
use addrlabel_output::{
    OutputError, RenderOptions, TextDirection, page_file_name, render_page_svg,
    write_layout_json, write_svg_pages,
};

fn eligible(row: usize, name: &str) -> CleanedRecord {
    CleanedRecord {
        source: Record::new(row),
        postal_code: Some("230-0025".to_string()),
        address: format!("神奈川県横浜市鶴見区市場大和町{row}"),
        name: name.to_string(),
        is_foreign: false,
        is_duplicate_address: false,
    }
}

fn layout_of(records: &[CleanedRecord]) -> LabelLayout {
    LabelLayoutEngine::new(LabelSheet::a4_ten_up(), LabelMetrics::default())
        .expect("engine")
        .layout(records)
}

#[test]
fn page_uses_point_units_and_flipped_baselines() {
    let layout = layout_of(&[eligible(0, "山田太郎 様")]);
    let svg = render_page_svg(&layout, 0, &RenderOptions::default()).expect("render");

    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(svg.contains(r#"width="595.28pt" height="841.89pt" viewBox="0 0 595.28 841.89""#));
    // Postal baseline sits 30pt below the top of the first cell.
    assert!(svg.contains(r#"x="10.00" y="30.00" font-size="11.00""#));
    assert!(svg.contains("〒 230-0025"));
    assert!(svg.contains("山田太郎 様"));
    assert!(!svg.contains("writing-mode"));
    assert!(!svg.contains("<rect"));
}

#[test]
fn text_is_escaped() {
    let layout = layout_of(&[eligible(0, "山田 & 佐藤 様")]);
    let svg = render_page_svg(&layout, 0, &RenderOptions::default()).expect("render");
    assert!(svg.contains("山田 &amp; 佐藤 様"));
}

#[test]
fn vertical_text_transposes_the_cell() {
    let layout = layout_of(&[eligible(0, "山田太郎 様")]);
    let options = RenderOptions::default()
        .with_direction(TextDirection::Vertical)
        .with_font_family("IPAexMincho")
        .with_cell_borders(true);
    let svg = render_page_svg(&layout, 0, &options).expect("render");

    assert!(svg.contains(r#"writing-mode="vertical-rl""#));
    assert!(svg.contains(r#"font-family="IPAexMincho""#));
    assert!(svg.contains(r#"x="267.64" y="10.00" font-size="11.00""#));
    assert!(svg.contains("<rect"));
}

#[test]
fn page_out_of_range_is_an_error() {
    let layout = layout_of(&[]);
    let err = render_page_svg(&layout, 0, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, OutputError::Svg { page: 0, .. }));
}

#[test]
fn one_file_is_written_per_page() {
    let records: Vec<CleanedRecord> = (0..23).map(|row| eligible(row, "顧客 様")).collect();
    let layout = layout_of(&records);
    let dir = tempfile::tempdir().expect("tempdir");

    let paths = write_svg_pages(&layout, dir.path(), &RenderOptions::default()).expect("write");
    let names: Vec<String> = paths
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["labels-page-001.svg", "labels-page-002.svg", "labels-page-003.svg"]
    );
    assert!(paths.iter().all(|path| path.starts_with(dir.path().join("labels"))));

    let last = std::fs::read_to_string(&paths[2]).expect("read");
    assert_eq!(last.matches("〒 230-0025").count(), 3);
    assert_eq!(page_file_name(9), "labels-page-010.svg");
}

#[test]
fn layout_json_lists_placements() {
    let layout = layout_of(&[eligible(0, "山田太郎 様"), eligible(1, "")]);
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("layout.json");

    write_layout_json(&layout, &path).expect("write");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
    assert_eq!(json["page_count"], 1);
    assert_eq!(json["placements"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["placements"][1]["name_line"]["text"], "氏名未記入");
}
