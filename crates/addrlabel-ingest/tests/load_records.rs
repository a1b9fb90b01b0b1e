use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use addrlabel_ingest::{IngestError, IngestOptions, load_records};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const HEADER: &str = "優先順位,氏名,郵便番号,住所（標準化）,都道府県\n";

fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

/// One cell of a worksheet row.
enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

fn cell_xml(reference: &str, cell: &Cell<'_>) -> String {
    match cell {
        Cell::Text(text) => format!(
            r#"<c r="{reference}" t="inlineStr"><is><t xml:space="preserve">{text}</t></is></c>"#
        ),
        Cell::Number(value) => format!(r#"<c r="{reference}"><v>{value}</v></c>"#),
    }
}

/// Write a single-sheet `.xlsx` workbook.
fn write_workbook(path: &Path, sheet: &str, rows: &[Vec<Cell<'_>>]) {
    let mut sheet_data = String::new();
    for (row_idx, row) in rows.iter().enumerate() {
        let row_number = row_idx + 1;
        sheet_data.push_str(&format!(r#"<row r="{row_number}">"#));
        for (col_idx, cell) in row.iter().enumerate() {
            let column = char::from(b'A' + u8::try_from(col_idx).expect("column"));
            sheet_data.push_str(&cell_xml(&format!("{column}{row_number}"), cell));
        }
        sheet_data.push_str("</row>");
    }
    let parts = [
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#
                .to_string(),
        ),
        (
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
                .to_string(),
        ),
        (
            "xl/workbook.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{sheet}" sheetId="1" r:id="rId1"/></sheets></workbook>"#
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#
                .to_string(),
        ),
        (
            "xl/worksheets/sheet1.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{sheet_data}</sheetData></worksheet>"#
            ),
        ),
    ];

    let mut zip = ZipWriter::new(File::create(path).expect("create workbook"));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, contents) in parts {
        zip.start_file(name, options).expect("start part");
        zip.write_all(contents.as_bytes()).expect("write part");
    }
    zip.finish().expect("finish workbook");
}

fn header_cells() -> Vec<Cell<'static>> {
    ["優先順位", "氏名", "郵便番号", "住所（標準化）", "都道府県"]
        .into_iter()
        .map(Cell::Text)
        .collect()
}

#[test]
fn loads_rows_as_optional_strings() {
    let dir = tempfile::tempdir().expect("temp dir");
    let contents = format!(
        "{HEADER}1,木邑敏章,0600001,北海道札幌市中央区北1条西,北海道\n2.0,,,,\n"
    );
    let path = write(dir.path(), "list.csv", contents.as_bytes());

    let records = load_records(&path, &IngestOptions::default()).expect("load");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].row, 0);
    assert_eq!(records[0].postal_code.as_deref(), Some("0600001"));
    assert_eq!(records[0].priority, Some(1));
    assert_eq!(records[1].row, 1);
    assert_eq!(records[1].priority, Some(2));
    assert!(records[1].name.is_none());
    assert!(records[1].address.is_none());
}

#[test]
fn reads_sheet_from_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let contents = format!("{HEADER}1,正司宣彦,618-0011,京都府三島郡島本町広瀬,京都府\n");
    write(dir.path(), "営業リスト.csv", contents.as_bytes());

    let records = load_records(dir.path(), &IngestOptions::default()).expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].prefecture.as_deref(), Some("京都府"));
}

#[test]
fn missing_sheet_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let options = IngestOptions::default().with_sheet("顧客");
    let err = load_records(dir.path(), &options).unwrap_err();
    assert!(matches!(err, IngestError::SheetNotFound { ref sheet, .. } if sheet == "顧客"));
}

#[test]
fn missing_required_columns_fail_before_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(dir.path(), "list.csv", "氏名,住所\n山田,東京都\n".as_bytes());

    let err = load_records(&path, &IngestOptions::default()).unwrap_err();
    match err {
        IngestError::MissingColumns { columns, .. } => {
            assert_eq!(columns, vec!["優先順位", "郵便番号", "住所（標準化）", "都道府県"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_records(&dir.path().join("nope.csv"), &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn cell_whitespace_is_kept() {
    let dir = tempfile::tempdir().expect("temp dir");
    let contents = format!(
        "{HEADER}1, 山田太郎 ,1000001,ab東\u{3000},東京都\n2,佐藤花子,1500041,東京都渋谷区1 ,\u{3000}\n"
    );
    let path = write(dir.path(), "list.csv", contents.as_bytes());

    let records = load_records(&path, &IngestOptions::default()).expect("load");
    assert_eq!(records[0].name.as_deref(), Some(" 山田太郎 "));
    assert_eq!(records[0].address.as_deref(), Some("ab東\u{3000}"));
    assert_eq!(records[1].address.as_deref(), Some("東京都渋谷区1 "));
    assert!(records[1].prefecture.is_none());
}

#[test]
fn reads_named_workbook_sheet() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("顧客.xlsx");
    write_workbook(
        &path,
        "営業リスト",
        &[
            header_cells(),
            vec![
                Cell::Number(1.0),
                Cell::Text("木邑敏章"),
                Cell::Text("0600001"),
                Cell::Text("北海道札幌市中央区北1条西"),
                Cell::Text("北海道"),
            ],
            vec![
                Cell::Number(2.0),
                Cell::Text("正司宣彦"),
                Cell::Number(6180011.0),
                Cell::Text("京都府三島郡島本町広瀬"),
                Cell::Text("京都府"),
            ],
        ],
    );

    let records = load_records(&path, &IngestOptions::default()).expect("load");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].priority, Some(1));
    assert_eq!(records[0].postal_code.as_deref(), Some("0600001"));
    assert_eq!(records[1].priority, Some(2));
    assert_eq!(records[1].postal_code.as_deref(), Some("6180011"));
    assert_eq!(records[1].name.as_deref(), Some("正司宣彦"));
}

#[test]
fn missing_workbook_sheet_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("顧客.xlsx");
    write_workbook(&path, "営業リスト", &[header_cells()]);

    let options = IngestOptions::default().with_sheet("顧客");
    let err = load_records(&path, &options).unwrap_err();
    assert!(matches!(err, IngestError::SheetNotFound { ref sheet, .. } if sheet == "顧客"));
}

#[test]
fn limit_keeps_leading_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut contents = HEADER.to_string();
    for idx in 0..15 {
        contents.push_str(&format!("1,氏名{idx},1234567,東京都渋谷区{idx},東京都\n"));
    }
    let path = write(dir.path(), "list.csv", contents.as_bytes());

    let options = IngestOptions::default().with_limit(Some(10));
    let records = load_records(&path, &options).expect("load");
    assert_eq!(records.len(), 10);
    assert_eq!(records[9].name.as_deref(), Some("氏名9"));
}

#[test]
fn reads_shift_jis_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let contents = format!("{HEADER}1,後藤由起子,2300025,神奈川県横浜市鶴見区,神奈川県\n");
    let (bytes, _, had_errors) = encoding_rs::SHIFT_JIS.encode(&contents);
    assert!(!had_errors);
    let path = write(dir.path(), "list.csv", &bytes);

    let records = load_records(&path, &IngestOptions::default()).expect("load");
    assert_eq!(records[0].name.as_deref(), Some("後藤由起子"));
}
