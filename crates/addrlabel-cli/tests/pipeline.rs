//! End-to-end tests for the run pipeline.

use std::fs;
use std::path::Path;

use addrlabel_cli::pipeline::{
    MAIL_MERGE_FILE, REPORT_FILE, RunConfig, check, default_output_dir, run,
};
use addrlabel_ingest::IngestOptions;
use addrlabel_model::DiagnosticKind;
use addrlabel_output::CsvEncoding;
use encoding_rs::SHIFT_JIS;

const SAMPLE: &str = "\
優先順位,氏名,郵便番号,住所（標準化）,都道府県
1,山田太郎,2300025,神奈川県横浜市鶴見区市場大和町1-2,神奈川県
2,佐藤花子,,東京都渋谷区神南1-1,東京都
1,John Smith,1234567,1600 Amphitheatre Parkway Mountain View,
3,鈴木一郎,150-0041,東京都渋谷区神南1-1,東京都
";

fn write_sample(dir: &Path) {
    fs::write(dir.join("営業リスト.csv"), SAMPLE).expect("write sample");
}

#[test]
fn run_writes_consistent_outputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sample(dir.path());

    let config = RunConfig::new(dir.path());
    let result = run(&config).expect("run");

    assert_eq!(result.total, 4);
    assert_eq!(result.eligible, 2);
    assert_eq!(result.excluded(), 2);
    assert_eq!(result.placed, 2);
    assert_eq!(result.pages, 1);
    assert_eq!(result.diagnostics.count(DiagnosticKind::MissingPostalCode), 1);
    assert_eq!(result.diagnostics.count(DiagnosticKind::ForeignAddress), 1);
    assert_eq!(result.diagnostics.count(DiagnosticKind::DuplicateAddress), 2);

    let output_dir = dir.path().join("output");
    assert_eq!(result.output_dir, output_dir);
    assert_eq!(
        result.outputs.label_pages,
        vec![output_dir.join("labels").join("labels-page-001.svg")]
    );
    assert!(output_dir.join("layout.json").is_file());

    let mail_merge = result.outputs.mail_merge.as_ref().expect("mail merge");
    assert_eq!(mail_merge.encoding, CsvEncoding::ShiftJis);
    let bytes = fs::read(output_dir.join(MAIL_MERGE_FILE)).expect("read csv");
    let (csv, _) = SHIFT_JIS.decode_without_bom_handling(&bytes);
    assert_eq!(
        csv,
        "郵便番号,住所,氏名\n\
         230-0025,神奈川県横浜市鶴見区市場大和町1-2,山田太郎 様\n\
         150-0041,東京都渋谷区神南1-1,鈴木一郎 様\n"
    );

    // The three outputs agree on how many records are printable.
    assert_eq!(csv.lines().count() - 1, result.placed);
    assert_eq!(mail_merge.rows, result.placed);
    let report = fs::read_to_string(output_dir.join(REPORT_FILE)).expect("read report");
    assert!(report.contains("【有効件数】: 2件"));
    assert!(report.contains("宛名ラベル生成数: 2枚"));
    assert!(report.contains("  優先順位1: 2件 （有効: 1件）"));

    let svg = fs::read_to_string(&result.outputs.label_pages[0]).expect("read svg");
    assert!(svg.contains("〒 230-0025"));
    assert!(svg.contains("鈴木一郎 様"));
    assert!(!svg.contains("John Smith"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sample(dir.path());

    let mut config = RunConfig::new(dir.path());
    config.dry_run = true;
    let result = run(&config).expect("run");

    assert_eq!(result.placed, 2);
    assert!(result.report_text.contains("【総件数】: 4件"));
    assert!(result.outputs.label_pages.is_empty());
    assert!(!dir.path().join("output").exists());
}

#[test]
fn disabled_outputs_are_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sample(dir.path());

    let mut config = RunConfig::new(dir.path());
    config.outputs.labels = false;
    config.outputs.report = false;
    let result = run(&config).expect("run");

    assert!(result.outputs.label_pages.is_empty());
    assert!(result.outputs.layout_json.is_none());
    assert!(result.outputs.report.is_none());
    assert!(dir.path().join("output").join(MAIL_MERGE_FILE).is_file());
    assert!(!dir.path().join("output").join("labels").exists());
}

#[test]
fn missing_columns_abort_before_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("営業リスト.csv"),
        "氏名,郵便番号\n山田太郎,2300025\n",
    )
    .expect("write");

    let err = run(&RunConfig::new(dir.path())).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("required columns not found"));
    assert!(message.contains("優先順位"));
    assert!(!dir.path().join("output").exists());
}

#[test]
fn limit_restricts_processed_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sample(dir.path());

    let mut config = RunConfig::new(dir.path());
    config.ingest = IngestOptions::default().with_limit(Some(2));
    config.dry_run = true;
    let result = run(&config).expect("run");

    assert_eq!(result.total, 2);
    assert_eq!(result.eligible, 1);
}

#[test]
fn check_reports_missing_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sample(dir.path());

    let result = check(dir.path(), &IngestOptions::default()).expect("check");
    assert_eq!(result.total, 4);
    assert_eq!(result.eligible, 2);
    let fields: Vec<&str> = result
        .missing_fields
        .iter()
        .map(|entry| entry.field.label())
        .collect();
    assert_eq!(fields, vec!["郵便番号", "都道府県"]);
    assert!(!dir.path().join("output").exists());
}

#[test]
fn surrounding_whitespace_reaches_classification() {
    let dir = tempfile::tempdir().expect("tempdir");
    let contents = "\
優先順位,氏名,郵便番号,住所（標準化）,都道府県
1,甲,1000001,ab東\u{3000},東京都
2,乙,1500041,東京都渋谷区1 ,東京都
3,丙,1500042,東京都渋谷区1,東京都
";
    fs::write(dir.path().join("営業リスト.csv"), contents).expect("write");

    let result = check(dir.path(), &IngestOptions::default()).expect("check");
    // Two Latin letters in four characters is exactly half, so domestic.
    assert_eq!(result.diagnostics.count(DiagnosticKind::ForeignAddress), 0);
    assert_eq!(result.diagnostics.count(DiagnosticKind::DuplicateAddress), 0);
    assert_eq!(result.eligible, 3);
}

#[test]
fn output_dir_defaults_next_to_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("list.csv");
    fs::write(&file, SAMPLE).expect("write");

    assert_eq!(default_output_dir(dir.path()), dir.path().join("output"));
    assert_eq!(default_output_dir(&file), dir.path().join("output"));
}
