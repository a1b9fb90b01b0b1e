//! End-to-end processing of one contact list.
//!
//! Stages run in a fixed order: ingest, survey, clean, layout, report. A
//! structural ingest failure aborts before any record is processed, and no
//! file is written until every stage has succeeded.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use tracing::{debug, info, info_span, trace};

use addrlabel_clean::{
    CleaningOutcome, MissingField, RecordCleaner, log_missing_fields, survey_missing_fields,
};
use addrlabel_ingest::{IngestOptions, load_records};
use addrlabel_layout::{LabelLayout, LabelLayoutEngine};
use addrlabel_model::{CleanOptions, LabelMetrics, LabelSheet};
use addrlabel_output::{
    LAYOUT_JSON_FILE, RenderOptions, write_layout_json, write_mail_merge_csv, write_svg_pages,
};
use addrlabel_report::{QualityReport, write_report};

use crate::logging::redact_value;
use crate::types::{CheckResult, OutputPaths, OutputSelection, RunResult};

pub const MAIL_MERGE_FILE: &str = "宛名データ.csv";
pub const REPORT_FILE: &str = "品質レポート.txt";

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub ingest: IngestOptions,
    pub clean: CleanOptions,
    pub sheet: LabelSheet,
    pub metrics: LabelMetrics,
    pub render: RenderOptions,
    pub outputs: OutputSelection,
    /// Process and report without writing files.
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output_dir = default_output_dir(&input);
        Self {
            input,
            output_dir,
            ingest: IngestOptions::default(),
            clean: CleanOptions::default(),
            sheet: LabelSheet::default(),
            metrics: LabelMetrics::default(),
            render: RenderOptions::default(),
            outputs: OutputSelection::default(),
            dry_run: false,
        }
    }
}

/// `output` next to the input file, or inside the input directory.
pub fn default_output_dir(input: &Path) -> PathBuf {
    if input.is_dir() {
        return input.join("output");
    }
    input
        .parent()
        .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
}

/// Load, survey and clean a contact list.
fn load_and_clean(
    input: &Path,
    ingest: &IngestOptions,
    clean: &CleanOptions,
) -> Result<(CleaningOutcome, Vec<MissingField>)> {
    let ingest_span = info_span!("ingest", input = %input.display());
    let ingest_start = Instant::now();
    let records = ingest_span
        .in_scope(|| load_records(input, ingest))
        .with_context(|| format!("load contact list from {}", input.display()))?;
    info!(
        records = records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let missing_fields = survey_missing_fields(&records);
    log_missing_fields(&missing_fields);

    let clean_span = info_span!("clean", records = records.len());
    let outcome = clean_span.in_scope(|| RecordCleaner::new(clean.clone()).clean(records));
    for record in outcome.records.iter().filter(|record| !record.is_eligible()) {
        trace!(
            row = record.row(),
            name = redact_value(&record.name),
            address = redact_value(&record.address),
            "excluded record"
        );
    }
    Ok((outcome, missing_fields))
}

/// Load and clean without laying out or writing anything.
pub fn check(input: &Path, ingest: &IngestOptions) -> Result<CheckResult> {
    let (outcome, missing_fields) = load_and_clean(input, ingest, &CleanOptions::default())?;
    Ok(CheckResult {
        input: input.to_path_buf(),
        total: outcome.records.len(),
        eligible: outcome.eligible_count(),
        diagnostics: outcome.diagnostics,
        missing_fields,
    })
}

/// Run every stage and write the selected outputs.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let run_span = info_span!("run", input = %config.input.display());
    let _run_guard = run_span.enter();

    // =========================================================================
    // Stage 1-2: Ingest and clean
    // =========================================================================
    let (outcome, missing_fields) = load_and_clean(&config.input, &config.ingest, &config.clean)?;

    // =========================================================================
    // Stage 3: Layout
    // =========================================================================
    let engine = LabelLayoutEngine::new(config.sheet, config.metrics)
        .context("configure label layout")?;
    let layout = info_span!("layout").in_scope(|| engine.layout(&outcome.records));
    ensure!(
        layout.placed_count() == outcome.eligible_count(),
        "placed {} labels for {} eligible records",
        layout.placed_count(),
        outcome.eligible_count()
    );

    // =========================================================================
    // Stage 4: Report
    // =========================================================================
    let report = QualityReport::from_records(&outcome.records, &outcome.diagnostics);
    let report_text = report.render_now();

    // =========================================================================
    // Stage 5: Outputs
    // =========================================================================
    let outputs = if config.dry_run {
        info!("dry run, no files written");
        OutputPaths::default()
    } else {
        write_outputs(config, &outcome, &layout, &report_text)?
    };

    Ok(RunResult {
        input: config.input.clone(),
        output_dir: config.output_dir.clone(),
        total: outcome.records.len(),
        eligible: outcome.eligible_count(),
        placed: layout.placed_count(),
        pages: layout.page_count,
        diagnostics: outcome.diagnostics,
        missing_fields,
        report_text,
        outputs,
        dry_run: config.dry_run,
    })
}

fn write_outputs(
    config: &RunConfig,
    outcome: &CleaningOutcome,
    layout: &LabelLayout,
    report_text: &str,
) -> Result<OutputPaths> {
    let output_span = info_span!("output", output_dir = %config.output_dir.display());
    let _output_guard = output_span.enter();
    let output_dir = &config.output_dir;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let mut paths = OutputPaths::default();
    if config.outputs.labels {
        paths.label_pages = write_svg_pages(layout, output_dir, &config.render)
            .context("write label pages")?;
        let json_path = output_dir.join(LAYOUT_JSON_FILE);
        write_layout_json(layout, &json_path).context("write layout JSON")?;
        paths.layout_json = Some(json_path);
    } else {
        debug!("label pages disabled");
    }
    if config.outputs.mail_merge {
        let mail_merge =
            write_mail_merge_csv(&outcome.records, &output_dir.join(MAIL_MERGE_FILE))
                .context("write mail-merge CSV")?;
        paths.mail_merge = Some(mail_merge);
    } else {
        debug!("mail-merge CSV disabled");
    }
    if config.outputs.report {
        let report_path = output_dir.join(REPORT_FILE);
        write_report(report_text, &report_path)?;
        paths.report = Some(report_path);
    } else {
        debug!("quality report disabled");
    }
    Ok(paths)
}
