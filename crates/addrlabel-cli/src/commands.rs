use anyhow::Result;

use addrlabel_cli::pipeline::{self, RunConfig};
use addrlabel_cli::types::{CheckResult, OutputSelection, RunResult};
use addrlabel_ingest::IngestOptions;
use addrlabel_model::{CleanOptions, LabelMetrics, LabelSheet};
use addrlabel_output::{RenderOptions, TextDirection};

use crate::cli::{CheckArgs, LayoutArg, RunArgs, TEST_MODE_LIMIT};

pub fn run_labels(args: &RunArgs) -> Result<RunResult> {
    let config = run_config(args);
    pipeline::run(&config)
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let ingest = IngestOptions::default().with_sheet(args.sheet.clone());
    pipeline::check(&args.input, &ingest)
}

fn run_config(args: &RunArgs) -> RunConfig {
    let limit = if args.test {
        Some(TEST_MODE_LIMIT)
    } else {
        args.limit
    };
    let sheet = match args.layout {
        LayoutArg::A4 => LabelSheet::a4_ten_up(),
        LayoutArg::Hagaki => LabelSheet::hagaki(),
    };
    let mut render = RenderOptions::default()
        .with_cell_borders(args.cell_borders)
        .with_direction(if args.vertical {
            TextDirection::Vertical
        } else {
            TextDirection::Horizontal
        });
    if let Some(font) = &args.font {
        render = render.with_font_family(font.clone());
    }

    let mut config = RunConfig::new(args.input.clone());
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    config.ingest = IngestOptions::default()
        .with_sheet(args.sheet.clone())
        .with_limit(limit);
    config.clean = CleanOptions::default().with_honorific(args.honorific.clone());
    config.sheet = sheet;
    config.metrics = LabelMetrics::default().with_max_chars_per_line(args.max_chars);
    config.render = render;
    config.outputs = OutputSelection {
        labels: !args.no_svg,
        mail_merge: !args.no_csv,
        report: !args.no_report,
    };
    config.dry_run = args.dry_run;
    config
}
