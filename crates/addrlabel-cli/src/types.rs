use std::path::PathBuf;

use addrlabel_clean::MissingField;
use addrlabel_model::Diagnostics;
use addrlabel_output::MailMergeOutcome;

/// Which artifacts a run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSelection {
    /// SVG pages plus the placement JSON.
    pub labels: bool,
    pub mail_merge: bool,
    pub report: bool,
}

impl Default for OutputSelection {
    fn default() -> Self {
        Self {
            labels: true,
            mail_merge: true,
            report: true,
        }
    }
}

/// Files written by a run.
#[derive(Debug, Default)]
pub struct OutputPaths {
    pub label_pages: Vec<PathBuf>,
    pub layout_json: Option<PathBuf>,
    pub mail_merge: Option<MailMergeOutcome>,
    pub report: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub total: usize,
    pub eligible: usize,
    pub placed: usize,
    pub pages: usize,
    pub diagnostics: Diagnostics,
    pub missing_fields: Vec<MissingField>,
    pub report_text: String,
    pub outputs: OutputPaths,
    pub dry_run: bool,
}

impl RunResult {
    pub fn excluded(&self) -> usize {
        self.total - self.eligible
    }
}

#[derive(Debug)]
pub struct CheckResult {
    pub input: PathBuf,
    pub total: usize,
    pub eligible: usize,
    pub diagnostics: Diagnostics,
    pub missing_fields: Vec<MissingField>,
}
