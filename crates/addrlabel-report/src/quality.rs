use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::info;

use addrlabel_model::{CleanedRecord, Diagnostics};

pub const REPORT_TITLE: &str = "ハガキ宛名印刷 データ品質レポート";

/// Format of the generation timestamp line.
pub const TIMESTAMP_FORMAT: &str = "%Y年%m月%d日 %H:%M:%S";

const RULE_WIDTH: usize = 70;

/// Record counts for one priority value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: u32,
    pub total: usize,
    pub eligible: usize,
}

/// Aggregated quality figures for one cleaned batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub total: usize,
    pub eligible: usize,
    pub diagnostics: Diagnostics,
    /// Ascending by priority. Records without a priority are not listed.
    pub priorities: Vec<PriorityCount>,
    pub missing_postal: usize,
    pub foreign: usize,
    pub duplicate: usize,
}

impl QualityReport {
    pub fn from_records(records: &[CleanedRecord], diagnostics: &Diagnostics) -> Self {
        let mut by_priority: BTreeMap<u32, PriorityCount> = BTreeMap::new();
        for record in records {
            let Some(priority) = record.priority() else {
                continue;
            };
            let entry = by_priority.entry(priority).or_insert(PriorityCount {
                priority,
                total: 0,
                eligible: 0,
            });
            entry.total += 1;
            if record.is_eligible() {
                entry.eligible += 1;
            }
        }

        Self {
            total: records.len(),
            eligible: records.iter().filter(|r| r.is_eligible()).count(),
            diagnostics: diagnostics.clone(),
            priorities: by_priority.into_values().collect(),
            missing_postal: records.iter().filter(|r| r.postal_code.is_none()).count(),
            foreign: records.iter().filter(|r| r.is_foreign).count(),
            duplicate: records.iter().filter(|r| r.is_duplicate_address).count(),
        }
    }

    pub fn excluded(&self) -> usize {
        self.total - self.eligible
    }

    /// One label is produced per eligible record.
    pub fn labels_produced(&self) -> usize {
        self.eligible
    }

    /// Percentage of the batch; 0.0 for an empty batch.
    pub fn rate(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.rate(self.labels_produced())
    }

    /// Render the report, stamped with `generated_at`.
    pub fn render(&self, generated_at: &NaiveDateTime) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            REPORT_TITLE.to_string(),
            rule.clone(),
            String::new(),
            format!("生成日時: {}", generated_at.format(TIMESTAMP_FORMAT)),
            String::new(),
            format!("【総件数】: {}件", self.total),
            String::new(),
            format!("【有効件数】: {}件", self.eligible),
            String::new(),
            format!("【除外件数】: {}件", self.excluded()),
            String::new(),
        ];

        if !self.diagnostics.is_empty() {
            lines.push("【エラー・警告内容】:".to_string());
            lines.extend(self.diagnostics.iter().map(|d| format!("  - {d}")));
            lines.push(String::new());
        }

        if !self.priorities.is_empty() {
            lines.push("【優先度別の件数】:".to_string());
            lines.extend(self.priorities.iter().map(|entry| {
                format!(
                    "  優先順位{}: {}件 （有効: {}件）",
                    entry.priority, entry.total, entry.eligible
                )
            }));
            lines.push(String::new());
        }

        lines.extend([
            "【データ品質サマリー】:".to_string(),
            format!("  郵便番号欠損率: {:.1}%", self.rate(self.missing_postal)),
            format!("  国外住所率: {:.1}%", self.rate(self.foreign)),
            format!("  重複住所率: {:.1}%", self.rate(self.duplicate)),
            String::new(),
            "【処理結果サマリー】:".to_string(),
            format!("  宛名ラベル生成数: {}枚", self.labels_produced()),
            format!("  成功率: {:.1}%", self.success_rate()),
            String::new(),
            rule.clone(),
            "処理完了".to_string(),
            rule,
        ]);

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Render the report stamped with the current local time.
    pub fn render_now(&self) -> String {
        self.render(&Local::now().naive_local())
    }
}

/// Write rendered report text as UTF-8.
pub fn write_report(text: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote quality report");
    Ok(())
}
