use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, TrendError};
use crate::models::{AggregatedEntry, MergeLedger};
use crate::pipeline::{RunStats, TrendReport};

/// Divisor turning a keyword's frequency into a plot label size
pub const ZOOM_FACTOR: f64 = 3.5;

/// Machine-readable output: the keyword series for a plotting front end
#[derive(Debug, Clone, Serialize)]
pub struct KeywordReport {
    pub keywords: Vec<AggregatedEntry>,
    pub merges: MergeLedger,
    pub metadata: RunMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub keyword_count: usize,
    #[serde(flatten)]
    pub stats: RunStats,
}

impl KeywordReport {
    pub fn from_report(report: &TrendReport) -> Self {
        Self {
            keywords: report.entries.clone(),
            merges: report.ledger.clone(),
            metadata: RunMetadata {
                keyword_count: report.entries.len(),
                stats: report.stats.clone(),
            },
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| TrendError::io(path, e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Plain-text keyword table
pub struct HumanReport<'a> {
    entries: &'a [AggregatedEntry],
}

impl<'a> HumanReport<'a> {
    pub fn new(entries: &'a [AggregatedEntry]) -> Self {
        Self { entries }
    }

    /// One line per keyword: date, frequency, label size, upper-cased keyword
    pub fn format(&self) -> String {
        let mut output = String::new();
        output.push_str("avg_date    freq  size  keyword\n");

        for entry in self.entries {
            output.push_str(&format!(
                "{}  {:>4}  {:>4}  {}\n",
                entry.avg_date.format("%Y-%m-%d"),
                entry.frequency,
                label_size(entry.frequency),
                entry.keyword.to_uppercase()
            ));
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path).map_err(|e| TrendError::io(path, e))?;
        write!(file, "{}", self.format()).map_err(|e| TrendError::io(path, e))?;
        Ok(())
    }
}

/// Floor of `frequency / ZOOM_FACTOR`
pub fn label_size(frequency: usize) -> u64 {
    (frequency as f64 / ZOOM_FACTOR).floor() as u64
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn entries() -> Vec<AggregatedEntry> {
        vec![
            AggregatedEntry {
                keyword: "glass animals".to_string(),
                avg_date: NaiveDate::from_ymd_opt(2019, 4, 12).unwrap(),
                frequency: 40,
            },
            AggregatedEntry {
                keyword: "chess".to_string(),
                avg_date: NaiveDate::from_ymd_opt(2020, 11, 3).unwrap(),
                frequency: 7,
            },
        ]
    }

    #[test]
    fn test_label_size() {
        assert_eq!(label_size(3), 0);
        assert_eq!(label_size(7), 2);
        assert_eq!(label_size(40), 11);
    }

    #[test]
    fn test_human_format() {
        let entries = entries();
        let text = HumanReport::new(&entries).format();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2019-04-12    40    11  GLASS ANIMALS");
        assert!(lines[2].ends_with("CHESS"));
    }

    #[test]
    fn test_write_json() {
        let report = TrendReport {
            entries: entries(),
            ledger: MergeLedger::default(),
            stats: RunStats {
                total_records: 50,
                ..Default::default()
            },
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        KeywordReport::from_report(&report).write_json(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["keywords"][0]["keyword"], "glass animals");
        assert_eq!(written["metadata"]["keyword_count"], 2);
        assert_eq!(written["metadata"]["total_records"], 50);
    }
}
