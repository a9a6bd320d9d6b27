use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{Result, TrendError};
use crate::models::{RawRecord, Record};

/// Share of unavailable videos above which a corpus is reported as suspect
pub const UNAVAILABLE_WARN_FRACTION: f64 = 0.25;

/// Configuration for Stage 0 normalization
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Number of leading characters to cut from every title ("Watched")
    pub title_prefix_len: usize,
    /// Prefix-stripped titles starting with this are unavailable videos
    pub unavailable_prefix: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            title_prefix_len: 7,
            unavailable_prefix: "https://www.youtube.com".to_string(),
        }
    }
}

/// Result of Stage 0 normalization
#[derive(Debug)]
pub struct NormalizationResult {
    /// Surviving records in input order
    pub records: Vec<Record>,
    /// Number of raw records seen
    pub total_records: usize,
    /// Records dropped because the video is no longer available
    pub unavailable_dropped: usize,
}

impl NormalizationResult {
    /// Fraction of the raw corpus that pointed at unavailable videos
    pub fn unavailable_fraction(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            self.unavailable_dropped as f64 / self.total_records as f64
        }
    }
}

/// Perform Stage 0: clean raw history rows into records
///
/// Any malformed row aborts the whole run.
pub fn normalize_corpus(raw: &[RawRecord], config: &NormalizeConfig) -> Result<NormalizationResult> {
    let mut records = Vec::with_capacity(raw.len());
    let mut unavailable_dropped = 0;

    for (index, row) in raw.iter().enumerate() {
        match normalize_record(row, index, config)? {
            Some(record) => records.push(record),
            None => unavailable_dropped += 1,
        }
    }

    info!(
        "Normalized {} records ({} unavailable dropped)",
        records.len(),
        unavailable_dropped
    );

    let result = NormalizationResult {
        records,
        total_records: raw.len(),
        unavailable_dropped,
    };
    if result.unavailable_fraction() > UNAVAILABLE_WARN_FRACTION {
        warn!(
            "{:.1}% of the history points at unavailable videos",
            result.unavailable_fraction() * 100.0
        );
    }

    Ok(result)
}

/// Normalize a single row; `Ok(None)` means the row was an unavailable video
pub fn normalize_record(
    raw: &RawRecord,
    index: usize,
    config: &NormalizeConfig,
) -> Result<Option<Record>> {
    let title = raw
        .title
        .as_deref()
        .ok_or_else(|| TrendError::malformed(index, "missing title"))?;

    let stripped = strip_marker(title, config.title_prefix_len);
    // the marker is followed by a space, so the sentinel is tested after it
    if stripped.trim_start().starts_with(&config.unavailable_prefix) {
        debug!("Dropping unavailable video at index {}", index);
        return Ok(None);
    }

    let time = raw
        .time
        .as_deref()
        .ok_or_else(|| TrendError::malformed(index, "missing timestamp"))?;
    let date = parse_watch_date(time)
        .ok_or_else(|| TrendError::malformed(index, format!("unparsable timestamp {:?}", time)))?;

    Ok(Some(Record::new(clean_title(stripped), date)))
}

/// Lowercase, drop ASCII punctuation, then trim
///
/// Applying this twice gives the same result as applying it once.
pub fn clean_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parse the date part (before `T`) of an ISO-8601 timestamp
pub fn parse_watch_date(timestamp: &str) -> Option<NaiveDate> {
    let date_part = timestamp.split('T').next()?;
    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
}

/// Cut the leading marker by character count
fn strip_marker(title: &str, prefix_len: usize) -> &str {
    match title.char_indices().nth(prefix_len) {
        Some((byte_idx, _)) => &title[byte_idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_record() {
        let raw = RawRecord::new("Watched Glass Animals - Gooey (Official Video)", "2019-04-12T18:03:22.123Z");
        let record = normalize_record(&raw, 0, &NormalizeConfig::default())
            .unwrap()
            .unwrap();

        assert_eq!(record.title, "glass animals  gooey official video");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2019, 4, 12).unwrap());
        assert!(record.unigrams.is_empty());
    }

    #[test]
    fn test_clean_title_idempotent() {
        for title in ["  Cat Video!! ", "abc !", "Don't Stop (Live) ", "", "..."] {
            let once = clean_title(title);
            assert_eq!(clean_title(&once), once);
        }
    }

    #[test]
    fn test_unavailable_video_dropped() {
        let raw = vec![
            RawRecord::new("Watched https://www.youtube.com/watch?v=rG5tV7zcl1s", "2020-01-01T00:00:00Z"),
            RawRecord::new("Watched Cat Video", "2020-01-02T00:00:00Z"),
        ];

        let result = normalize_corpus(&raw, &NormalizeConfig::default()).unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.unavailable_dropped, 1);
        assert_eq!(result.unavailable_fraction(), 0.5);
    }

    #[test]
    fn test_takeout_unavailable_title_dropped() {
        let raw = RawRecord::new(
            "Watched https://www.youtube.com/watch?v=rG5tV7zcl1s",
            "2020-01-01T00:00:00Z",
        );
        let record = normalize_record(&raw, 0, &NormalizeConfig::default()).unwrap();
        assert!(record.is_none());
    }

    #[test]
    fn test_unavailable_row_skips_timestamp_check() {
        let raw = RawRecord {
            title: Some("Watched https://www.youtube.com/watch?v=x".to_string()),
            time: None,
        };
        assert!(normalize_record(&raw, 0, &NormalizeConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_all_unavailable_corpus() {
        let raw = vec![
            RawRecord::new("Watched https://www.youtube.com/watch?v=a", "2020-01-01T00:00:00Z"),
            RawRecord::new("Watched https://www.youtube.com/watch?v=b", "2020-01-02T00:00:00Z"),
        ];

        let result = normalize_corpus(&raw, &NormalizeConfig::default()).unwrap();

        assert!(result.records.is_empty());
        assert_eq!(result.unavailable_fraction(), 1.0);
        assert!(result.unavailable_fraction() > UNAVAILABLE_WARN_FRACTION);
    }

    #[test]
    fn test_url_inside_title_is_kept() {
        let raw = RawRecord::new("Watched Review of https://www.youtube.com", "2020-01-02");
        assert!(normalize_record(&raw, 0, &NormalizeConfig::default()).unwrap().is_some());
    }

    #[test]
    fn test_empty_title_passes_through() {
        let raw = RawRecord::new("Watched", "2020-01-02T10:00:00Z");
        let record = normalize_record(&raw, 0, &NormalizeConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(record.title, "");
    }

    #[test]
    fn test_prefix_is_cut_by_characters() {
        let raw = RawRecord::new("Visto ¡Niño!", "2020-01-02");
        let record = normalize_record(&raw, 0, &NormalizeConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(record.title, "niño");
    }

    #[test]
    fn test_malformed_timestamp_is_fatal() {
        let raw = vec![
            RawRecord::new("Watched Cat Video", "2020-01-02T00:00:00Z"),
            RawRecord::new("Watched Dog Video", "yesterday"),
        ];

        let err = normalize_corpus(&raw, &NormalizeConfig::default()).unwrap_err();

        assert!(matches!(err, TrendError::MalformedRecord { index: 1, .. }));
    }

    #[test]
    fn test_missing_title_is_fatal() {
        let raw = RawRecord {
            title: None,
            time: Some("2020-01-02T00:00:00Z".to_string()),
        };
        let err = normalize_record(&raw, 3, &NormalizeConfig::default()).unwrap_err();
        assert!(matches!(err, TrendError::MalformedRecord { index: 3, .. }));
    }

    #[test]
    fn test_parse_watch_date_discards_time() {
        assert_eq!(
            parse_watch_date("2018-11-30T23:59:59.999Z"),
            NaiveDate::from_ymd_opt(2018, 11, 30)
        );
        assert_eq!(parse_watch_date("not a date"), None);
    }
}
