//! The single parameterized extraction routine behind every report.

use std::path::Path;

use chrono::{DateTime, Local, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::InspectError;
use crate::scan;

/// Why an extraction came back the way it did. Text reports collapse every
/// non-`Loaded` state to a zero count; JSON output keeps the distinction so
/// "no cache yet" and "corrupt cache" stay tellable apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheState {
    Loaded,
    FileMissing,
    MarkerMissing,
    SpanMissing,
    Unparsable,
}

impl CacheState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheState::Loaded => "loaded",
            CacheState::FileMissing => "file_missing",
            CacheState::MarkerMissing => "marker_missing",
            CacheState::SpanMissing => "span_missing",
            CacheState::Unparsable => "unparsable",
        }
    }
}

/// Epoch milliseconds, as the section sources store their refresh times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochMillis(pub i64);

impl EpochMillis {
    pub fn to_local(self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.0).single()
    }

    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// `%Y-%m-%d %H:%M:%S` in the local zone; `None` when the value does
    /// not map to a representable datetime.
    pub fn format_local(self) -> Option<String> {
        self.to_local()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// One cache variable pulled out of a source file.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub items: Vec<Value>,
    pub timestamp: Option<EpochMillis>,
    pub state: CacheState,
}

impl Extraction {
    fn absent(state: CacheState, timestamp: Option<EpochMillis>) -> Self {
        Extraction {
            items: Vec::new(),
            timestamp,
            state,
        }
    }
}

/// Extract the array assigned to `variable` and the first
/// `<timestamp_field>: <digits>` match from the file at `path`.
///
/// A missing file is a normal empty result. A file that exists but cannot
/// be read or decoded is a fatal [`InspectError::Io`].
pub fn extract(
    path: &Path,
    variable: &str,
    timestamp_field: &str,
) -> Result<Extraction, InspectError> {
    if !path.exists() {
        return Ok(Extraction::absent(CacheState::FileMissing, None));
    }
    let content = std::fs::read_to_string(path).map_err(|e| InspectError::io(path, e))?;

    let Some(after_eq) = scan::find_marker(&content, variable) else {
        debug!(
            path = %path.display(),
            variable,
            "cache variable not declared"
        );
        return Ok(Extraction::absent(CacheState::MarkerMissing, None));
    };
    let Some(span) = scan::bracketed_span(&content, after_eq) else {
        debug!(
            path = %path.display(),
            variable,
            "no balanced bracket span after declaration"
        );
        return Ok(Extraction::absent(CacheState::SpanMissing, None));
    };

    // The timestamp scan covers the whole file, not the variable's vicinity.
    let timestamp = find_timestamp(&content, timestamp_field);

    match serde_json::from_str::<Vec<Value>>(span) {
        Ok(items) => Ok(Extraction {
            items,
            timestamp,
            state: CacheState::Loaded,
        }),
        Err(e) => {
            debug!(
                path = %path.display(),
                variable,
                error = %e,
                "cache array span did not parse"
            );
            Ok(Extraction::absent(CacheState::Unparsable, timestamp))
        }
    }
}

/// First `<field> : <digits>` occurrence anywhere in `content`, with
/// flexible whitespace around the `:`. A digit run that overflows `i64`
/// leaves the timestamp unset.
fn find_timestamp(content: &str, field: &str) -> Option<EpochMillis> {
    let pattern = format!(r"{}\s*:\s*(\d+)", regex::escape(field));
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(content)?;
    caps.get(1)?.as_str().parse::<i64>().ok().map(EpochMillis)
}

#[cfg(test)]
mod tests {
    use super::{find_timestamp, EpochMillis};

    #[test]
    fn timestamp_whitespace_flexible() {
        assert_eq!(
            find_timestamp("timestamp: 1700000000000", "timestamp"),
            Some(EpochMillis(1700000000000))
        );
        assert_eq!(
            find_timestamp("timestamp  :1700000000000", "timestamp"),
            Some(EpochMillis(1700000000000))
        );
        assert!(find_timestamp("timestamp = 1700000000000", "timestamp").is_none());
    }

    #[test]
    fn timestamp_first_match_wins() {
        let content = "timestamp: 111\nlater { timestamp: 222 }";
        assert_eq!(find_timestamp(content, "timestamp"), Some(EpochMillis(111)));
    }

    #[test]
    fn timestamp_overflow_is_unset() {
        let content = "timestamp: 99999999999999999999999999999";
        assert!(find_timestamp(content, "timestamp").is_none());
    }

    #[test]
    fn epoch_millis_utc_date() {
        let dt = EpochMillis(1700000000000).to_utc().expect("in range");
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2023-11-14");
    }

    #[test]
    fn epoch_millis_out_of_range() {
        assert!(EpochMillis(i64::MAX).format_local().is_none());
    }
}
