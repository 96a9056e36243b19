//! On-disk cache sidecars (`<label>-cache.json`).
//!
//! When a section persists its cache to disk, the file carries the same
//! shape the in-memory cache has: an array under `noticias` plus a numeric
//! refresh timestamp. The loader mirrors the serving side: anything it
//! cannot read or parse yields `None`, logged at debug only.

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::extract::EpochMillis;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SidecarCache {
    pub noticias: Vec<Value>,
    #[serde(default)]
    pub timestamp: Option<EpochMillis>,
}

pub fn sidecar_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("{label}-cache.json"))
}

pub fn load_sidecar(dir: &Path, label: &str) -> Option<SidecarCache> {
    let file = sidecar_path(dir, label);
    if !file.exists() {
        return None;
    }
    let content = match std::fs::read_to_string(&file) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %file.display(), error = %e, "cannot read cache sidecar");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(cache) => Some(cache),
        Err(e) => {
            debug!(path = %file.display(), error = %e, "cache sidecar did not parse");
            None
        }
    }
}

/// Per-section sidecar summary, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SidecarSummary {
    pub label: String,
    pub present: bool,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<EpochMillis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
}

/// Wrapper so JSON output gets an object root (and a `generated_at` stamp).
#[derive(Debug, Clone, Serialize)]
pub struct SidecarReport {
    pub sections: Vec<SidecarSummary>,
}

pub fn summarize(dir: &Path, labels: &[String]) -> Vec<SidecarSummary> {
    labels
        .iter()
        .map(|label| match load_sidecar(dir, label) {
            Some(cache) => {
                let now_ms = Local::now().timestamp_millis();
                SidecarSummary {
                    label: label.clone(),
                    present: true,
                    count: cache.noticias.len(),
                    timestamp: cache.timestamp,
                    local_datetime: cache.timestamp.and_then(EpochMillis::format_local),
                    age: cache.timestamp.map(|t| format_age(now_ms - t.0)),
                }
            }
            None => SidecarSummary {
                label: label.clone(),
                present: false,
                count: 0,
                timestamp: None,
                local_datetime: None,
                age: None,
            },
        })
        .collect()
}

/// Compact age rendering for report lines: "45 s", "5 min", "2 h 10 min",
/// "3 d 4 h". Future timestamps clamp to zero.
pub fn format_age(ms: i64) -> String {
    let secs = ms.max(0) / 1000;
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    if days > 0 {
        format!("{} d {} h", days, hours % 24)
    } else if hours > 0 {
        format!("{} h {} min", hours, mins % 60)
    } else if mins > 0 {
        format!("{} min", mins)
    } else {
        format!("{} s", secs)
    }
}
