pub mod console;
pub mod json;

use serde::Serialize;

use crate::dedup;
use crate::errors::InspectError;
use crate::extract::{extract, CacheState, EpochMillis, Extraction};
use crate::targets::Target;

/// One variable extraction, reduced to what the report renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionSummary {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<EpochMillis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_datetime: Option<String>,
    pub state: CacheState,
}

impl ExtractionSummary {
    pub fn from_extraction(extraction: &Extraction, dedup: bool) -> Self {
        ExtractionSummary {
            count: extraction.items.len(),
            unique_count: dedup.then(|| dedup::unique_count(&extraction.items)),
            timestamp: extraction.timestamp,
            local_datetime: extraction.timestamp.and_then(EpochMillis::format_local),
            state: extraction.state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub label: String,
    pub nuevo: ExtractionSummary,
    pub viejo: ExtractionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub sections: Vec<SectionReport>,
}

/// Walk the targets in order, extracting the new and old cache variables
/// from each. No state carries across sections.
pub fn inspect(targets: &[Target], dedup: bool) -> Result<InspectReport, InspectError> {
    let mut sections = Vec::with_capacity(targets.len());
    for target in targets {
        let nuevo = extract(&target.path, &target.new_var, &target.timestamp_field)?;
        let viejo = extract(&target.path, &target.old_var, &target.timestamp_field)?;
        sections.push(SectionReport {
            label: target.label.clone(),
            nuevo: ExtractionSummary::from_extraction(&nuevo, dedup),
            viejo: ExtractionSummary::from_extraction(&viejo, dedup),
        });
    }
    Ok(InspectReport { sections })
}
