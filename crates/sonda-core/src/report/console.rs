use super::{ExtractionSummary, InspectReport};
use crate::sidecar::SidecarSummary;

/// Render the report in the fixed block format, one block per section:
///
/// ```text
/// [noticias]
///   Artículos en cache nuevo: 12
///   Artículos en cache viejo: 20
///   Última actualización cache nuevo: 2023-11-14 16:13:20
/// ```
///
/// Timestamp lines are omitted entirely when no timestamp was found.
pub fn format_text(report: &InspectReport) -> String {
    let mut s = String::new();
    for section in &report.sections {
        s.push_str(&format!("[{}]\n", section.label));
        s.push_str(&count_line("Artículos en cache nuevo", &section.nuevo));
        s.push_str(&count_line("Artículos en cache viejo", &section.viejo));
        if let Some(dt) = &section.nuevo.local_datetime {
            s.push_str(&format!("  Última actualización cache nuevo: {}\n", dt));
        }
        if let Some(dt) = &section.viejo.local_datetime {
            s.push_str(&format!("  Última actualización cache viejo: {}\n", dt));
        }
        s.push('\n');
    }
    s
}

fn count_line(prefix: &str, summary: &ExtractionSummary) -> String {
    match summary.unique_count {
        Some(unique) => format!("  {}: {} (únicos: {})\n", prefix, summary.count, unique),
        None => format!("  {}: {}\n", prefix, summary.count),
    }
}

/// Sidecar blocks share the report shape; a missing file says so instead
/// of pretending an empty cache exists.
pub fn format_sidecar_text(summaries: &[SidecarSummary]) -> String {
    let mut s = String::new();
    for summary in summaries {
        s.push_str(&format!("[{}]\n", summary.label));
        if !summary.present {
            s.push_str("  Sin archivo de cache\n\n");
            continue;
        }
        s.push_str(&format!("  Artículos en cache: {}\n", summary.count));
        if let Some(dt) = &summary.local_datetime {
            match &summary.age {
                Some(age) => {
                    s.push_str(&format!("  Última actualización: {} (hace {})\n", dt, age));
                }
                None => s.push_str(&format!("  Última actualización: {}\n", dt)),
            }
        }
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::CacheState;
    use crate::report::SectionReport;

    fn summary(count: usize, datetime: Option<&str>) -> ExtractionSummary {
        ExtractionSummary {
            count,
            unique_count: None,
            timestamp: None,
            local_datetime: datetime.map(String::from),
            state: CacheState::Loaded,
        }
    }

    #[test]
    fn block_shape_with_timestamps() {
        let report = InspectReport {
            sections: vec![SectionReport {
                label: "noticias".into(),
                nuevo: summary(3, Some("2023-11-14 16:13:20")),
                viejo: summary(1, None),
            }],
        };
        let text = format_text(&report);
        assert_eq!(
            text,
            "[noticias]\n  Artículos en cache nuevo: 3\n  Artículos en cache viejo: 1\n  Última actualización cache nuevo: 2023-11-14 16:13:20\n\n"
        );
    }

    #[test]
    fn timestamp_lines_omitted_when_absent() {
        let report = InspectReport {
            sections: vec![SectionReport {
                label: "musica".into(),
                nuevo: summary(0, None),
                viejo: summary(0, None),
            }],
        };
        let text = format_text(&report);
        assert!(!text.contains("Última actualización"));
    }

    #[test]
    fn unique_counts_annotate_the_count_line() {
        let mut nuevo = summary(5, None);
        nuevo.unique_count = Some(4);
        let report = InspectReport {
            sections: vec![SectionReport {
                label: "farandula".into(),
                nuevo,
                viejo: summary(0, None),
            }],
        };
        assert!(format_text(&report).contains("Artículos en cache nuevo: 5 (únicos: 4)"));
    }

    #[test]
    fn absent_sidecar_block() {
        let summaries = vec![SidecarSummary {
            label: "noticias".into(),
            present: false,
            count: 0,
            timestamp: None,
            local_datetime: None,
            age: None,
        }];
        assert_eq!(
            format_sidecar_text(&summaries),
            "[noticias]\n  Sin archivo de cache\n\n"
        );
    }
}
