use serde::Serialize;

/// Serialize any report value with an injected `generated_at` stamp.
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(report)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "generated_at".to_string(),
            serde_json::json!(chrono::Utc::now().to_rfc3339()),
        );
    }
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::to_json;
    use crate::report::InspectReport;

    #[test]
    fn json_carries_generated_at() {
        let report = InspectReport { sections: vec![] };
        let out = to_json(&report).expect("serialize");
        assert!(out.contains("\"generated_at\""));
        assert!(out.contains("\"sections\""));
    }
}
