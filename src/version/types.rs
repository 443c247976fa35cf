//! Common types for version classification and coloring

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One version record from the backend version metadata endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMeta {
    /// Raw version identifier, e.g. "stable-19-2-18.bfa368f"
    pub version: String,
    /// Node count reported for this version, if any
    pub count: Option<u64>,
    /// Explicit color group index supplied by upstream metadata
    pub color_group_id: Option<usize>,
}

/// Resolved visual identity of one minor version key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionColorEntry {
    /// Assigned color, e.g. "#2196f3"
    pub color: String,
    /// Hue row in the palette table, absent for default-colored versions
    pub major_index: Option<usize>,
    /// Position within the color group, selects the shade
    pub minor_index: Option<usize>,
}

/// Minor version key to resolved color entry, in deterministic assignment order
pub type VersionsDataMap = IndexMap<String, VersionColorEntry>;

/// Minor version key to color only, for legend widgets
pub type VersionToColorMap = IndexMap<String, String>;

/// A version enriched with its resolved color and a node count for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedVersion {
    /// Raw version string as reported by the backend
    pub version: String,
    /// Canonical minor version key
    pub minor_version: String,
    /// Resolved color, if the version took part in a coloring pass
    pub color: Option<String>,
    /// Hue row of the resolved color, if any
    pub major_index: Option<usize>,
    /// Position within its color group, if any
    pub minor_index: Option<usize>,
    /// Number of nodes running this version
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn version_meta_defaults_missing_optional_fields() {
        let meta = serde_json::from_value::<VersionMeta>(json!({
            "version": "stable-19-2-18.bfa368f"
        }))
        .unwrap();

        assert_eq!(meta.version, "stable-19-2-18.bfa368f");
        assert_eq!(meta.count, None);
        assert_eq!(meta.color_group_id, None);
    }

    #[test]
    fn version_meta_reads_camel_case_keys() {
        let meta = serde_json::from_value::<VersionMeta>(json!({
            "version": "25-1-1.a1b2c3",
            "count": 4,
            "colorGroupId": 2
        }))
        .unwrap();

        assert_eq!(meta.count, Some(4));
        assert_eq!(meta.color_group_id, Some(2));
    }

    #[test]
    fn prepared_version_serializes_with_camel_case_keys() {
        let prepared = PreparedVersion {
            version: "stable-19-2-18.bfa368f".to_string(),
            minor_version: "stable-19-2-18".to_string(),
            color: Some("#2196f3".to_string()),
            major_index: Some(0),
            minor_index: Some(1),
            count: 3,
        };

        let value = serde_json::to_value(&prepared).unwrap();
        assert_eq!(
            value,
            json!({
                "version": "stable-19-2-18.bfa368f",
                "minorVersion": "stable-19-2-18",
                "color": "#2196f3",
                "majorIndex": 0,
                "minorIndex": 1,
                "count": 3
            })
        );
    }
}
