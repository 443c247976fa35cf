//! Common types for node grouping

use serde::{Deserialize, Serialize};

/// One cluster node as reported by the backend node list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNode {
    /// Node identifier
    pub id: u32,
    /// Raw version string the node is running
    #[serde(default)]
    pub version: String,
    /// Roles the node carries, e.g. "Storage"
    #[serde(default)]
    pub roles: Vec<String>,
    /// Tenant database paths the node serves
    #[serde(default)]
    pub tenants: Vec<String>,
}

/// Per-version share of one bucket, for inline distribution bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionValue {
    /// Raw version string
    pub version: String,
    /// Percentage share of the bucket, 0 to 100
    pub value: f64,
    /// Resolved color of the version, if colored
    pub color: Option<String>,
}

/// One item of the collapsible node tree
///
/// Leaves hold nodes directly; branches nest further items. The distinction
/// lives in the type, not in a field convention, and the JSON shapes stay
/// distinguishable by their fields alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupedNodesItem {
    /// Terminal bucket of nodes
    #[serde(rename_all = "camelCase")]
    Leaf {
        /// Display title, a version or a tenant key
        title: String,
        /// Nodes in this bucket
        nodes: Vec<ClusterNode>,
        /// Resolved color of the bucket's version, if any
        version_color: Option<String>,
    },
    /// Nested grouping level
    #[serde(rename_all = "camelCase")]
    Branch {
        /// Display title, a version or a tenant key
        title: String,
        /// Nested items
        items: Vec<GroupedNodesItem>,
        /// Per-version share breakdown of this bucket, if requested
        versions_values: Option<Vec<VersionValue>>,
    },
}

/// The three top-level sections of the grouped node tree
///
/// `None` marks a section with no nodes, to be omitted from the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedNodes {
    pub storage: Option<Vec<GroupedNodesItem>>,
    pub tenant: Option<Vec<GroupedNodesItem>>,
    pub other: Option<Vec<GroupedNodesItem>>,
}
