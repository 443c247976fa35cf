//! Version classification, deterministic color assignment, and hierarchical
//! node grouping for cluster monitoring dashboards.
//!
//! The crate turns loosely structured version identifiers and flat node
//! lists into display-ready structures: canonical version keys, a stable
//! version-to-color map, a total display order, and a nested
//! Storage/Tenant/Other node tree for collapsible-tree widgets.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Version   │────▶│    Color    │────▶│  Prepared   │
//! │   (keys)    │     │  (engine)   │     │ (versions)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Palette   │     │    Nodes    │
//!                     │ (per theme) │     │   (tree)    │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! Every operation is a pure function of its arguments: the same inputs in
//! any order produce identical maps and trees, and each call builds its
//! result from scratch.
//!
//! # Modules
//!
//! - [`version`]: Canonical keys, ordering hash, display order, preparation
//! - [`color`]: Palettes, color group strategies and the assignment engine
//! - [`nodes`]: Storage/Tenant/Other partition and tree building

pub mod color;
pub mod nodes;
pub mod version;

pub use color::{
    ColorGroup, ColorGroupStrategy, ExplicitColorGroups, MajorVersionGroups, Palette, Theme,
    ThemeParseError, assign_version_colors, version_to_color_map,
};
pub use nodes::{
    ClusterNode, GroupedNodes, GroupedNodesItem, TenantGrouping, VersionValue, group_cluster_nodes,
    grouped_other_nodes, grouped_storage_nodes, grouped_tenant_nodes,
};
pub use version::{
    PreparedVersion, VersionColorEntry, VersionMeta, VersionToColorMap, VersionsDataMap,
    display_ordering, major_version, minor_version, prepare_version, prepare_versions,
    sort_versions, string_hash, summarize_node_versions,
};
