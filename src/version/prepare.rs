//! Version preparation for display
//!
//! Enriches raw version strings with resolved colors and node counts and
//! returns them in display order, ready for bar and legend widgets.

use indexmap::IndexMap;

use crate::nodes::types::ClusterNode;
use crate::version::keys::minor_version;
use crate::version::order::display_ordering;
use crate::version::types::{PreparedVersion, VersionMeta, VersionsDataMap};

/// Enrich a single raw version string with its resolved color entry.
///
/// The lookup goes through the canonical minor key, so hotfix and build-hash
/// variants resolve to the entry of their shared minor version. Versions
/// absent from the data map come through with no color and no indices.
pub fn prepare_version(version: &str, count: u64, data: &VersionsDataMap) -> PreparedVersion {
    let minor = minor_version(version);
    let entry = data.get(minor);
    PreparedVersion {
        version: version.to_string(),
        minor_version: minor.to_string(),
        color: entry.map(|e| e.color.clone()),
        major_index: entry.and_then(|e| e.major_index),
        minor_index: entry.and_then(|e| e.minor_index),
        count,
    }
}

/// Prepare backend version metadata for display.
///
/// Missing counts coerce to 0. The result is in display order.
pub fn prepare_versions(metas: &[VersionMeta], data: &VersionsDataMap) -> Vec<PreparedVersion> {
    let mut prepared: Vec<PreparedVersion> = metas
        .iter()
        .map(|meta| prepare_version(&meta.version, meta.count.unwrap_or(0), data))
        .collect();
    prepared.sort_by(display_ordering);
    prepared
}

/// Tally nodes per raw version string for the cluster-wide versions bar.
///
/// Each distinct raw string becomes one prepared version whose count is the
/// number of nodes reporting it; the result is in display order.
pub fn summarize_node_versions(
    nodes: &[ClusterNode],
    data: &VersionsDataMap,
) -> Vec<PreparedVersion> {
    let mut counts: IndexMap<&str, u64> = IndexMap::new();
    for node in nodes {
        *counts.entry(node.version.as_str()).or_insert(0) += 1;
    }

    let mut prepared: Vec<PreparedVersion> = counts
        .iter()
        .map(|(version, count)| prepare_version(version, *count, data))
        .collect();
    prepared.sort_by(display_ordering);
    prepared
}
