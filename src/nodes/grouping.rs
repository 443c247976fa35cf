//! Hierarchical node grouping engine
//!
//! Partitions a flat node list into the three top-level sections of the
//! cluster tree (Storage, Tenant, Other) and groups each section by version
//! or tenant, annotated with resolved version colors. Every input node lands
//! in exactly one leaf; empty sections are omitted rather than emitted empty.

use indexmap::IndexMap;
use tracing::debug;

use crate::nodes::types::{ClusterNode, GroupedNodes, GroupedNodesItem, VersionValue};
use crate::version::order::display_ordering;
use crate::version::prepare::prepare_version;
use crate::version::types::{PreparedVersion, VersionsDataMap};

/// Role marking a node as part of the storage layer
const STORAGE_ROLE: &str = "Storage";

/// Grouping axis for the tenant section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantGrouping {
    /// Top-level buckets by version, nested buckets by tenant
    VersionFirst,
    /// Top-level buckets by tenant with per-version share breakdowns,
    /// nested buckets by version
    TenantFirst,
}

fn is_storage(node: &ClusterNode) -> bool {
    node.roles.iter().any(|role| role == STORAGE_ROLE)
}

/// Grouping key for a node's literal tenants value.
///
/// A node serving several tenants stays in one combined bucket keyed by the
/// joined value; it is not exploded into one bucket per tenant.
fn tenant_key(node: &ClusterNode) -> String {
    node.tenants.join(",")
}

/// Group nodes by raw version string, returning the buckets in display
/// order. Bucket counts are the number of member nodes.
fn version_buckets<'a>(
    nodes: &[&'a ClusterNode],
    data: &VersionsDataMap,
) -> Vec<(PreparedVersion, Vec<&'a ClusterNode>)> {
    let mut buckets: IndexMap<&str, Vec<&ClusterNode>> = IndexMap::new();
    for &node in nodes {
        buckets.entry(node.version.as_str()).or_default().push(node);
    }

    let mut grouped: Vec<(PreparedVersion, Vec<&ClusterNode>)> = buckets
        .into_iter()
        .map(|(version, members)| (prepare_version(version, members.len() as u64, data), members))
        .collect();
    grouped.sort_by(|a, b| display_ordering(&a.0, &b.0));
    grouped
}

fn version_leaves(nodes: &[&ClusterNode], data: &VersionsDataMap) -> Vec<GroupedNodesItem> {
    version_buckets(nodes, data)
        .into_iter()
        .map(|(version, members)| GroupedNodesItem::Leaf {
            title: version.version,
            nodes: members.into_iter().cloned().collect(),
            version_color: version.color,
        })
        .collect()
}

/// Version branches with nested tenant leaves, tenants sorted
/// lexicographically within each version.
fn version_then_tenant(nodes: &[&ClusterNode], data: &VersionsDataMap) -> Vec<GroupedNodesItem> {
    version_buckets(nodes, data)
        .into_iter()
        .map(|(version, members)| {
            let mut tenants: IndexMap<String, Vec<&ClusterNode>> = IndexMap::new();
            for &node in &members {
                tenants.entry(tenant_key(node)).or_default().push(node);
            }
            tenants.sort_keys();

            let items = tenants
                .into_iter()
                .map(|(title, tenant_members)| GroupedNodesItem::Leaf {
                    title,
                    nodes: tenant_members.into_iter().cloned().collect(),
                    version_color: version.color.clone(),
                })
                .collect();

            GroupedNodesItem::Branch {
                title: version.version,
                items,
                versions_values: None,
            }
        })
        .collect()
}

/// Tenant branches with nested version leaves; each branch carries the
/// per-version share of its nodes for inline distribution bars.
fn tenant_then_version(nodes: &[&ClusterNode], data: &VersionsDataMap) -> Vec<GroupedNodesItem> {
    let mut tenants: IndexMap<String, Vec<&ClusterNode>> = IndexMap::new();
    for &node in nodes {
        tenants.entry(tenant_key(node)).or_default().push(node);
    }
    tenants.sort_keys();

    tenants
        .into_iter()
        .map(|(title, members)| {
            let total = members.len();
            let buckets = version_buckets(&members, data);

            let versions_values = buckets
                .iter()
                .map(|(version, _)| VersionValue {
                    version: version.version.clone(),
                    value: version.count as f64 * 100.0 / total as f64,
                    color: version.color.clone(),
                })
                .collect();

            let items = buckets
                .into_iter()
                .map(|(version, version_members)| GroupedNodesItem::Leaf {
                    title: version.version,
                    nodes: version_members.into_iter().cloned().collect(),
                    version_color: version.color,
                })
                .collect();

            GroupedNodesItem::Branch {
                title,
                items,
                versions_values: Some(versions_values),
            }
        })
        .collect()
}

/// Group the storage section by version.
///
/// Returns `None` when no node carries the storage role, signaling that the
/// section should be omitted.
pub fn grouped_storage_nodes(
    nodes: &[ClusterNode],
    data: &VersionsDataMap,
) -> Option<Vec<GroupedNodesItem>> {
    let storage: Vec<&ClusterNode> = nodes.iter().filter(|node| is_storage(node)).collect();
    if storage.is_empty() {
        return None;
    }
    Some(version_leaves(&storage, data))
}

/// Group tenant-serving nodes along the requested axis.
///
/// A node belongs here when it is not storage and serves at least one
/// tenant. Returns `None` when no node qualifies.
pub fn grouped_tenant_nodes(
    nodes: &[ClusterNode],
    data: &VersionsDataMap,
    grouping: TenantGrouping,
) -> Option<Vec<GroupedNodesItem>> {
    let tenant_nodes: Vec<&ClusterNode> = nodes
        .iter()
        .filter(|node| !is_storage(node) && !node.tenants.is_empty())
        .collect();
    if tenant_nodes.is_empty() {
        return None;
    }
    let items = match grouping {
        TenantGrouping::VersionFirst => version_then_tenant(&tenant_nodes, data),
        TenantGrouping::TenantFirst => tenant_then_version(&tenant_nodes, data),
    };
    Some(items)
}

/// Group the non-storage, non-tenant remainder by version.
pub fn grouped_other_nodes(
    nodes: &[ClusterNode],
    data: &VersionsDataMap,
) -> Option<Vec<GroupedNodesItem>> {
    let other: Vec<&ClusterNode> = nodes
        .iter()
        .filter(|node| !is_storage(node) && node.tenants.is_empty())
        .collect();
    if other.is_empty() {
        return None;
    }
    Some(version_leaves(&other, data))
}

/// Build all three sections of the grouped node tree in one pass.
pub fn group_cluster_nodes(
    nodes: &[ClusterNode],
    data: &VersionsDataMap,
    grouping: TenantGrouping,
) -> GroupedNodes {
    let grouped = GroupedNodes {
        storage: grouped_storage_nodes(nodes, data),
        tenant: grouped_tenant_nodes(nodes, data, grouping),
        other: grouped_other_nodes(nodes, data),
    };

    let storage_count = nodes.iter().filter(|node| is_storage(node)).count();
    let tenant_count = nodes
        .iter()
        .filter(|node| !is_storage(node) && !node.tenants.is_empty())
        .count();
    debug!(
        "Partitioned {} nodes: {} storage, {} tenant, {} other",
        nodes.len(),
        storage_count,
        tenant_count,
        nodes.len() - storage_count - tenant_count
    );

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::types::VersionColorEntry;

    fn node(id: u32, version: &str, roles: &[&str], tenants: &[&str]) -> ClusterNode {
        ClusterNode {
            id,
            version: version.to_string(),
            roles: roles.iter().map(|s| s.to_string()).collect(),
            tenants: tenants.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn colored_data(entries: &[(&str, &str, usize, usize)]) -> VersionsDataMap {
        entries
            .iter()
            .map(|(version, color, major, minor)| {
                (
                    version.to_string(),
                    VersionColorEntry {
                        color: color.to_string(),
                        major_index: Some(*major),
                        minor_index: Some(*minor),
                    },
                )
            })
            .collect()
    }

    fn titles(items: &[GroupedNodesItem]) -> Vec<&str> {
        items
            .iter()
            .map(|item| match item {
                GroupedNodesItem::Leaf { title, .. } | GroupedNodesItem::Branch { title, .. } => {
                    title.as_str()
                }
            })
            .collect()
    }

    fn collect_ids(items: &[GroupedNodesItem], ids: &mut Vec<u32>) {
        for item in items {
            match item {
                GroupedNodesItem::Leaf { nodes, .. } => {
                    ids.extend(nodes.iter().map(|node| node.id));
                }
                GroupedNodesItem::Branch { items, .. } => collect_ids(items, ids),
            }
        }
    }

    fn section_ids(section: Option<&[GroupedNodesItem]>) -> Vec<u32> {
        let mut ids = Vec::new();
        if let Some(items) = section {
            collect_ids(items, &mut ids);
        }
        ids
    }

    #[test]
    fn nodes_partition_into_storage_tenant_other() {
        let nodes = vec![
            node(1, "", &["Storage"], &[]),
            node(2, "", &[], &["/Root/db1"]),
            node(3, "", &[], &[]),
        ];

        let grouped =
            group_cluster_nodes(&nodes, &VersionsDataMap::new(), TenantGrouping::VersionFirst);

        assert_eq!(section_ids(grouped.storage.as_deref()), vec![1]);
        assert_eq!(section_ids(grouped.tenant.as_deref()), vec![2]);
        assert_eq!(section_ids(grouped.other.as_deref()), vec![3]);

        let tenant = grouped.tenant.as_deref().unwrap();
        match &tenant[0] {
            GroupedNodesItem::Branch { items, .. } => {
                assert_eq!(titles(items), vec!["/Root/db1"]);
            }
            GroupedNodesItem::Leaf { .. } => panic!("expected branch"),
        }
    }

    #[test]
    fn storage_role_wins_over_tenants() {
        let nodes = vec![node(1, "25-1-1", &["Storage"], &["/Root/db1"])];

        let grouped =
            group_cluster_nodes(&nodes, &VersionsDataMap::new(), TenantGrouping::VersionFirst);

        assert_eq!(section_ids(grouped.storage.as_deref()), vec![1]);
        assert_eq!(grouped.tenant, None);
        assert_eq!(grouped.other, None);
    }

    #[test]
    fn storage_leaves_follow_display_order_and_carry_colors() {
        let nodes = vec![
            node(1, "stable-19-2-18.bfa368f", &["Storage"], &[]),
            node(2, "stable-19-3-1.aaa111", &["Storage"], &[]),
            node(3, "stable-19-2-18.bfa368f", &["Storage"], &[]),
        ];
        let data = colored_data(&[
            ("stable-19-3-1", "#4caf50", 0, 0),
            ("stable-19-2-18", "#2196f3", 1, 0),
        ]);

        let storage = grouped_storage_nodes(&nodes, &data).unwrap();

        assert_eq!(
            titles(&storage),
            vec!["stable-19-3-1.aaa111", "stable-19-2-18.bfa368f"]
        );
        match &storage[1] {
            GroupedNodesItem::Leaf {
                nodes,
                version_color,
                ..
            } => {
                let ids: Vec<u32> = nodes.iter().map(|node| node.id).collect();
                assert_eq!(ids, vec![1, 3]);
                assert_eq!(version_color.as_deref(), Some("#2196f3"));
            }
            GroupedNodesItem::Branch { .. } => panic!("expected leaf"),
        }
    }

    #[test]
    fn version_first_nests_tenant_leaves_lexicographically() {
        let nodes = vec![
            node(1, "v1", &[], &["/Root/db2"]),
            node(2, "v1", &[], &["/Root/db1"]),
            node(3, "v2", &[], &["/Root/db1"]),
        ];
        let data = colored_data(&[("v1", "#2196f3", 0, 0), ("v2", "#4caf50", 0, 1)]);

        let tenant = grouped_tenant_nodes(&nodes, &data, TenantGrouping::VersionFirst).unwrap();

        assert_eq!(titles(&tenant), vec!["v1", "v2"]);
        match &tenant[0] {
            GroupedNodesItem::Branch {
                items,
                versions_values,
                ..
            } => {
                assert_eq!(titles(items), vec!["/Root/db1", "/Root/db2"]);
                assert!(versions_values.is_none());
                match &items[0] {
                    GroupedNodesItem::Leaf {
                        nodes,
                        version_color,
                        ..
                    } => {
                        assert_eq!(nodes[0].id, 2);
                        assert_eq!(version_color.as_deref(), Some("#2196f3"));
                    }
                    GroupedNodesItem::Branch { .. } => panic!("expected leaf"),
                }
            }
            GroupedNodesItem::Leaf { .. } => panic!("expected branch"),
        }
    }

    #[test]
    fn tenant_first_branches_carry_version_share_breakdowns() {
        let nodes = vec![
            node(1, "v1", &[], &["/Root/db1"]),
            node(2, "v1", &[], &["/Root/db1"]),
            node(3, "v2", &[], &["/Root/db1"]),
            node(4, "v2", &[], &["/Root/db2"]),
        ];
        let data = colored_data(&[("v1", "#2196f3", 0, 0), ("v2", "#4caf50", 0, 1)]);

        let tenant = grouped_tenant_nodes(&nodes, &data, TenantGrouping::TenantFirst).unwrap();

        assert_eq!(titles(&tenant), vec!["/Root/db1", "/Root/db2"]);
        match &tenant[0] {
            GroupedNodesItem::Branch {
                items,
                versions_values,
                ..
            } => {
                assert_eq!(titles(items), vec!["v1", "v2"]);
                let values = versions_values.as_deref().unwrap();
                assert_eq!(values.len(), 2);
                assert_eq!(values[0].version, "v1");
                assert!((values[0].value - 200.0 / 3.0).abs() < 1e-9);
                assert!((values[1].value - 100.0 / 3.0).abs() < 1e-9);
                assert_eq!(values[0].color.as_deref(), Some("#2196f3"));
            }
            GroupedNodesItem::Leaf { .. } => panic!("expected branch"),
        }
    }

    #[test]
    fn multi_tenant_nodes_stay_in_one_combined_bucket() {
        let nodes = vec![
            node(1, "v1", &[], &["/Root/db1", "/Root/db2"]),
            node(2, "v1", &[], &["/Root/db1"]),
        ];

        let tenant =
            grouped_tenant_nodes(&nodes, &VersionsDataMap::new(), TenantGrouping::TenantFirst)
                .unwrap();

        assert_eq!(titles(&tenant), vec!["/Root/db1", "/Root/db1,/Root/db2"]);
        let mut ids = Vec::new();
        collect_ids(&tenant, &mut ids);
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn empty_input_omits_every_section() {
        let grouped =
            group_cluster_nodes(&[], &VersionsDataMap::new(), TenantGrouping::VersionFirst);

        assert_eq!(
            grouped,
            GroupedNodes {
                storage: None,
                tenant: None,
                other: None,
            }
        );
    }

    #[test]
    fn every_node_lands_in_exactly_one_leaf() {
        let nodes = vec![
            node(1, "v1", &["Storage"], &[]),
            node(2, "v1", &["Storage"], &["/Root/db1"]),
            node(3, "v2", &[], &["/Root/db1"]),
            node(4, "v2", &[], &["/Root/db1", "/Root/db2"]),
            node(5, "v3", &[], &[]),
            node(6, "", &[], &[]),
        ];

        let grouped =
            group_cluster_nodes(&nodes, &VersionsDataMap::new(), TenantGrouping::TenantFirst);

        let mut ids = Vec::new();
        for section in [&grouped.storage, &grouped.tenant, &grouped.other] {
            if let Some(items) = section {
                collect_ids(items, &mut ids);
            }
        }
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
