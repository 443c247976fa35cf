//! Node grouping layer
//! - grouping.rs: Storage/Tenant/Other partition and version/tenant buckets
//! - types.rs: Common types (ClusterNode, GroupedNodesItem, GroupedNodes)

pub mod grouping;
pub mod types;

pub use grouping::{
    TenantGrouping, group_cluster_nodes, grouped_other_nodes, grouped_storage_nodes,
    grouped_tenant_nodes,
};
pub use types::{ClusterNode, GroupedNodes, GroupedNodesItem, VersionValue};
