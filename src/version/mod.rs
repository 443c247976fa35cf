//! Version identity layer
//!
//! Everything that gives a raw version string a stable identity: canonical
//! minor/major keys, the ordering hash, the total display order, and the
//! enrichment step that attaches resolved colors and node counts.
//!
//! # Modules
//!
//! - [`keys`]: Canonical minor/major key extraction from raw version strings
//! - [`hash`]: Stable string hash used as the ordering recency proxy
//! - [`order`]: Total display order for prepared versions
//! - [`prepare`]: Color and count enrichment for display
//! - [`types`]: Common types like `VersionMeta` and `PreparedVersion`

pub mod hash;
pub mod keys;
pub mod order;
pub mod prepare;
pub mod types;

pub use hash::string_hash;
pub use keys::{major_version, minor_version};
pub use order::{display_ordering, sort_versions};
pub use prepare::{prepare_version, prepare_versions, summarize_node_versions};
pub use types::{
    PreparedVersion, VersionColorEntry, VersionMeta, VersionToColorMap, VersionsDataMap,
};
