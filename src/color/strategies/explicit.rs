//! Explicit color groups from version metadata
//!
//! The multi-cluster path: upstream metadata assigns versions explicit
//! numeric color group indices. Versions without one route to the shared
//! default bucket.

use std::collections::HashMap;

use crate::color::strategy::{ColorGroup, ColorGroupStrategy};
use crate::version::keys::minor_version;
use crate::version::types::VersionMeta;

/// Strategy mapping minor version keys to metadata-supplied group indices
#[derive(Debug, Default)]
pub struct ExplicitColorGroups {
    groups: HashMap<String, usize>,
}

impl ExplicitColorGroups {
    /// Build the mapping from backend version metadata.
    ///
    /// Records are keyed by their canonical minor key. When two records
    /// collapse to the same key with different group indices, the smallest
    /// index wins, keeping the mapping a function of the metadata set alone.
    pub fn from_metadata(metas: &[VersionMeta]) -> Self {
        let mut groups: HashMap<String, usize> = HashMap::new();
        for meta in metas {
            let Some(id) = meta.color_group_id else {
                continue;
            };
            groups
                .entry(minor_version(&meta.version).to_string())
                .and_modify(|existing| *existing = (*existing).min(id))
                .or_insert(id);
        }
        Self { groups }
    }
}

impl ColorGroupStrategy for ExplicitColorGroups {
    fn color_group(&self, minor_version: &str) -> ColorGroup {
        self.groups
            .get(minor_version)
            .map_or(ColorGroup::Default, |id| ColorGroup::Explicit(*id))
    }
}
