//! Deterministic color assignment engine
//!
//! Gives every distinct minor version a stable (hue, shade) pair so that
//! independently refreshed widgets agree on colors. Each step orders itself
//! from the input set alone; re-running on any permutation of the same
//! versions yields a byte-identical map.

use indexmap::IndexMap;
use tracing::debug;

use crate::color::palette::{PALETTE_SIZE, Palette, SHADES_PER_HUE, Theme};
use crate::color::strategy::{ColorGroup, ColorGroupStrategy};
use crate::version::hash::string_hash;
use crate::version::keys::minor_version;
use crate::version::types::{VersionColorEntry, VersionToColorMap, VersionsDataMap};

/// Assign colors to every distinct minor version among `versions`.
///
/// Raw strings canonicalize to minor keys and duplicates collapse. Groups
/// resolved by `strategy` each take one hue row (explicit indices pick the
/// row directly, derived groups rotate through the table in first-encounter
/// order) and spread their members over the row's shades, brightest first.
/// The default group takes the reserved default color with no indices.
/// Empty input yields an empty map.
pub fn assign_version_colors(
    versions: &[String],
    strategy: &dyn ColorGroupStrategy,
    theme: Theme,
) -> VersionsDataMap {
    let palette = Palette::for_theme(theme);

    // Canonical scan order: hash descending, key ascending on ties. Every
    // later step inherits its order from this one, which is what makes the
    // pass independent of the caller's array order.
    let mut minors: Vec<&str> = versions.iter().map(|v| minor_version(v)).collect();
    minors.sort_unstable_by(|a, b| string_hash(b).cmp(&string_hash(a)).then_with(|| a.cmp(b)));
    minors.dedup();

    let mut groups: IndexMap<ColorGroup, Vec<&str>> = IndexMap::new();
    for minor in minors {
        groups
            .entry(strategy.color_group(minor))
            .or_default()
            .push(minor);
    }

    let mut data = VersionsDataMap::new();
    let mut derived_rows = 0usize;
    for (group, members) in &groups {
        let hue_row = match group {
            ColorGroup::Explicit(id) => Some(id % PALETTE_SIZE),
            ColorGroup::Derived(_) => {
                let row = derived_rows % PALETTE_SIZE;
                derived_rows += 1;
                Some(row)
            }
            ColorGroup::Default => None,
        };

        match hue_row {
            Some(row) => {
                let count = members.len();
                for (position, minor) in members.iter().enumerate() {
                    let shade = position * SHADES_PER_HUE / count;
                    data.insert(
                        (*minor).to_string(),
                        VersionColorEntry {
                            color: palette.color(row, shade).to_string(),
                            major_index: Some(row),
                            minor_index: Some(position),
                        },
                    );
                }
            }
            None => {
                for minor in members {
                    data.insert(
                        (*minor).to_string(),
                        VersionColorEntry {
                            color: palette.default_color().to_string(),
                            major_index: None,
                            minor_index: None,
                        },
                    );
                }
            }
        }
    }

    debug!(
        "Assigned colors to {} minor versions across {} color groups",
        data.len(),
        groups.len()
    );

    data
}

/// Flatten a versions data map to minor key -> color for legend widgets.
pub fn version_to_color_map(data: &VersionsDataMap) -> VersionToColorMap {
    data.iter()
        .map(|(version, entry)| (version.clone(), entry.color.clone()))
        .collect()
}
