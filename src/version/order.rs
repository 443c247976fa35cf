//! Total display order for prepared versions
//!
//! Widgets that render the same version set independently must agree on the
//! order, so the comparator is total and deterministic: hue row first, then
//! position within the group, then descending hash as a recency proxy, with
//! the raw string as the final tiebreak. Versions without indices sort last.

use std::cmp::Ordering;

use crate::version::hash::string_hash;
use crate::version::types::PreparedVersion;

fn index_ordering(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare two prepared versions in display order.
pub fn display_ordering(a: &PreparedVersion, b: &PreparedVersion) -> Ordering {
    index_ordering(a.major_index, b.major_index)
        .then_with(|| index_ordering(a.minor_index, b.minor_index))
        .then_with(|| string_hash(&b.version).cmp(&string_hash(&a.version)))
        .then_with(|| a.version.cmp(&b.version))
}

/// Sort prepared versions into display order, leaving the input untouched.
pub fn sort_versions(versions: &[PreparedVersion]) -> Vec<PreparedVersion> {
    let mut sorted = versions.to_vec();
    sorted.sort_by(display_ordering);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(
        version: &str,
        major_index: Option<usize>,
        minor_index: Option<usize>,
    ) -> PreparedVersion {
        PreparedVersion {
            version: version.to_string(),
            minor_version: version.to_string(),
            color: None,
            major_index,
            minor_index,
            count: 0,
        }
    }

    fn order_of(versions: &[PreparedVersion]) -> Vec<String> {
        sort_versions(versions)
            .into_iter()
            .map(|v| v.version)
            .collect()
    }

    #[test]
    fn versions_without_major_index_sort_last() {
        let versions = vec![
            prepared("a", Some(1), None),
            prepared("b", None, None),
            prepared("c", Some(0), None),
        ];
        assert_eq!(order_of(&versions), vec!["c", "a", "b"]);
    }

    #[test]
    fn minor_index_breaks_ties_within_a_hue_row() {
        let versions = vec![
            prepared("a", Some(0), Some(2)),
            prepared("b", Some(0), Some(0)),
            prepared("c", Some(0), Some(1)),
        ];
        assert_eq!(order_of(&versions), vec!["b", "c", "a"]);
    }

    #[test]
    fn unindexed_versions_fall_back_to_descending_hash() {
        let versions = vec![
            prepared("v1", None, None),
            prepared("v3", None, None),
            prepared("v2", None, None),
        ];
        assert_eq!(order_of(&versions), vec!["v3", "v2", "v1"]);
    }

    #[test]
    fn sorting_is_a_fixed_point() {
        let versions = vec![
            prepared("b", None, None),
            prepared("a", Some(1), Some(0)),
            prepared("c", Some(0), Some(1)),
        ];
        let once = sort_versions(&versions);
        let twice = sort_versions(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn input_slice_is_left_untouched() {
        let versions = vec![prepared("a", Some(1), None), prepared("c", Some(0), None)];
        let _ = sort_versions(&versions);
        assert_eq!(versions[0].version, "a");
    }
}
