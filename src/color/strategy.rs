//! Color group resolution seam
//!
//! A color group is a bucket of minor versions sharing one hue row. The two
//! production paths differ only in how a minor version resolves to its
//! group: multi-cluster metadata supplies explicit numeric indices, while
//! the single-cluster path derives the group from the major version. The
//! assignment engine is written once against this trait.

#[cfg(test)]
use mockall::automock;

/// Identity of one color bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    /// Explicit numeric group index supplied by upstream metadata
    Explicit(usize),
    /// Group derived from a major version key
    Derived(String),
    /// Shared bucket for versions outside every group; always rendered with
    /// the reserved default color, never with shade variants
    Default,
}

/// Trait for resolving the color group of a canonical minor version key
#[cfg_attr(test, automock)]
pub trait ColorGroupStrategy {
    /// Resolve the color group for a minor version key
    fn color_group(&self, minor_version: &str) -> ColorGroup;
}
