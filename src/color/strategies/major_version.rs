//! Derived color groups from major versions
//!
//! The single-cluster path: every minor version joins the group of its major
//! version, so patch releases of one line share a hue. Unrecognized strings
//! derive themselves and become singleton groups with a real hue.

use crate::color::strategy::{ColorGroup, ColorGroupStrategy};
use crate::version::keys::major_version;

/// Strategy deriving the color group from the major version key
#[derive(Debug, Default)]
pub struct MajorVersionGroups;

impl ColorGroupStrategy for MajorVersionGroups {
    fn color_group(&self, minor_version: &str) -> ColorGroup {
        ColorGroup::Derived(major_version(minor_version).to_string())
    }
}
