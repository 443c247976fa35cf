//! Color group strategy implementations

mod explicit;
mod major_version;

pub use explicit::ExplicitColorGroups;
pub use major_version::MajorVersionGroups;
