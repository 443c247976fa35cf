//! Color assignment layer
//!
//! Turns a set of raw version strings into a stable version-to-color map.
//! The flow is the same for every caller; only the strategy that buckets
//! minor versions into color groups differs between the multi-cluster and
//! single-cluster paths.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Keys     │────▶│   Engine    │────▶│ VersionsData│
//! │ (canonical) │     │ (hue/shade) │     │    (map)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!       ┌─────────────┐             ┌─────────────┐
//!       │  Strategy   │             │   Palette   │
//!       │  (groups)   │             │ (per theme) │
//!       └─────────────┘             └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`engine`]: Deterministic bucketing and shade assignment
//! - [`palette`]: Fixed per-theme hue/shade tables
//! - [`strategy`]: Color group resolution seam
//! - [`strategies`]: Explicit-metadata and derived-major-version strategies

pub mod engine;
pub mod palette;
pub mod strategies;
pub mod strategy;

pub use engine::{assign_version_colors, version_to_color_map};
pub use palette::{PALETTE_SIZE, Palette, SHADES_PER_HUE, Theme, ThemeParseError};
pub use strategies::{ExplicitColorGroups, MajorVersionGroups};
pub use strategy::{ColorGroup, ColorGroupStrategy};
