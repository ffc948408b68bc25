/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Shared constants.
pub mod constants;

/// The fixed template registry.
pub mod registry;

/// Access to the shipped assets.
pub mod store;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Library entry points.
pub mod api;

pub use api::{
    copy_template, get_attribution_template, get_eula_template, get_guide, get_readme,
    get_template, get_third_party_licenses_template, get_version, templates,
};
pub use registry::{TemplateEntry, TemplateKind};
pub use store::{AssetSource, LocalAssetStore};
