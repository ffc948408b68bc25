//! Library entry points over the default asset store.
//!
//! These functions never print and never exit; every failure is returned as
//! an [`Error`](crate::error::Error). The store is located with
//! [`LocalAssetStore::from_env`].

use crate::constants::assets;
use crate::error::Result;
use crate::registry::{TemplateEntry, TemplateKind, TEMPLATES};
use crate::store::{AssetSource, LocalAssetStore};
use std::path::Path;

fn store() -> LocalAssetStore {
    LocalAssetStore::from_env()
}

/// The complete licensing workflow guide (`SKILL.md`).
pub fn get_guide() -> Result<String> {
    store().read_asset(assets::GUIDE)
}

/// The package README.
pub fn get_readme() -> Result<String> {
    store().read_asset(assets::README)
}

pub fn get_eula_template() -> Result<String> {
    get_template(TemplateKind::Eula)
}

pub fn get_third_party_licenses_template() -> Result<String> {
    get_template(TemplateKind::Licenses)
}

pub fn get_attribution_template() -> Result<String> {
    get_template(TemplateKind::Attribution)
}

/// Reads the template identified by `kind`.
pub fn get_template(kind: TemplateKind) -> Result<String> {
    store().read_asset(kind.asset_path())
}

/// Copies the template named `template_name` (case-insensitive) to
/// `destination`. An existing destination is left untouched and reported as
/// `DestinationExists`.
pub fn copy_template<P: AsRef<Path>>(template_name: &str, destination: P) -> Result<()> {
    store().copy_template(template_name, destination.as_ref())
}

/// All shipped templates in display order.
pub fn templates() -> &'static [TemplateEntry] {
    TEMPLATES
}

/// The package version.
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
