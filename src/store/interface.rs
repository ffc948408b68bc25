use crate::error::Result;
use crate::registry::resolve_template;
use std::path::Path;

/// Access to the shipped assets.
///
/// Both the command line and the library API go through this trait, so the
/// name resolution and no-overwrite rules live in one place.
pub trait AssetSource {
    /// Directory every asset path is relative to.
    fn root(&self) -> &Path;

    /// Reads the asset at `asset_path` as text.
    ///
    /// # Errors
    /// * `AssetNotFound` - the file does not exist
    /// * `AssetReadError` - any other I/O failure, including invalid UTF-8
    fn read_asset(&self, asset_path: &str) -> Result<String>;

    /// Copies the template named `name` to `destination`.
    ///
    /// # Errors
    /// * `UnknownTemplate` - `name` is not in the registry
    /// * `DestinationExists` - `destination` is already present
    /// * `AssetNotFound` - the template file is missing from the store
    /// * `CopyError` - any other I/O failure
    fn copy_template(&self, name: &str, destination: &Path) -> Result<()>;

    /// Resolves `name` and reads the template it refers to.
    fn read_template(&self, name: &str) -> Result<String> {
        let asset_path = resolve_template(name)?;
        self.read_asset(asset_path)
    }
}
