use crate::constants::{ASSETS_DIR_ENV, DEFAULT_ASSETS_DIR};
use crate::error::Result;
use crate::ioutils::{copy_new_file, read_text};
use crate::registry::resolve_template;
use crate::store::interface::AssetSource;
use std::path::{Path, PathBuf};

/// Asset store backed by a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
}

impl LocalAssetStore {
    /// Creates a store rooted at `root`. The directory is not checked here;
    /// missing assets surface when they are read.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Uses `LICENSING_SKILL_HOME` when set and non-empty, otherwise the
    /// directory the crate was built from.
    pub fn from_env() -> Self {
        match std::env::var_os(ASSETS_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(DEFAULT_ASSETS_DIR),
        }
    }

    fn asset_file(&self, asset_path: &str) -> PathBuf {
        self.root.join(asset_path)
    }
}

impl Default for LocalAssetStore {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AssetSource for LocalAssetStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_asset(&self, asset_path: &str) -> Result<String> {
        let path = self.asset_file(asset_path);
        log::debug!("Reading asset: {}", path.display());
        read_text(&path)
    }

    fn copy_template(&self, name: &str, destination: &Path) -> Result<()> {
        let source = self.asset_file(resolve_template(name)?);
        log::debug!("Copying {} to {}", source.display(), destination.display());
        copy_new_file(&source, destination)?;
        log::info!("Created {}", destination.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::assets;
    use crate::error::Error;
    use crate::registry::TEMPLATES;
    use std::fs;
    use tempfile::TempDir;

    fn shipped() -> LocalAssetStore {
        LocalAssetStore::new(DEFAULT_ASSETS_DIR)
    }

    #[test]
    fn every_registry_entry_is_shipped() {
        let store = shipped();
        for entry in TEMPLATES {
            assert!(
                store.root().join(entry.asset_path).is_file(),
                "missing asset {}",
                entry.asset_path
            );
        }
        assert!(store.root().join(assets::GUIDE).is_file());
        assert!(store.root().join(assets::README).is_file());
    }

    #[test]
    fn read_template_ignores_case() {
        let store = shipped();
        assert_eq!(
            store.read_template("EuLa").unwrap(),
            store.read_asset("references/eula-template.md").unwrap()
        );
    }

    #[test]
    fn empty_root_reports_missing_assets() {
        let tmp = TempDir::new().unwrap();
        let store = LocalAssetStore::new(tmp.path());
        assert!(matches!(store.read_asset(assets::GUIDE), Err(Error::AssetNotFound { .. })));
        assert!(matches!(store.read_template("eula"), Err(Error::AssetNotFound { .. })));
    }

    #[test]
    fn unknown_template_is_checked_before_destination() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("License.md");
        let result = shipped().copy_template("License", &dest);
        assert!(matches!(result, Err(Error::UnknownTemplate { .. })));
        assert!(!dest.exists());
    }

    #[test]
    fn copy_template_matches_source_bytes() {
        let tmp = TempDir::new().unwrap();
        let store = shipped();
        let dest = tmp.path().join("attribution.md");
        store.copy_template("attribution", &dest).unwrap();
        assert_eq!(
            fs::read(&dest).unwrap(),
            fs::read(store.root().join("references/attribution-ui-template.md")).unwrap()
        );
    }
}
