use assert_cmd::Command;
use std::path::{Path, PathBuf};

// The library getters read through `LocalAssetStore::from_env()`, so the
// api tests expect `LICENSING_SKILL_HOME` to be unset or to point at a
// complete copy of the shipped assets. The CLI tests clear it.

/// Path of a shipped asset inside the crate.
pub fn shipped_asset(asset_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(asset_path)
}

/// The CLI binary running in `work_dir` against the shipped assets.
pub fn cli_in(work_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("licensing-skill").unwrap();
    cmd.current_dir(work_dir).env_remove("LICENSING_SKILL_HOME");
    cmd
}
