//! Constants used throughout licensing-skill

/// Binary name used in usage and hint messages
pub const BIN_NAME: &str = "licensing-skill";

/// Environment variable overriding the asset directory
pub const ASSETS_DIR_ENV: &str = "LICENSING_SKILL_HOME";

/// Asset directory baked in at build time
pub const DEFAULT_ASSETS_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Fixed asset paths that are not part of the template registry
pub mod assets {
    pub const GUIDE: &str = "SKILL.md";
    pub const README: &str = "README.md";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
