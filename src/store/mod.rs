pub mod interface;
pub mod local;

pub use interface::AssetSource;
pub use local::LocalAssetStore;
