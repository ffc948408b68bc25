use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Unknown template \"{name}\". Available templates: eula, licenses, attribution.")]
    UnknownTemplate { name: String },

    /// The asset is missing from the asset directory.
    #[error("Asset '{path}' not found. Please check the installation.")]
    AssetNotFound { path: String },

    #[error("Failed to read asset '{path}'. Original error: {source}")]
    AssetReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The copy destination is already present; nothing is overwritten.
    #[error("File \"{path}\" already exists.")]
    DestinationExists { path: String },

    #[error("Error copying template to '{path}'. Original error: {source}")]
    CopyError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output. Original error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(exit_codes::FAILURE);
}
