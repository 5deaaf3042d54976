//! # Theme Error Types
//!
//! Style resolution itself never fails. These errors come only from
//! loading theme configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a theme file.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The file could not be read.
    #[error("failed to read theme file {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML.
    #[error("invalid theme file: {0}")]
    Parse(#[from] toml::de::Error),

    /// An `@name` reference that the loader has no asset for.
    #[error("unknown asset reference: @{0}")]
    UnknownAsset(String),

    /// An asset registration that is not `name=id`.
    #[error("invalid asset binding {0:?}, expected name=id")]
    InvalidAssetBinding(String),

    /// A TOML value with no style equivalent (arrays, datetimes).
    #[error("unsupported {kind} value at {key}")]
    UnsupportedValue {
        /// Dotted path of the offending key.
        key: String,
        /// TOML type that was found.
        kind: &'static str,
    },

    /// A `#...` string that is not a valid hex color.
    #[error("invalid color {value:?} at {key}")]
    InvalidColor {
        /// Dotted path of the offending key.
        key: String,
        /// The string as written.
        value: String,
    },
}

/// Result type for theme loading.
pub type ThemeResult<T> = Result<T, ThemeError>;
