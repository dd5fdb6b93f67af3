//! Error types for configuration, scene queries, and controller ticks.

use std::path::PathBuf;

use thiserror::Error;

/// A controller configuration that would produce wrong collision behaviour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("'{field}' must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("skin width must be positive, got {0}")]
    NonPositiveSkin(f32),

    #[error("skin width {skin} must be smaller than '{field}' ({extent})")]
    SkinTooWide {
        field: &'static str,
        extent: f32,
        skin: f32,
    },

    #[error("'{field}' = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error(
        "crouch extent {upper_crouch} leaves no clearance below upper extent {upper} with skin {skin}"
    )]
    CrouchExtent {
        upper_crouch: f32,
        upper: f32,
        skin: f32,
    },

    #[error("player mask {player:#x} overlaps the probe masks {probes:#x}")]
    OverlappingMasks { player: u32, probes: u32 },
}

/// Failure while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("unsupported config format for {} (expected .ron or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Failure reported by a scene query backend. Fatal for the tick that hit it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("scene query failed: {message}")]
pub struct QueryError {
    pub message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("invalid controller config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("tick duration must be positive and finite, got {0}")]
    InvalidTimestep(f32),
}
