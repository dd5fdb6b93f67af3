//! Controller configuration: defaults, validation, and RON/JSON loading.

use std::fs;
use std::path::Path;

use avian2d::prelude::LayerMask;
use ron::Options;
use serde::{Deserialize, Serialize};

use super::bounds::Extents;
use crate::error::{ConfigError, ConfigLoadError};

/// Every option the controller recognizes.
///
/// Extents are distances from the actor's position to each edge of its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub left_extent: f32,
    pub right_extent: f32,
    pub lower_extent: f32,
    pub upper_extent: f32,
    pub upper_extent_crouching: f32,
    /// Inward margin kept between the box and any surface.
    pub skin_width: f32,
    /// Extra reach of ground probes beyond the skin.
    pub ground_slack: f32,
    /// Horizontal push applied when landing on a slope steeper than the limit.
    pub steep_slope_push: f32,

    /// Blend factor toward the target horizontal velocity, per tick.
    pub acceleration: f32,
    /// Steepest walkable slope, in degrees.
    pub slope_limit: f32,
    pub jump_limit: u32,
    pub turn_while_jumping: bool,
    /// Horizontal velocity retained per tick while airborne without turn control.
    pub air_friction: f32,

    pub horizontal_rays: u32,
    pub vertical_rays: u32,

    pub player_mask: u32,
    pub platform_mask: u32,
    pub default_mask: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            left_extent: 0.5,
            right_extent: 0.5,
            lower_extent: 0.8,
            upper_extent: 0.8,
            upper_extent_crouching: 0.0,
            skin_width: 0.015,
            ground_slack: 0.03,
            steep_slope_push: 0.025,
            acceleration: 0.25,
            slope_limit: 50.0,
            jump_limit: 2,
            turn_while_jumping: true,
            air_friction: 0.98,
            horizontal_rays: 5,
            vertical_rays: 5,
            player_mask: 1 << 8,
            platform_mask: 1 << 9,
            default_mask: 1 << 0,
        }
    }
}

impl ControllerConfig {
    pub fn extents(&self) -> Extents {
        Extents {
            left: self.left_extent,
            right: self.right_extent,
            up: self.upper_extent,
            up_crouching: self.upper_extent_crouching,
            down: self.lower_extent,
        }
    }

    /// Solid terrain: walls, floors, ceilings.
    pub fn solid_layers(&self) -> LayerMask {
        LayerMask(self.default_mask)
    }

    pub fn platform_layers(&self) -> LayerMask {
        LayerMask(self.platform_mask)
    }

    /// Anything the actor can stand on.
    pub fn walkable_layers(&self) -> LayerMask {
        LayerMask(self.default_mask | self.platform_mask)
    }

    pub fn player_layers(&self) -> LayerMask {
        LayerMask(self.player_mask)
    }

    /// Check the options against each other. Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("left_extent", self.left_extent),
            ("right_extent", self.right_extent),
            ("lower_extent", self.lower_extent),
            ("upper_extent", self.upper_extent),
            ("upper_extent_crouching", self.upper_extent_crouching),
            ("skin_width", self.skin_width),
            ("ground_slack", self.ground_slack),
            ("steep_slope_push", self.steep_slope_push),
            ("acceleration", self.acceleration),
            ("slope_limit", self.slope_limit),
            ("air_friction", self.air_friction),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let skin = self.skin_width;
        if skin <= 0.0 {
            return Err(ConfigError::NonPositiveSkin(skin));
        }
        for (field, extent) in [
            ("left_extent", self.left_extent),
            ("right_extent", self.right_extent),
            ("lower_extent", self.lower_extent),
            ("upper_extent", self.upper_extent),
        ] {
            if extent <= skin {
                return Err(ConfigError::SkinTooWide {
                    field,
                    extent,
                    skin,
                });
            }
        }

        let upper_crouch = self.upper_extent_crouching;
        if upper_crouch < 0.0
            || upper_crouch + skin >= self.upper_extent
            || self.lower_extent + upper_crouch <= skin
        {
            return Err(ConfigError::CrouchExtent {
                upper_crouch,
                upper: self.upper_extent,
                skin,
            });
        }

        check_range("acceleration", self.acceleration, 0.0, 1.0)?;
        check_range("air_friction", self.air_friction, 0.0, 1.0)?;
        check_range("slope_limit", self.slope_limit, 1.0, 90.0)?;
        check_range("jump_limit", self.jump_limit as f32, 1.0, 10.0)?;
        check_range("horizontal_rays", self.horizontal_rays as f32, 2.0, 20.0)?;
        check_range("vertical_rays", self.vertical_rays as f32, 2.0, 20.0)?;
        if self.ground_slack <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "ground_slack",
                value: self.ground_slack,
                min: f32::MIN_POSITIVE,
                max: f32::MAX,
            });
        }
        if self.steep_slope_push < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "steep_slope_push",
                value: self.steep_slope_push,
                min: 0.0,
                max: f32::MAX,
            });
        }

        let probes = self.default_mask | self.platform_mask;
        if self.player_mask & probes != 0 {
            return Err(ConfigError::OverlappingMasks {
                player: self.player_mask,
                probes,
            });
        }

        Ok(())
    }

    /// Load from a `.ron` or `.json` file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        if !matches!(extension.as_deref(), Some("ron" | "json")) {
            return Err(ConfigLoadError::UnsupportedFormat(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file = path.display().to_string();
        let parsed = match extension.as_deref() {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_ron_str(&contents),
        };
        parsed.map_err(|err| match err {
            ConfigLoadError::Parse { message, .. } => ConfigLoadError::Parse { file, message },
            other => other,
        })
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigLoadError> {
        ron_options()
            .from_str(contents)
            .map_err(|e| ConfigLoadError::Parse {
                file: "<ron>".to_string(),
                message: e.to_string(),
            })
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(contents).map_err(|e| ConfigLoadError::Parse {
            file: "<json>".to_string(),
            message: e.to_string(),
        })
    }
}

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Same RON extensions the content files are written with.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}
