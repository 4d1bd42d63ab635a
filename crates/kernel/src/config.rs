//! Scene configuration: the constants a sketch variant is made of.
//!
//! Loaded from YAML; every field is optional and falls back to the default
//! sketch. A named preset may be used as the base instead.

use crate::controls::MIN_CAMERA_DISTANCE;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use sketch_common::{DEFAULT_PIXEL_RATIO_CAP, Rgb};
use std::path::Path;
use std::str::FromStr;

/// Errors from loading or validating a [`SceneConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("unknown preset {0:?} (expected wide, narrow or crisp)")]
    UnknownPreset(String),
}

/// Orbit-control inertia.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DampingConfig {
    pub enabled: bool,
    pub factor: f32,
}

impl Default for DampingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            factor: 0.05,
        }
    }
}

/// Built-in variants of the sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenePreset {
    /// 70 degree field of view, pixel ratio capped at 2.
    #[default]
    Wide,
    /// 45 degree field of view.
    Narrow,
    /// Pixel ratio pinned to 1; edges rely on multisampling.
    Crisp,
}

impl FromStr for ScenePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wide" => Ok(Self::Wide),
            "narrow" => Ok(Self::Narrow),
            "crisp" => Ok(Self::Crisp),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub camera_position: Vec3,
    pub pixel_ratio_cap: f64,
    pub clear_color: Rgb,
    pub antialias: bool,
    pub cube_size: f32,
    /// `uSize` before scaling by the pixel ratio.
    pub point_size: f32,
    pub damping: DampingConfig,
    pub start_playing: bool,
    /// Stop the animation clock while paused instead of letting it run.
    pub freeze_clock_while_paused: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov: 70.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Vec3::new(0.0, 0.0, 2.0),
            pixel_ratio_cap: DEFAULT_PIXEL_RATIO_CAP,
            clear_color: Rgb(0xeeeeee),
            antialias: true,
            cube_size: 0.2,
            point_size: 30.0,
            damping: DampingConfig::default(),
            start_playing: true,
            freeze_clock_while_paused: false,
        }
    }
}

impl SceneConfig {
    pub fn preset(preset: ScenePreset) -> Self {
        let base = Self::default();
        match preset {
            ScenePreset::Wide => base,
            ScenePreset::Narrow => Self { fov: 45.0, ..base },
            ScenePreset::Crisp => Self {
                pixel_ratio_cap: 1.0,
                ..base
            },
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!("loaded scene config from {}", path.display());
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(45.0..=70.0).contains(&self.fov) {
            return Err(invalid("fov", format!("{} not in 45..=70 degrees", self.fov)));
        }
        if !(self.near > 0.0) {
            return Err(invalid("near", "must be positive"));
        }
        if !(self.far > self.near) {
            return Err(invalid("far", "must be greater than near"));
        }
        if !self.camera_position.is_finite() {
            return Err(invalid("camera_position", "must be finite"));
        }
        // The orbit target is the origin.
        if self.camera_position.length() < MIN_CAMERA_DISTANCE {
            return Err(invalid(
                "camera_position",
                "must not coincide with the orbit target",
            ));
        }
        if !(self.pixel_ratio_cap > 0.0 && self.pixel_ratio_cap <= DEFAULT_PIXEL_RATIO_CAP) {
            return Err(invalid(
                "pixel_ratio_cap",
                format!("{} not in (0, {DEFAULT_PIXEL_RATIO_CAP}]", self.pixel_ratio_cap),
            ));
        }
        if !(self.cube_size > 0.0) {
            return Err(invalid("cube_size", "must be positive"));
        }
        if !(self.point_size >= 0.0) {
            return Err(invalid("point_size", "must not be negative"));
        }
        if !(self.damping.factor > 0.0 && self.damping.factor <= 1.0) {
            return Err(invalid("damping.factor", "must be in (0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = SceneConfig::default();
        config.validate().unwrap();
        assert_eq!(config.fov, 70.0);
        assert_eq!(config.camera_position, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(config.clear_color, Rgb(0xeeeeee));
    }

    #[test]
    fn presets_are_valid() {
        for p in [ScenePreset::Wide, ScenePreset::Narrow, ScenePreset::Crisp] {
            SceneConfig::preset(p).validate().unwrap();
        }
        assert_eq!(SceneConfig::preset(ScenePreset::Narrow).fov, 45.0);
        assert_eq!(SceneConfig::preset(ScenePreset::Crisp).pixel_ratio_cap, 1.0);
    }

    #[test]
    fn preset_from_str() {
        assert_eq!("Narrow".parse::<ScenePreset>().unwrap(), ScenePreset::Narrow);
        assert!(matches!(
            "tiny".parse::<ScenePreset>(),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = SceneConfig::from_yaml_str("fov: 45\ndamping:\n  factor: 0.1\n").unwrap();
        assert_eq!(config.fov, 45.0);
        assert_eq!(config.damping.factor, 0.1);
        assert!(config.damping.enabled);
        assert_eq!(config.cube_size, 0.2);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = SceneConfig::from_yaml_str("fov: 120").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fov", .. }));

        let err = SceneConfig::from_yaml_str("pixel_ratio_cap: 3.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "pixel_ratio_cap", .. }));

        let err = SceneConfig::from_yaml_str("near: 10\nfar: 5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "far", .. }));

        let err = SceneConfig::from_yaml_str("camera_position: [0.0, 0.0, 0.0]").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "camera_position",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = SceneConfig::from_yaml_str("fov: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn yaml_roundtrip_through_file() {
        let config = SceneConfig::preset(ScenePreset::Narrow);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_yaml_string().unwrap().as_bytes())
            .unwrap();
        let loaded = SceneConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SceneConfig::load("/nonexistent/sketch.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
