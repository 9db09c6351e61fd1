//! Orbit configuration — process-wide constants, validated once.
//!
//! An `OrbitConfig` can only be obtained through `Default`, the builder, or
//! `from_json`, all of which run the same validation. After construction it is
//! immutable and shared between instances behind an `Arc`.

use std::f64::consts::TAU;

use serde::Deserialize;
use thiserror::Error;

/// Validated orbit constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    rotation_speed: f64,
    reserved_arc: f64,
    hover_scale: f64,
    normal_scale: f64,
    radius_factor: f64,
    dampening: f64,
    panel_offset: f64,
    node_radius: f64,
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("reserved arc must lie in [0, 2π), got {0} rad")]
    ReservedArc(f64),
    #[error("dampening must lie in (0, 1], got {0}")]
    Dampening(f64),
    #[error("rotation speed must be finite, got {0}")]
    RotationSpeed(f64),
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("invalid config document: {0}")]
    Parse(String),
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.002,
            reserved_arc: 130f64.to_radians(),
            hover_scale: 1.4,
            normal_scale: 1.0,
            radius_factor: 0.35,
            dampening: 0.1,
            panel_offset: 60.0,
            node_radius: 45.0,
        }
    }
}

impl OrbitConfig {
    pub fn builder() -> OrbitConfigBuilder {
        OrbitConfigBuilder {
            config: Self::default(),
        }
    }

    /// Parse a JSON config document. Every field is optional; absent fields
    /// keep their defaults. `reserved_arc_deg` is given in degrees.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut b = Self::builder();
        if let Some(v) = file.rotation_speed {
            b = b.with_rotation_speed(v);
        }
        if let Some(v) = file.reserved_arc_deg {
            b = b.with_reserved_arc(v.to_radians());
        }
        if let Some(v) = file.hover_scale {
            b = b.with_hover_scale(v);
        }
        if let Some(v) = file.normal_scale {
            b = b.with_normal_scale(v);
        }
        if let Some(v) = file.radius_factor {
            b = b.with_radius_factor(v);
        }
        if let Some(v) = file.dampening {
            b = b.with_dampening(v);
        }
        if let Some(v) = file.panel_offset {
            b = b.with_panel_offset(v);
        }
        if let Some(v) = file.node_radius {
            b = b.with_node_radius(v);
        }
        b.build()
    }

    /// Base rotation advance per frame, in radians.
    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    /// Angular window kept clear around the selected node, in radians.
    pub fn reserved_arc(&self) -> f64 {
        self.reserved_arc
    }

    pub fn hover_scale(&self) -> f64 {
        self.hover_scale
    }

    pub fn normal_scale(&self) -> f64 {
        self.normal_scale
    }

    /// Orbit radius as a fraction of `min(width, height)`.
    pub fn radius_factor(&self) -> f64 {
        self.radius_factor
    }

    /// Fraction of the remaining distance closed per frame.
    pub fn dampening(&self) -> f64 {
        self.dampening
    }

    /// Horizontal distance from the selected node to the detail panel anchor.
    pub fn panel_offset(&self) -> f64 {
        self.panel_offset
    }

    /// Unscaled node radius in pixels (hit-testing and drawing).
    pub fn node_radius(&self) -> f64 {
        self.node_radius
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(0.0..TAU).contains(&self.reserved_arc) {
            return Err(ConfigError::ReservedArc(self.reserved_arc));
        }
        if !(self.dampening > 0.0 && self.dampening <= 1.0) {
            return Err(ConfigError::Dampening(self.dampening));
        }
        if !self.rotation_speed.is_finite() {
            return Err(ConfigError::RotationSpeed(self.rotation_speed));
        }
        let positive = [
            ("hover scale", self.hover_scale),
            ("normal scale", self.normal_scale),
            ("radius factor", self.radius_factor),
            ("node radius", self.node_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if !self.panel_offset.is_finite() {
            return Err(ConfigError::NotPositive {
                name: "panel offset",
                value: self.panel_offset,
            });
        }
        Ok(self)
    }
}

/// Builder over `OrbitConfig::default()`; `build()` validates.
#[derive(Debug, Clone)]
pub struct OrbitConfigBuilder {
    config: OrbitConfig,
}

impl OrbitConfigBuilder {
    pub fn with_rotation_speed(mut self, v: f64) -> Self {
        self.config.rotation_speed = v;
        self
    }

    pub fn with_reserved_arc(mut self, radians: f64) -> Self {
        self.config.reserved_arc = radians;
        self
    }

    pub fn with_hover_scale(mut self, v: f64) -> Self {
        self.config.hover_scale = v;
        self
    }

    pub fn with_normal_scale(mut self, v: f64) -> Self {
        self.config.normal_scale = v;
        self
    }

    pub fn with_radius_factor(mut self, v: f64) -> Self {
        self.config.radius_factor = v;
        self
    }

    pub fn with_dampening(mut self, v: f64) -> Self {
        self.config.dampening = v;
        self
    }

    pub fn with_panel_offset(mut self, v: f64) -> Self {
        self.config.panel_offset = v;
        self
    }

    pub fn with_node_radius(mut self, v: f64) -> Self {
        self.config.node_radius = v;
        self
    }

    pub fn build(self) -> Result<OrbitConfig, ConfigError> {
        self.config.validate()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    rotation_speed: Option<f64>,
    reserved_arc_deg: Option<f64>,
    hover_scale: Option<f64>,
    normal_scale: Option<f64>,
    radius_factor: Option<f64>,
    dampening: Option<f64>,
    panel_offset: Option<f64>,
    node_radius: Option<f64>,
}
