use anyhow::{bail, Context, Result};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "line_grapher.toml";

/// Largest accepted surface side, in pixels.
pub const MAX_SURFACE_SIDE: u32 = 4096;

/// Smallest accepted grid spacing, in pixels.
pub const MIN_GRID_SPACING: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub panel: [u8; 3],
    pub grid: [u8; 3],
    pub line: [u8; 3],
    pub first_point: [u8; 3],
    pub second_point: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            panel: [0xD6, 0xE5, 0xE3],
            grid: [0xFF, 0xFF, 0xFF],
            line: [0x9C, 0x7C, 0xB7],
            first_point: [0xFB, 0x8B, 0x24],
            second_point: [0x29, 0x40, 0x59],
        }
    }
}

pub fn rgba([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub surface_width: u32,
    pub surface_height: u32,
    pub pixels_per_unit: f32,
    pub grid_spacing: f32,
    pub point_radius: f32,
    pub line_width: f32,
    pub slope_step: f32,
    pub intercept_step: f32,
    pub palette: Palette,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            surface_width: 500,
            surface_height: 500,
            pixels_per_unit: 10.0,
            grid_spacing: 50.0,
            point_radius: 20.0,
            line_width: 2.0,
            slope_step: 0.1,
            intercept_step: 1.0,
            palette: Palette::default(),
        }
    }
}

impl GraphConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(text).context("invalid graph config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("failed to load {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.surface_width == 0 || self.surface_height == 0 {
            bail!(
                "surface must not be empty, got {}x{}",
                self.surface_width,
                self.surface_height
            );
        }
        if self.surface_width > MAX_SURFACE_SIDE || self.surface_height > MAX_SURFACE_SIDE {
            bail!(
                "surface may be at most {MAX_SURFACE_SIDE}px per side, got {}x{}",
                self.surface_width,
                self.surface_height
            );
        }
        for (name, value) in [
            ("pixels_per_unit", self.pixels_per_unit),
            ("grid_spacing", self.grid_spacing),
            ("point_radius", self.point_radius),
            ("line_width", self.line_width),
            ("slope_step", self.slope_step),
            ("intercept_step", self.intercept_step),
        ] {
            if !(value.is_finite() && value > 0.0) {
                bail!("{name} must be a positive number, got {value}");
            }
        }
        if self.grid_spacing < MIN_GRID_SPACING {
            bail!(
                "grid_spacing must be at least {MIN_GRID_SPACING}, got {}",
                self.grid_spacing
            );
        }
        Ok(())
    }

    pub fn surface_size(&self) -> (f32, f32) {
        (self.surface_width as f32, self.surface_height as f32)
    }
}
