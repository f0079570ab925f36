use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MAX_ZOOM_RELATIVE, DEFAULT_MIN_ZOOM_RELATIVE, DEFAULT_PAN_QUIESCENCE_MS,
    DEFAULT_ZOOM_STEP, STAGE_HEIGHT, STAGE_WIDTH,
};
use crate::error::{Result, StageviewError};
use crate::geometry::Dimensions;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub stage: StageConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub pan: PanConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: STAGE_WIDTH,
            height: STAGE_HEIGHT,
        }
    }
}

impl StageConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Scale multiplier per wheel step (> 1).
    pub step_factor: f64,
    /// Lower scale bound as a fraction of the fit scale.
    pub min_relative: f64,
    /// Upper scale bound as a multiple of the fit scale.
    pub max_relative: f64,
    /// Only zoom while the modifier key (Ctrl/Cmd) is held.
    pub require_modifier: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step_factor: DEFAULT_ZOOM_STEP,
            min_relative: DEFAULT_MIN_ZOOM_RELATIVE,
            max_relative: DEFAULT_MAX_ZOOM_RELATIVE,
            require_modifier: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanConfig {
    /// Quiet period before the panning phase clears, in milliseconds.
    pub quiescence_ms: u64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            quiescence_ms: DEFAULT_PAN_QUIESCENCE_MS,
        }
    }
}

impl PanConfig {
    pub fn quiescence(&self) -> Duration {
        Duration::from_millis(self.quiescence_ms)
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        let stage = self.stage.dimensions();
        if !stage.is_renderable() {
            return Err(StageviewError::InvalidConfig(format!(
                "stage size must be positive, got {}x{}",
                stage.width, stage.height
            )));
        }
        if !(self.zoom.step_factor.is_finite() && self.zoom.step_factor > 1.0) {
            return Err(StageviewError::InvalidConfig(format!(
                "zoom.step_factor must be > 1, got {}",
                self.zoom.step_factor
            )));
        }
        let min = self.zoom.min_relative;
        let max = self.zoom.max_relative;
        if !(min > 0.0 && min <= 1.0 && max >= 1.0 && max.is_finite()) {
            return Err(StageviewError::InvalidConfig(format!(
                "zoom bounds must satisfy 0 < min_relative <= 1 <= max_relative, got {min}..{max}"
            )));
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Read and validate a TOML viewer config.
pub fn load_config(path: &Path) -> Result<ViewerConfig> {
    let content = std::fs::read_to_string(path)?;
    ViewerConfig::from_toml_str(&content)
}

impl fmt::Display for ViewerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stage {}x{}, zoom step {} ({}x..{}x), pan quiescence {}ms",
            self.stage.width,
            self.stage.height,
            self.zoom.step_factor,
            self.zoom.min_relative,
            self.zoom.max_relative,
            self.pan.quiescence_ms
        )
    }
}
