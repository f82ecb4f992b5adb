//! Field and canvas dimensions.
//!
//! The field is a fixed real-world rectangle: 120 yards wide, 300 yards
//! long, with a reference line every 50 yards.

use crate::errors::ConfigurationError;
use crate::types::Yards;

/// Total field width (lateral extent, centered on the target line)
pub const FIELD_WIDTH: Yards = Yards(120.0);
/// Total field length (downfield extent from the tee)
pub const FIELD_LENGTH: Yards = Yards(300.0);
/// Distance between horizontal reference lines
pub const GRID_INTERVAL: Yards = Yards(50.0);

/// Field extents in yards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDimensions {
    pub width: Yards,
    pub length: Yards,
    pub grid_interval: Yards,
}

impl Default for FieldDimensions {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            length: FIELD_LENGTH,
            grid_interval: GRID_INTERVAL,
        }
    }
}

impl FieldDimensions {
    /// Half the field width: the lateral offset of either sideline
    pub fn half_width(&self) -> Yards {
        self.width / 2.0
    }

    /// Distances of the reference lines, from one interval up to the length
    pub fn grid_distances(&self) -> impl Iterator<Item = Yards> + '_ {
        let interval = self.grid_interval.raw();
        let length = self.length.raw();
        let steps = if interval > 0.0 { (length / interval).floor() as usize } else { 0 };
        (1..=steps).map(move |i| Yards(interval * i as f64))
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigurationError::check("field width", self.width.raw())?;
        ConfigurationError::check("field length", self.length.raw())?;
        ConfigurationError::check("grid interval", self.grid_interval.raw())?;
        Ok(())
    }
}

/// Pixel size of the render surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigurationError::check("canvas width", self.width)?;
        ConfigurationError::check("canvas height", self.height)?;
        Ok(())
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(600.0, 900.0)
    }
}
