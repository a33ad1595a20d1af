use super::error::*;
use super::value::*;

use serde_json;

///
/// Settings for running a sketch
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Width of the canvas in pixels
    pub width: f64,

    /// Height of the canvas in pixels
    pub height: f64,

    /// The frame rate that a sketch starts with
    pub frame_rate: f64,

    /// The frame rate that `loop_()` goes back to
    pub loop_frame_rate: f64,

    /// Reproduce Processing.js's overlay blend, where the blue channel is chosen using the red channel
    pub overlay_compatibility: bool
}

impl Default for SketchConfig {
    fn default() -> SketchConfig {
        SketchConfig {
            width:                  400.0,
            height:                 400.0,
            frame_rate:             60.0,
            loop_frame_rate:        120.0,
            overlay_compatibility:  true
        }
    }
}

impl SketchConfig {
    ///
    /// Reads a configuration from a JSON string (fields that are left out keep their default values)
    ///
    pub fn from_json(json: &str) -> Result<SketchConfig, SketchError> {
        serde_json::from_str(json)
            .map_err(|err| SketchError::Config(err.to_string()))
    }

    ///
    /// Writes this configuration as JSON
    ///
    pub fn to_json(&self) -> Result<String, SketchError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| SketchError::Config(err.to_string()))
    }

    ///
    /// The size of the canvas described by this configuration
    ///
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }
}
