//! Picker configuration file support.
//!
//! The layout and native channel masks are loaded from JSON, so one build of
//! the widget can match whatever pixel layout the host's render target uses.
//! Missing fields fall back to the defaults in [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::color::Hsv;
use crate::constants;
use crate::error::ConfigError;
use crate::picker::{ColorPicker, PickerLayout};
use crate::pixel::{ChannelMasks, PixelFormat};

/// Serializable picker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Picker center in screen pixels
    pub center: [i32; 2],
    /// Half the side of the picker's square
    pub bound_radius_px: i32,
    /// Distance from the center to the middle of the hue ring
    pub wheel_radius: f64,
    /// Half the thickness of the hue ring
    pub wheel_half_width: f64,
    /// Native pixel layout of the picker buffer
    pub channel_masks: ChannelMasks,
    /// Color the picker starts on
    pub initial_color: Hsv,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            center: [constants::BOUND_RADIUS_PX, constants::BOUND_RADIUS_PX],
            bound_radius_px: constants::BOUND_RADIUS_PX,
            wheel_radius: constants::WHEEL_RADIUS,
            wheel_half_width: constants::WHEEL_HALF_WIDTH,
            channel_masks: ChannelMasks::default(),
            initial_color: Hsv::default(),
        }
    }
}

impl PickerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn layout(&self) -> PickerLayout {
        PickerLayout {
            center: (self.center[0], self.center[1]),
            bound_radius_px: self.bound_radius_px,
            wheel_radius: self.wheel_radius,
            wheel_half_width: self.wheel_half_width,
        }
    }

    pub fn pixel_format(&self) -> Result<PixelFormat, ConfigError> {
        PixelFormat::new(self.channel_masks).map_err(|e| {
            log::warn!("rejected channel masks {:?}: {e}", self.channel_masks);
            e.into()
        })
    }

    /// Build the picker and its pixel format, validating both.
    pub fn build(&self) -> Result<(ColorPicker, PixelFormat), ConfigError> {
        let format = self.pixel_format()?;
        let mut picker = ColorPicker::new(self.layout()).map_err(|e| {
            log::warn!("rejected picker layout {:?}: {e}", self.layout());
            ConfigError::from(e)
        })?;
        picker.set_hsv(self.initial_color);
        Ok((picker, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PickerError, PixelFormatError};

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = PickerConfig::from_json(r#"{ "center": [300, 200] }"#).unwrap();
        assert_eq!(config.center, [300, 200]);
        assert_eq!(config.bound_radius_px, constants::BOUND_RADIUS_PX);
        assert_eq!(config.channel_masks, ChannelMasks::ARGB8888);
    }

    #[test]
    fn test_json_round_trip() {
        let config = PickerConfig {
            channel_masks: ChannelMasks::RGBA8888_LE,
            wheel_radius: 60.0,
            ..PickerConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_default_builds() {
        let (picker, format) = PickerConfig::default().build().unwrap();
        assert_eq!(picker.draw_rect().left, 0);
        assert_eq!(format.masks(), ChannelMasks::ARGB8888);
    }

    #[test]
    fn test_build_reports_bad_masks() {
        let json = r#"{ "channel_masks": { "alpha": 0, "red": 255, "green": 65280, "blue": 16711680 } }"#;
        let err = PickerConfig::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PixelFormat(PixelFormatError::ZeroMask { .. })
        ));
    }

    #[test]
    fn test_build_reports_bad_layout() {
        let config = PickerConfig {
            center: [10, 10],
            ..PickerConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(ConfigError::Layout(PickerError::OffScreen { .. }))
        ));
    }

    #[test]
    fn test_build_rejects_overflowing_center() {
        let config = PickerConfig::from_json(r#"{ "center": [2147483600, 2147483600] }"#).unwrap();
        assert!(matches!(
            config.build(),
            Err(ConfigError::Layout(PickerError::CoordinateOverflow { .. }))
        ));
    }

    #[test]
    fn test_build_rejects_non_positive_radius() {
        let config = PickerConfig::from_json(r#"{ "wheel_radius": -40.0 }"#).unwrap();
        assert!(matches!(
            config.build(),
            Err(ConfigError::Layout(PickerError::NonPositiveRadius(_)))
        ));
    }

    #[test]
    fn test_initial_color_seeds_picker() {
        let config = PickerConfig::from_json(
            r#"{ "initial_color": { "h": 480.0, "s": 0.25, "v": 0.75 } }"#,
        )
        .unwrap();
        let (picker, _) = config.build().unwrap();
        assert_eq!(picker.hsv(), Hsv::new(120.0, 0.25, 0.75));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PickerConfig::from_json("{ center: "),
            Err(ConfigError::Json(_))
        ));
    }
}
