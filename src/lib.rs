//! # floem-wheel
//!
//! A hue wheel color picker for [Floem](https://github.com/lapce/floem).
//!
//! The picker is a ring that selects hue around a triangle that selects
//! saturation and value. Everything below the view is plain Rust and usable
//! without a window: HSV/sRGB conversions, a mask-driven packed pixel codec,
//! ring and triangle hit testing, and the [`ColorPicker`] state that turns
//! pointer positions into colors and redraw hints.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_wheel::{wheel_picker, Hsv, PickerConfig};
//!
//! let color = RwSignal::new(Hsv::new(210.0, 0.6, 0.9));
//! let picker = wheel_picker(color, &PickerConfig::default()).unwrap();
//! // Use `picker` in your Floem view tree.
//! ```

mod color;
mod color_wheel;
mod config;
mod constants;
mod error;
mod exporter;
mod geometry;
mod math;
mod picker;
mod pixel;

pub use color::{Hsv, SolidColor};
pub use color_wheel::{color_wheel, ColorWheel};
pub use config::PickerConfig;
pub use error::{ConfigError, PickerError, PixelFormatError};
pub use exporter::{Exporter, ExporterState};
pub use geometry::{Annulus, Barycentric, Contribution, Region, ScreenRect, Triangle};
pub use math::{hsv_to_rgb, normalize_hue, rgb_to_hsv, srgb_channel_to_linear, srgb_to_linear};
pub use picker::{ColorPicker, PickResult, PickerLayout};
pub use pixel::{derive_shifts, Channel, ChannelMasks, ChannelShifts, PixelFormat};

use floem::prelude::*;
use floem::reactive::RwSignal;

/// Creates the picker view from a configuration.
///
/// The picker reads from and writes to `color`, which takes precedence over
/// the configured initial color. External changes to the signal move the
/// cursors, and picks update the signal. The channel masks are validated
/// like the layout, but the view itself always renders RGBA8.
pub fn wheel_picker(
    color: RwSignal<Hsv>,
    config: &PickerConfig,
) -> Result<impl IntoView, ConfigError> {
    let (picker, _format) = config.build()?;
    Ok(container(color_wheel(color, picker)).style(|s| s.padding(constants::PADDING)))
}
