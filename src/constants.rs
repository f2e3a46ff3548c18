//! Default layout, cursor and styling constants for the picker.

/// Bounding radius of the default picker, in pixels
pub const BOUND_RADIUS_PX: i32 = 100;

/// Distance from the center to the middle of the hue ring
pub const WHEEL_RADIUS: f64 = 88.0;

/// Half the thickness of the hue ring
pub const WHEEL_HALF_WIDTH: f64 = 10.0;

/// Cursor circle radius drawn on the ring and the triangle
pub const CURSOR_RADIUS: f64 = 6.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;
