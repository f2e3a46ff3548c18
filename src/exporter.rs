//! Export selection: a dragged rectangle on the canvas plus an upscale
//! factor, and the blank buffer the canvas renderer fills for it.

use floem::kurbo::Point;

use crate::color::SolidColor;
use crate::geometry::ScreenRect;
use crate::pixel::PixelFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExporterState {
    #[default]
    Empty,
    /// The pointer is still dragging out the rectangle.
    Growing,
    Selected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exporter {
    pivot: (i32, i32),
    needle: (i32, i32),
    scale: i32,
    state: ExporterState,
}

impl Default for Exporter {
    fn default() -> Self {
        Self {
            pivot: (0, 0),
            needle: (0, 0),
            scale: 1,
            state: ExporterState::Empty,
        }
    }
}

fn to_pixel(point: Point) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExporterState {
        self.state
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Start a new selection at `point`, dropping any previous one.
    pub fn begin(&mut self, point: Point) {
        self.pivot = to_pixel(point);
        self.needle = self.pivot;
        self.state = ExporterState::Growing;
    }

    pub fn drag(&mut self, point: Point) {
        if self.state == ExporterState::Growing {
            self.needle = to_pixel(point);
        }
    }

    /// Finish dragging. An empty rectangle leaves nothing selected.
    pub fn finish(&mut self) -> ExporterState {
        if self.state == ExporterState::Growing {
            self.state = if self.pivot.0 != self.needle.0 && self.pivot.1 != self.needle.1 {
                ExporterState::Selected
            } else {
                ExporterState::Empty
            };
        }
        self.state
    }

    /// Set the upscale factor, clamped to `1..=view_scale / 2`.
    ///
    /// When the view is zoomed in too far for any upscaling the factor
    /// stays at 1.
    pub fn set_scale(&mut self, requested: i32, view_scale: i32) -> i32 {
        let max_scale = (view_scale / 2).max(1);
        self.scale = requested.clamp(1, max_scale);
        if self.scale != requested {
            log::debug!("export scale {requested} clamped to {}", self.scale);
        }
        self.scale
    }

    /// The selected canvas rectangle, normalized so `left <= right`.
    pub fn raster_rect(&self) -> Option<ScreenRect> {
        if self.state != ExporterState::Selected {
            return None;
        }
        Some(ScreenRect {
            left: self.pivot.0.min(self.needle.0),
            top: self.pivot.1.min(self.needle.1),
            right: self.pivot.0.max(self.needle.0),
            bottom: self.pivot.1.max(self.needle.1),
        })
    }

    /// Size of the exported image: the selection times the scale factor.
    pub fn output_size(&self) -> Option<(u32, u32)> {
        let rect = self.raster_rect()?;
        let scale = self.scale as u32;
        Some((rect.width() as u32 * scale, rect.height() as u32 * scale))
    }

    /// An output buffer pre-filled with `background`, in `format`.
    pub fn blank_buffer(&self, format: &PixelFormat, background: SolidColor) -> Option<Vec<u32>> {
        let (w, h) = self.output_size()?;
        Some(vec![format.encode(background); w as usize * h as usize])
    }
}
