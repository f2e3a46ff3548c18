//! Hue wheel view.
//!
//! Wraps a [`ColorPicker`]: pointer input goes through `ColorPicker::update`,
//! and the pixels the picker renders are uploaded as an RGBA8 image only when
//! the picker reports them stale.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Hsv;
use crate::constants;
use crate::picker::{ColorPicker, PickResult};
use crate::pixel::PixelFormat;

/// Rendering the picker in this layout lets its buffer go straight into a
/// `peniko::Format::Rgba8` image.
const VIEW_FORMAT: PixelFormat = PixelFormat::RGBA8888_LE;

pub struct ColorWheel {
    id: ViewId,
    held: bool,
    picker: ColorPicker,
    on_change: Option<Box<dyn Fn(Hsv)>>,
    /// Last upload of the picker's pixels; `None` once they go stale.
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates a hue wheel with a saturation/value triangle.
///
/// The view occupies the picker's draw rect in its own coordinate space, so
/// lay the picker out with its bounds starting near the origin.
pub fn color_wheel(color: RwSignal<Hsv>, mut picker: ColorPicker) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let hsv = color.get();
        id.update_state(hsv);
    });

    picker.set_hsv(color.get_untracked());
    let rect = picker.draw_rect();
    let (width, height) = (rect.right as f32, rect.bottom as f32);

    ColorWheel {
        id,
        held: false,
        picker,
        on_change: Some(Box::new(move |hsv| {
            color.set(hsv);
        })),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(move |s| {
        s.width(width)
            .height(height)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColorWheel {
    fn apply(&mut self, result: PickResult) {
        if result.contains(PickResult::REDRAW_PICKER) {
            self.wheel_img = None;
        }
        if !result.is_nothing() {
            self.id.request_paint();
        }
    }

    fn update_from_pointer(&mut self, pos: Point) {
        let result = self.picker.update(pos);
        if result.contains(PickResult::CHANGE_COLOR) {
            if let Some(cb) = &self.on_change {
                cb(self.picker.hsv());
            }
        }
        self.apply(result);
    }

    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() {
            return;
        }

        self.picker.render(&VIEW_FORMAT);
        let rect = self.picker.draw_rect();
        let bytes: Vec<u8> = self
            .picker
            .pixels()
            .iter()
            .flat_map(|p| p.to_le_bytes())
            .collect();
        let blob = Blob::new(Arc::new(bytes));
        let img = peniko::Image::new(
            blob.clone(),
            peniko::Format::Rgba8,
            rect.width() as u32,
            rect.height() as u32,
        );

        self.wheel_hash = blob.id().to_le_bytes().to_vec();
        self.wheel_img = Some(img);
    }
}

/// Ring-shaped cursor: white with a faint dark outline on both sides.
fn paint_cursor(cx: &mut PaintCx, at: Point) {
    let radius = constants::CURSOR_RADIUS;
    cx.stroke(
        &Circle::new(at, radius + 1.0),
        Color::rgba8(0, 0, 0, 80),
        &Stroke::new(1.0),
    );
    cx.stroke(&Circle::new(at, radius), Color::WHITE, &Stroke::new(2.0));
    cx.stroke(
        &Circle::new(at, radius - 1.5),
        Color::rgba8(0, 0, 0, 80),
        &Stroke::new(1.0),
    );
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hsv) = state.downcast::<Hsv>() {
            let result = self.picker.set_hsv(*hsv);
            self.apply(result);
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                if !self.picker.is_inside(e.pos) {
                    return EventPropagation::Continue;
                }
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                self.picker.draw_rect().to_kurbo(),
            );
        }

        paint_cursor(cx, self.picker.hue_cursor());
        paint_cursor(cx, self.picker.sv_cursor());
    }
}
