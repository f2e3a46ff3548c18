//! Standalone demo: opens a window with the hue wheel picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_wheel::{wheel_picker, Hsv, PickerConfig};

fn main() {
    env_logger::init();

    let config = PickerConfig {
        initial_color: Hsv::new(210.0, 0.6, 0.9),
        ..PickerConfig::default()
    };
    let color = RwSignal::new(config.initial_color);

    floem::Application::new()
        .window(
            move |_| {
                let picker = wheel_picker(color, &config).expect("default picker layout");
                v_stack((
                    picker,
                    label(move || {
                        let hsv = color.get();
                        format!("H {:.0}  S {:.0}%  V {:.0}%", hsv.h, hsv.s * 100.0, hsv.v * 100.0)
                    }),
                ))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 260.0))
                    .title("floem-wheel"),
            ),
        )
        .run();
}
