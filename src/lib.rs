mod boot;
mod dom;
mod input;
mod render;
mod runtime;
mod slider;
mod video;

use wasm_bindgen::prelude::*;
use web_sys::Element;

pub use beforeafter_core::{
    ClipStrategy, GuardState, Part, PlaybackError, SliderConfig, SliderError, SplitPosition,
};
pub use runtime::{
    discover, discover_with_config, init, init_with_config, release_detached, slider_for,
};
pub use slider::Slider;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    boot::expose_global();
    runtime::schedule_discovery();
}

#[wasm_bindgen(js_name = initBeforeAfter)]
pub fn init_before_after(container: Element) {
    if let Err(err) = init(&container) {
        gloo::console::debug!(format!("beforeafter: {err}"));
    }
}
