use beforeafter_core::{ClipFrame, ClipStrategy, SplitPosition};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

const INSET_PROBE_PROPERTY: &str = "clip-path";
const INSET_PROBE_VALUE: &str = "inset(0 50% 0 0)";

pub(crate) fn detect_clip_strategy() -> ClipStrategy {
    ClipStrategy::select(inset_clip_supported().unwrap_or(false))
}

fn inset_clip_supported() -> Option<bool> {
    let window = web_sys::window()?;
    let css = Reflect::get(&window, &JsValue::from_str("CSS")).ok()?;
    if css.is_null() || css.is_undefined() {
        return None;
    }
    let supports = Reflect::get(&css, &JsValue::from_str("supports"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    supports
        .call2(
            &css,
            &JsValue::from_str(INSET_PROBE_PROPERTY),
            &JsValue::from_str(INSET_PROBE_VALUE),
        )
        .ok()?
        .as_bool()
}

pub(crate) struct ClipRenderer {
    strategy: ClipStrategy,
    container: Element,
    after: HtmlElement,
    handle: HtmlElement,
    knob: Option<HtmlElement>,
    position_attribute: String,
}

impl ClipRenderer {
    pub(crate) fn new(
        strategy: ClipStrategy,
        container: Element,
        after: HtmlElement,
        handle: HtmlElement,
        knob: Option<HtmlElement>,
        position_attribute: String,
    ) -> Self {
        Self {
            strategy,
            container,
            after,
            handle,
            knob,
            position_attribute,
        }
    }

    pub(crate) fn strategy(&self) -> ClipStrategy {
        self.strategy
    }

    pub(crate) fn apply(&self, position: SplitPosition) -> ClipFrame {
        let frame = ClipFrame::new(position, self.strategy);
        let _ = self
            .after
            .style()
            .set_property(frame.after.property(), frame.after.value());
        let _ = self.handle.style().set_property("left", &frame.handle_left);
        if let Some(knob) = self.knob.as_ref() {
            let _ = knob.style().set_property("left", frame.knob_left);
        }
        let _ = self
            .container
            .set_attribute(&self.position_attribute, &frame.marker);
        frame
    }
}
