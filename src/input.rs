use std::rc::Rc;

use beforeafter_core::FrameSpan;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomRect, Event, HtmlElement, MouseEvent, TouchEvent, Window};

// web-sys exposes `clientX` as an integer; the DOM value can carry a
// sub-pixel fraction, so it is read through `Reflect` first.
fn fractional_client_x(source: &JsValue) -> Option<f64> {
    Reflect::get(source, &JsValue::from_str("clientX"))
        .ok()?
        .as_f64()
        .filter(|value| value.is_finite())
}

pub(crate) fn pointer_client_x(event: &Event) -> Option<f64> {
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touch = touch_event
            .touches()
            .get(0)
            .or_else(|| touch_event.changed_touches().get(0))?;
        return fractional_client_x(&touch).or(Some(touch.client_x() as f64));
    }
    let mouse_event = event.dyn_ref::<MouseEvent>()?;
    fractional_client_x(mouse_event).or(Some(mouse_event.client_x() as f64))
}

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for HtmlElement {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

pub(crate) fn frame_span(element: &impl HasClientRect) -> FrameSpan {
    let rect = element.client_rect();
    FrameSpan::new(rect.left(), rect.width())
}

const CAPTURE_MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
const CAPTURE_RELEASE_EVENTS: [&str; 4] = ["mouseup", "touchend", "touchcancel", "blur"];

pub(crate) struct DragCapture {
    _listeners: Vec<EventListener>,
}

impl DragCapture {
    pub(crate) fn acquire(
        window: &Window,
        on_move: Rc<dyn Fn(&Event)>,
        on_release: Rc<dyn Fn(&Event)>,
    ) -> Self {
        let mut listeners =
            Vec::with_capacity(CAPTURE_MOVE_EVENTS.len() + CAPTURE_RELEASE_EVENTS.len());
        for event_type in CAPTURE_MOVE_EVENTS {
            let on_move = on_move.clone();
            listeners.push(EventListener::new_with_options(
                window,
                event_type,
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| on_move(event),
            ));
        }
        for event_type in CAPTURE_RELEASE_EVENTS {
            let on_release = on_release.clone();
            listeners.push(EventListener::new(window, event_type, move |event: &Event| {
                on_release(event)
            }));
        }
        Self {
            _listeners: listeners,
        }
    }
}
