use std::cell::{Cell, RefCell};
use std::rc::Rc;

use beforeafter_core::{SliderConfig, SliderError};
use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use crate::slider::Slider;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DiscoveryState {
    ColdStart,
    WaitingForContent,
    Done,
}

thread_local! {
    static SLIDERS: RefCell<Vec<Rc<Slider>>> = RefCell::new(Vec::new());
    static DISCOVERY: Cell<DiscoveryState> = Cell::new(DiscoveryState::ColdStart);
    static CONTENT_LOADED: RefCell<Option<EventListener>> = RefCell::new(None);
}

pub(crate) fn discovery_state() -> DiscoveryState {
    DISCOVERY.with(|state| state.get())
}

pub fn init_with_config(
    container: &Element,
    config: &SliderConfig,
) -> Result<Rc<Slider>, SliderError> {
    if let Some(existing) = slider_for(container) {
        return Ok(existing);
    }
    let slider = Slider::mount(container, config)?;
    SLIDERS.with(|sliders| sliders.borrow_mut().push(slider.clone()));
    Ok(slider)
}

pub fn init(container: &Element) -> Result<Rc<Slider>, SliderError> {
    init_with_config(container, &SliderConfig::default())
}

pub fn slider_for(container: &Element) -> Option<Rc<Slider>> {
    SLIDERS.with(|sliders| {
        sliders
            .borrow()
            .iter()
            .find(|slider| slider.container().is_same_node(Some(container.as_ref())))
            .cloned()
    })
}

pub fn release_detached() -> usize {
    let released: Vec<Rc<Slider>> = SLIDERS.with(|sliders| {
        let mut sliders = sliders.borrow_mut();
        let (kept, released) = sliders.drain(..).partition(|slider| slider.is_attached());
        *sliders = kept;
        released
    });
    released.len()
}

pub fn discover_with_config(config: &SliderConfig) -> usize {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return 0;
    };
    let Ok(nodes) = document.query_selector_all(&config.root_selector) else {
        gloo::console::warn!(format!(
            "beforeafter: invalid root selector {}",
            config.root_selector
        ));
        return 0;
    };
    let mut bound = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        match init_with_config(&element, config) {
            Ok(_) => bound += 1,
            Err(err) => gloo::console::debug!(format!("beforeafter: skipped container: {err}")),
        }
    }
    gloo::console::debug!(format!(
        "beforeafter: {bound} of {} containers bound",
        nodes.length()
    ));
    bound
}

pub fn discover() -> usize {
    discover_with_config(&SliderConfig::default())
}

fn content_loaded(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .map(|state| state != "loading")
        .unwrap_or(true)
}

pub(crate) fn schedule_discovery() {
    if discovery_state() != DiscoveryState::ColdStart {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if content_loaded(&document) {
        DISCOVERY.with(|state| state.set(DiscoveryState::Done));
        discover();
        return;
    }
    DISCOVERY.with(|state| state.set(DiscoveryState::WaitingForContent));
    let listener = EventListener::once(&document, "DOMContentLoaded", |_event: &Event| {
        DISCOVERY.with(|state| state.set(DiscoveryState::Done));
        discover();
        let listener = CONTENT_LOADED.with(|slot| slot.borrow_mut().take());
        drop(listener);
    });
    CONTENT_LOADED.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
}
