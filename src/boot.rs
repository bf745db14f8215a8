use std::cell::Cell;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::runtime;

const GLOBAL_INIT: &str = "initBeforeAfter";

thread_local! {
    static GLOBAL_EXPOSED: Cell<bool> = Cell::new(false);
}

pub(crate) fn expose_global() {
    let already_exposed = GLOBAL_EXPOSED.with(|flag| flag.replace(true));
    if already_exposed {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let init = Closure::<dyn Fn(JsValue)>::new(|value: JsValue| {
        if let Ok(container) = value.dyn_into::<Element>() {
            let _ = runtime::init(&container);
        }
    });
    if Reflect::set(&window, &JsValue::from_str(GLOBAL_INIT), init.as_ref()).is_err() {
        gloo::console::warn!("beforeafter: unable to publish window.initBeforeAfter");
        return;
    }
    init.forget();
}
