use std::rc::Rc;

use beforeafter_core::{Layer, Playback, PlaybackError, SyncOutcome, VideoSync};
use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlVideoElement};

const SYNC_EVENTS: [&str; 3] = ["play", "pause", "timeupdate"];

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &JsValue::from_str("name"))
                .ok()
                .and_then(|name| name.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) struct VideoLayer {
    element: HtmlVideoElement,
    layer: Layer,
}

impl VideoLayer {
    pub(crate) fn new(element: HtmlVideoElement, layer: Layer) -> Self {
        Self { element, layer }
    }
}

impl Playback for VideoLayer {
    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    // Rejections (autoplay policy, aborted load) settle later and are only logged.
    fn play(&self) -> Result<(), PlaybackError> {
        let promise = self
            .element
            .play()
            .map_err(|err| PlaybackError::Play(describe(&err)))?;
        let layer = self.layer;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                gloo::console::debug!(format!(
                    "beforeafter: {layer:?} play rejected: {}",
                    describe(&err)
                ));
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<(), PlaybackError> {
        self.element
            .pause()
            .map_err(|err| PlaybackError::Pause(describe(&err)))
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn seek(&self, time: f64) -> Result<(), PlaybackError> {
        Reflect::set(
            &self.element,
            &JsValue::from_str("currentTime"),
            &JsValue::from_f64(time),
        )
        .map(|_| ())
        .map_err(|err| PlaybackError::Seek(describe(&err)))
    }
}

pub(crate) type VideoPair = VideoSync<VideoLayer>;

pub(crate) fn bind_video_sync(
    before: HtmlVideoElement,
    after: HtmlVideoElement,
    tolerance: f64,
) -> (Rc<VideoPair>, Vec<EventListener>) {
    let pair = Rc::new(VideoSync::with_tolerance(
        VideoLayer::new(before.clone(), Layer::Before),
        VideoLayer::new(after.clone(), Layer::After),
        tolerance,
    ));
    let mut listeners = Vec::with_capacity(SYNC_EVENTS.len() * 2);
    for (element, layer) in [(before, Layer::Before), (after, Layer::After)] {
        for event_type in SYNC_EVENTS {
            let weak = Rc::downgrade(&pair);
            listeners.push(EventListener::new(&element, event_type, move |event: &Event| {
                let Some(pair) = weak.upgrade() else {
                    return;
                };
                let outcome = match event.type_().as_str() {
                    "play" => pair.on_play(layer),
                    "pause" => pair.on_pause(layer),
                    _ => pair.on_time_update(layer),
                };
                if let SyncOutcome::Failed { layer, error } = outcome {
                    gloo::console::debug!(format!(
                        "beforeafter: {layer:?} sync failed: {error}"
                    ));
                }
            }));
        }
    }
    (pair, listeners)
}
