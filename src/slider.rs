use std::cell::RefCell;
use std::rc::{Rc, Weak};

use beforeafter_core::{
    ClipStrategy, GuardState, KeyCommand, MediaProfile, SliderConfig, SliderError, SliderState,
    SplitPosition,
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use crate::dom::SliderParts;
use crate::input::{frame_span, pointer_client_x, DragCapture};
use crate::render::{detect_clip_strategy, ClipRenderer};
use crate::video::{bind_video_sync, VideoPair};

pub struct Slider {
    parts: SliderParts,
    config: SliderConfig,
    renderer: ClipRenderer,
    media: MediaProfile,
    state: RefCell<SliderState>,
    capture: RefCell<Option<DragCapture>>,
    listeners: RefCell<Vec<EventListener>>,
    video_sync: Option<Rc<VideoPair>>,
}

impl Slider {
    pub(crate) fn mount(
        container: &Element,
        config: &SliderConfig,
    ) -> Result<Rc<Self>, SliderError> {
        let parts = SliderParts::locate(container, config)?;
        let media = parts.media_profile();
        let renderer = ClipRenderer::new(
            config.clip_strategy.unwrap_or_else(detect_clip_strategy),
            parts.container.clone().into(),
            parts.after.clone(),
            parts.handle.clone(),
            parts.knob.clone(),
            config.position_attribute.clone(),
        );
        let initial = container.get_attribute(&config.initial_attribute);
        let state = SliderState::new(
            SplitPosition::from_attribute(initial.as_deref()),
            config.key_step,
        );

        let mut listeners = Vec::new();
        let video_sync = if media.both_videos() {
            parts.videos().map(|(before, after)| {
                let (pair, video_listeners) =
                    bind_video_sync(before, after, config.time_tolerance);
                listeners.extend(video_listeners);
                pair
            })
        } else {
            None
        };

        let slider = Rc::new(Self {
            parts,
            config: config.clone(),
            renderer,
            media,
            state: RefCell::new(state),
            capture: RefCell::new(None),
            listeners: RefCell::new(listeners),
            video_sync,
        });
        slider.render();
        if !slider.parts.container.has_attribute("tabindex") {
            slider.parts.container.set_tab_index(0);
        }
        if media.has_animated_layer() {
            let _ = slider
                .parts
                .container
                .set_attribute(&slider.config.animated_attribute, "true");
        }
        slider.install_listeners();
        Ok(slider)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        for event_type in ["mousedown", "touchstart"] {
            let weak = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                &self.parts.handle,
                event_type,
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    if let Some(slider) = weak.upgrade() {
                        slider.begin_drag(event);
                    }
                },
            ));
        }

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.parts.frame, "click", move |event: &Event| {
            if let Some(slider) = weak.upgrade() {
                slider.jump(event);
            }
        }));

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new_with_options(
            &self.parts.container,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                if let Some(slider) = weak.upgrade() {
                    slider.step(event);
                }
            },
        ));

        self.listeners.borrow_mut().extend(listeners);
    }

    fn render(&self) {
        self.renderer.apply(self.state.borrow().position());
    }

    fn begin_drag(self: &Rc<Self>, event: &Event) {
        event.prevent_default();
        self.state.borrow_mut().begin_drag();
        let _ = self
            .parts
            .container
            .class_list()
            .add_1(&self.config.dragging_class);
        self.drag_move(event);

        let Some(window) = web_sys::window() else {
            return;
        };
        let on_move = {
            let weak: Weak<Self> = Rc::downgrade(self);
            Rc::new(move |event: &Event| {
                if let Some(slider) = weak.upgrade() {
                    slider.drag_move(event);
                }
            })
        };
        let on_release = {
            let weak: Weak<Self> = Rc::downgrade(self);
            Rc::new(move |_event: &Event| {
                if let Some(slider) = weak.upgrade() {
                    slider.end_drag();
                }
            })
        };
        let capture = DragCapture::acquire(&window, on_move, on_release);
        let previous = self.capture.borrow_mut().replace(capture);
        drop(previous);
    }

    fn drag_move(&self, event: &Event) {
        if !self.state.borrow().is_dragging() {
            return;
        }
        if event.cancelable() {
            event.prevent_default();
        }
        let Some(client_x) = pointer_client_x(event) else {
            return;
        };
        let span = frame_span(&self.parts.frame);
        let next = self.state.borrow_mut().drag_to(span, client_x);
        if let Some(position) = next {
            self.renderer.apply(position);
        }
    }

    fn end_drag(&self) {
        self.state.borrow_mut().end_drag();
        let _ = self
            .parts
            .container
            .class_list()
            .remove_1(&self.config.dragging_class);
        let capture = self.capture.borrow_mut().take();
        drop(capture);
    }

    fn jump(&self, event: &Event) {
        let Some(client_x) = pointer_client_x(event) else {
            return;
        };
        let span = frame_span(&self.parts.frame);
        let next = self.state.borrow_mut().jump_to(span, client_x);
        if let Some(position) = next {
            self.renderer.apply(position);
        }
    }

    fn step(&self, event: &Event) {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(command) = KeyCommand::from_key(&event.key()) else {
            return;
        };
        event.prevent_default();
        let position = self.state.borrow_mut().apply_key(command);
        self.renderer.apply(position);
    }

    pub fn container(&self) -> &HtmlElement {
        &self.parts.container
    }

    pub fn position(&self) -> f64 {
        self.state.borrow().position().get()
    }

    pub fn percent(&self) -> f64 {
        self.state.borrow().position().percent()
    }

    pub fn set_position(&self, value: f64) {
        let position = self
            .state
            .borrow_mut()
            .set_position(SplitPosition::new(value));
        self.renderer.apply(position);
    }

    pub fn is_dragging(&self) -> bool {
        self.state.borrow().is_dragging()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn has_drag_capture(&self) -> bool {
        self.capture.borrow().is_some()
    }

    pub fn has_animated_layer(&self) -> bool {
        self.media.has_animated_layer()
    }

    pub fn syncs_video(&self) -> bool {
        self.video_sync.is_some()
    }

    pub fn video_guard_state(&self) -> Option<GuardState> {
        self.video_sync.as_ref().map(|pair| pair.guard_state())
    }

    pub fn clip_strategy(&self) -> ClipStrategy {
        self.renderer.strategy()
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.parts.container.is_connected()
    }
}
