use crate::position::KEY_STEP;
use crate::render::ClipStrategy;
use crate::sync::TIME_TOLERANCE_SECS;

#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub root_selector: String,
    pub frame_selector: String,
    pub before_selector: String,
    pub after_selector: String,
    pub handle_selector: String,
    pub knob_selector: String,
    pub dragging_class: String,
    pub initial_attribute: String,
    pub position_attribute: String,
    pub animated_attribute: String,
    pub key_step: f64,
    pub time_tolerance: f64,
    // `None` probes `CSS.supports` at init.
    pub clip_strategy: Option<ClipStrategy>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            root_selector: ".ba".to_string(),
            frame_selector: ".frame".to_string(),
            before_selector: "[data-ba-before]".to_string(),
            after_selector: "[data-ba-after]".to_string(),
            handle_selector: ".handle".to_string(),
            knob_selector: ".knob".to_string(),
            dragging_class: "ba-dragging".to_string(),
            initial_attribute: "data-ba-initial".to_string(),
            position_attribute: "data-ba-pos".to_string(),
            animated_attribute: "data-ba-gif".to_string(),
            key_step: KEY_STEP,
            time_tolerance: TIME_TOLERANCE_SECS,
            clip_strategy: None,
        }
    }
}
