use crate::position::SplitPosition;

pub const KNOB_LEFT: &str = "50%";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipStrategy {
    InsetClip,
    WidthFallback,
}

impl ClipStrategy {
    pub fn select(inset_supported: bool) -> Self {
        if inset_supported {
            ClipStrategy::InsetClip
        } else {
            ClipStrategy::WidthFallback
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AfterLayerStyle {
    ClipPath(String),
    Width(String),
}

impl AfterLayerStyle {
    pub fn property(&self) -> &'static str {
        match self {
            AfterLayerStyle::ClipPath(_) => "clip-path",
            AfterLayerStyle::Width(_) => "width",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            AfterLayerStyle::ClipPath(value) | AfterLayerStyle::Width(value) => value,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClipFrame {
    pub percent: f64,
    pub after: AfterLayerStyle,
    pub handle_left: String,
    pub knob_left: &'static str,
    pub marker: String,
}

impl ClipFrame {
    pub fn new(position: SplitPosition, strategy: ClipStrategy) -> Self {
        let percent = position.percent();
        let after = match strategy {
            ClipStrategy::InsetClip => {
                AfterLayerStyle::ClipPath(format!("inset(0 {}% 0 0)", 100.0 - percent))
            }
            ClipStrategy::WidthFallback => AfterLayerStyle::Width(format!("{percent}%")),
        };
        Self {
            percent,
            after,
            handle_left: format!("{percent}%"),
            knob_left: KNOB_LEFT,
            marker: percent.to_string(),
        }
    }
}
