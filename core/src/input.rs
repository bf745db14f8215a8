use crate::position::SplitPosition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    StepLeft,
    StepRight,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(KeyCommand::StepLeft),
            "ArrowRight" => Some(KeyCommand::StepRight),
            _ => None,
        }
    }

    fn delta(self, step: f64) -> f64 {
        match self {
            KeyCommand::StepLeft => -step,
            KeyCommand::StepRight => step,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSpan {
    pub left: f64,
    pub width: f64,
}

impl FrameSpan {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn position_at(&self, client_x: f64) -> Option<SplitPosition> {
        if self.width.is_nan()
            || self.width <= 0.0
            || !self.left.is_finite()
            || !client_x.is_finite()
        {
            return None;
        }
        Some(SplitPosition::new((client_x - self.left) / self.width))
    }
}

#[derive(Clone, Debug)]
pub struct SliderState {
    position: SplitPosition,
    dragging: bool,
    key_step: f64,
}

impl SliderState {
    pub fn new(position: SplitPosition, key_step: f64) -> Self {
        Self {
            position,
            dragging: false,
            key_step,
        }
    }

    pub fn position(&self) -> SplitPosition {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_position(&mut self, position: SplitPosition) -> SplitPosition {
        self.position = position;
        position
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    pub fn drag_to(&mut self, span: FrameSpan, client_x: f64) -> Option<SplitPosition> {
        if !self.dragging {
            return None;
        }
        let next = span.position_at(client_x)?;
        Some(self.set_position(next))
    }

    pub fn jump_to(&mut self, span: FrameSpan, client_x: f64) -> Option<SplitPosition> {
        if self.dragging {
            return None;
        }
        let next = span.position_at(client_x)?;
        Some(self.set_position(next))
    }

    pub fn apply_key(&mut self, command: KeyCommand) -> SplitPosition {
        let next = self.position.offset(command.delta(self.key_step));
        self.set_position(next)
    }
}
