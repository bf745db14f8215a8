use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    Frame,
    Before,
    After,
    Handle,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Part::Frame => "frame",
            Part::Before => "before layer",
            Part::After => "after layer",
            Part::Handle => "handle",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SliderError {
    #[error("slider markup is missing its {0}")]
    MissingPart(Part),
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    #[error("play request rejected: {0}")]
    Play(String),
    #[error("pause failed: {0}")]
    Pause(String),
    #[error("seek rejected: {0}")]
    Seek(String),
}
