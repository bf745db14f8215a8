pub mod config;
pub mod error;
pub mod input;
pub mod media;
pub mod position;
pub mod render;
pub mod sync;

pub use config::SliderConfig;
pub use error::{Part, PlaybackError, SliderError};
pub use input::{FrameSpan, KeyCommand, SliderState};
pub use media::{is_animated_image, MediaKind, MediaLayer, MediaProfile};
pub use position::{SplitPosition, DEFAULT_POSITION, KEY_STEP};
pub use render::{AfterLayerStyle, ClipFrame, ClipStrategy};
pub use sync::{
    GuardState, GuardToken, Layer, Playback, SyncGuard, SyncOutcome, VideoSync,
    TIME_TOLERANCE_SECS,
};
