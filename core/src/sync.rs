use std::cell::Cell;
use std::rc::Rc;

use crate::error::PlaybackError;

pub const TIME_TOLERANCE_SECS: f64 = 0.05;

pub trait Playback {
    fn is_paused(&self) -> bool;
    fn play(&self) -> Result<(), PlaybackError>;
    fn pause(&self) -> Result<(), PlaybackError>;
    fn current_time(&self) -> f64;
    fn seek(&self, time: f64) -> Result<(), PlaybackError>;
}

impl<P: Playback + ?Sized> Playback for Rc<P> {
    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }

    fn play(&self) -> Result<(), PlaybackError> {
        (**self).play()
    }

    fn pause(&self) -> Result<(), PlaybackError> {
        (**self).pause()
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn seek(&self, time: f64) -> Result<(), PlaybackError> {
        (**self).seek(time)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Before,
    After,
}

impl Layer {
    pub fn other(self) -> Self {
        match self {
            Layer::Before => Layer::After,
            Layer::After => Layer::Before,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Propagating,
}

#[derive(Debug)]
pub struct SyncGuard {
    state: Cell<GuardState>,
}

impl SyncGuard {
    pub fn new() -> Self {
        Self {
            state: Cell::new(GuardState::Idle),
        }
    }

    pub fn state(&self) -> GuardState {
        self.state.get()
    }

    pub fn enter(&self) -> Option<GuardToken<'_>> {
        match self.state.get() {
            GuardState::Propagating => None,
            GuardState::Idle => {
                self.state.set(GuardState::Propagating);
                Some(GuardToken { guard: self })
            }
        }
    }
}

impl Default for SyncGuard {
    fn default() -> Self {
        Self::new()
    }
}

// Holding the token marks a propagation in flight. Events the driven video
// raises meanwhile are dropped, so each chain ends after one hop.
pub struct GuardToken<'a> {
    guard: &'a SyncGuard,
}

impl Drop for GuardToken<'_> {
    fn drop(&mut self) {
        self.guard.state.set(GuardState::Idle);
    }
}

#[derive(Debug, PartialEq)]
pub enum SyncOutcome {
    Suppressed,
    InSync,
    Played(Layer),
    Paused(Layer),
    Seeked { layer: Layer, time: f64 },
    Failed { layer: Layer, error: PlaybackError },
}

pub struct VideoSync<P> {
    before: P,
    after: P,
    guard: SyncGuard,
    tolerance: f64,
}

impl<P: Playback> VideoSync<P> {
    pub fn new(before: P, after: P) -> Self {
        Self::with_tolerance(before, after, TIME_TOLERANCE_SECS)
    }

    pub fn with_tolerance(before: P, after: P, tolerance: f64) -> Self {
        Self {
            before,
            after,
            guard: SyncGuard::new(),
            tolerance,
        }
    }

    pub fn layer(&self, layer: Layer) -> &P {
        match layer {
            Layer::Before => &self.before,
            Layer::After => &self.after,
        }
    }

    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    pub fn on_play(&self, source: Layer) -> SyncOutcome {
        let Some(_token) = self.guard.enter() else {
            return SyncOutcome::Suppressed;
        };
        let target = source.other();
        let video = self.layer(target);
        if !video.is_paused() {
            return SyncOutcome::InSync;
        }
        match video.play() {
            Ok(()) => SyncOutcome::Played(target),
            Err(error) => SyncOutcome::Failed {
                layer: target,
                error,
            },
        }
    }

    pub fn on_pause(&self, source: Layer) -> SyncOutcome {
        let Some(_token) = self.guard.enter() else {
            return SyncOutcome::Suppressed;
        };
        let target = source.other();
        let video = self.layer(target);
        if video.is_paused() {
            return SyncOutcome::InSync;
        }
        match video.pause() {
            Ok(()) => SyncOutcome::Paused(target),
            Err(error) => SyncOutcome::Failed {
                layer: target,
                error,
            },
        }
    }

    pub fn on_time_update(&self, source: Layer) -> SyncOutcome {
        if self.guard.state() == GuardState::Propagating {
            return SyncOutcome::Suppressed;
        }
        let target = source.other();
        let time = self.layer(source).current_time();
        let drift = (self.layer(target).current_time() - time).abs();
        if drift.is_nan() || drift <= self.tolerance {
            return SyncOutcome::InSync;
        }
        let Some(_token) = self.guard.enter() else {
            return SyncOutcome::Suppressed;
        };
        match self.layer(target).seek(time) {
            Ok(()) => SyncOutcome::Seeked {
                layer: target,
                time,
            },
            Err(error) => SyncOutcome::Failed {
                layer: target,
                error,
            },
        }
    }
}
