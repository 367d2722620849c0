//! 360° team showcase: rotation state and the capability seam between the
//! controls and whatever actually plays (a video element, or the procedural
//! canvas placeholder when the media fails to load).

use crate::constants::{AUTO_ROTATE_RATE, HOVER_ROTATE_RATE, MANUAL_ROTATE_STEP};

/// Capability interface every showcase surface provides. Resolved once at
/// setup; the controls never re-inspect what kind of surface they drive.
pub trait PlaybackSurface {
    fn play(&self);
    fn pause(&self);
    fn seek(&self, time_sec: f64);
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
    fn set_rate(&self, rate: f64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateDirection {
    Left,
    Right,
}

/// Seek target for one manual rotation step, wrapping across the loop
/// boundary in either direction.
pub fn manual_seek_target(current: f64, duration: f64, direction: RotateDirection) -> f64 {
    match direction {
        RotateDirection::Right => {
            let t = current + MANUAL_ROTATE_STEP;
            if t >= duration {
                0.0
            } else {
                t
            }
        }
        RotateDirection::Left => {
            let t = current - MANUAL_ROTATE_STEP;
            if t < 0.0 {
                let wrapped = duration + t;
                if wrapped < 0.0 {
                    0.0
                } else {
                    wrapped
                }
            } else {
                t
            }
        }
    }
}

/// Per-member rotation mode. Hover slows the spin without changing the
/// auto/manual mode underneath.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationState {
    pub auto: bool,
    pub hovered: bool,
}

impl RotationState {
    pub fn new() -> Self {
        Self {
            auto: true,
            hovered: false,
        }
    }

    /// Playback rate the surface should run at, or `None` when paused.
    pub fn rate(&self) -> Option<f64> {
        if !self.auto {
            return None;
        }
        Some(if self.hovered {
            HOVER_ROTATE_RATE
        } else {
            AUTO_ROTATE_RATE
        })
    }

    /// Toggle auto rotation; returns the new mode.
    pub fn toggle_auto(&mut self) -> bool {
        self.auto = !self.auto;
        self.auto
    }

    /// A manual step always drops out of auto rotation.
    pub fn on_manual_step(&mut self) {
        self.auto = false;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}
