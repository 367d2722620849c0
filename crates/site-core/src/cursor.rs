//! Trailing-dot interpolation for the custom cursor. Each dot eases toward
//! the live pointer position with a per-index lag, so the trail stretches
//! while the pointer moves and collapses onto it at rest.

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::TRAIL_LEN;

#[derive(Clone, Copy, Debug)]
pub struct TrailDot {
    pub position: Vec2,
    delay: f32,
}

pub struct CursorTrail {
    dots: SmallVec<[TrailDot; TRAIL_LEN]>,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTrail {
    pub fn new() -> Self {
        let dots = (0..TRAIL_LEN)
            .map(|i| TrailDot {
                position: Vec2::ZERO,
                delay: (i * 2) as f32,
            })
            .collect();
        Self { dots }
    }

    pub fn dots(&self) -> &[TrailDot] {
        &self.dots
    }

    /// Advance every dot one frame toward `target`.
    pub fn step(&mut self, target: Vec2) {
        for dot in &mut self.dots {
            dot.position += (target - dot.position) / (dot.delay + 2.0);
        }
    }

    /// Rendering alpha for the dot at `index`; the head is strongest.
    pub fn opacity(index: usize) -> f32 {
        (TRAIL_LEN - index) as f32 / 10.0
    }

    /// Rendering scale for the dot at `index`; matches the alpha falloff.
    pub fn scale(index: usize) -> f32 {
        Self::opacity(index)
    }
}
