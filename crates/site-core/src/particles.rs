//! Hero particle field: per-frame state evolution for the neural-network
//! canvas effect. Pure simulation only; drawing lives in the web frontend.

use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

use crate::constants::{
    Rgb, ACCENT, ADAPTIVE_FPS_FLOOR, ADAPTIVE_MIN_PARTICLES, BACKGROUND,
    DEFAULT_CONNECTION_DISTANCE, DEFAULT_CONNECTION_OPACITY, DEFAULT_MOUSE_RADIUS,
    DEFAULT_PARTICLE_COUNT, DEFAULT_PARTICLE_OPACITY, DEFAULT_PARTICLE_SIZE,
    DEFAULT_PARTICLE_SPEED, REDUCED_SPEED_FACTOR,
};

// Per-frame tuning. The attraction impulse and the relaxation both use the
// same 2% rate; damping is applied unconditionally after integration.
const ATTRACT_GAIN: f32 = 0.02;
const RELAX_RATE: f32 = 0.02;
const DAMPING: f32 = 0.99;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub particle_count: usize,
    pub connection_distance: f32,
    pub mouse_radius: f32,
    pub particle_speed: f32,
    pub particle_size: f32,
    pub connection_opacity: f32,
    pub particle_opacity: f32,
    pub accent_color: Rgb,
    pub background_color: Rgb,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            connection_distance: DEFAULT_CONNECTION_DISTANCE,
            mouse_radius: DEFAULT_MOUSE_RADIUS,
            particle_speed: DEFAULT_PARTICLE_SPEED,
            particle_size: DEFAULT_PARTICLE_SIZE,
            connection_opacity: DEFAULT_CONNECTION_OPACITY,
            particle_opacity: DEFAULT_PARTICLE_OPACITY,
            accent_color: ACCENT,
            background_color: BACKGROUND,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Unperturbed drift; velocity relaxes back toward this when the pointer
    /// is not pulling. Sampled independently of the initial velocity.
    pub base_velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub position: Vec2,
    /// True while the pointer has moved within the activity window.
    pub active: bool,
}

/// Proximity connection between the particles at indices `a` and `b`.
/// Alpha falls off linearly with distance, reaching 0 at the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

pub struct ParticleEngine {
    pub particles: Vec<Particle>,
    pub pointer: PointerState,
    config: EngineConfig,
    reduced: bool,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleEngine {
    /// A zero-area viewport yields an empty field; that is the degenerate
    /// mode, not an error.
    pub fn new(width: f32, height: f32, config: EngineConfig, seed: u64) -> Self {
        let mut engine = Self {
            particles: Vec::new(),
            pointer: PointerState::default(),
            config,
            reduced: false,
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        };
        engine.regenerate();
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Particle speed after any reduced-motion scaling.
    pub fn effective_speed(&self) -> f32 {
        if self.reduced {
            self.config.particle_speed * REDUCED_SPEED_FACTOR
        } else {
            self.config.particle_speed
        }
    }

    /// Particle count after any reduced-motion scaling.
    pub fn effective_count(&self) -> usize {
        if self.reduced {
            self.config.particle_count / 2
        } else {
            self.config.particle_count
        }
    }

    /// Recompute dimensions and rebuild the whole particle set. Prior
    /// particle state is dropped; the field is cheap to respawn.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    /// Apply or clear the reduced-motion profile. Application is tracked
    /// explicitly so repeated calls with the same flag do not compound.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        if self.reduced == enabled {
            return;
        }
        self.reduced = enabled;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.particles.clear();
        if self.width <= 0.0 || self.height <= 0.0 {
            log::warn!(
                "particle field degenerate at {}x{}; nothing to draw",
                self.width,
                self.height
            );
            return;
        }
        let speed = self.effective_speed();
        let count = self.effective_count();
        self.particles.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(
                self.rng.gen::<f32>() * self.width,
                self.rng.gen::<f32>() * self.height,
            );
            let velocity = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * speed,
                (self.rng.gen::<f32>() - 0.5) * speed,
            );
            let base_velocity = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * speed,
                (self.rng.gen::<f32>() - 0.5) * speed,
            );
            self.particles.push(Particle {
                position,
                velocity,
                base_velocity,
                radius: self.rng.gen::<f32>() * self.config.particle_size + 1.0,
                opacity: self.rng.gen::<f32>() * self.config.particle_opacity + 0.3,
            });
        }
    }

    /// Record a pointer move in canvas pixel coordinates. The caller owns
    /// the deactivation debounce and clears activity via [`pointer_idle`].
    ///
    /// [`pointer_idle`]: ParticleEngine::pointer_idle
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.position = position;
        self.pointer.active = true;
    }

    pub fn pointer_idle(&mut self) {
        self.pointer.active = false;
    }

    /// Advance the simulation by one display frame. `dt` is the wall-clock
    /// time since the previous frame and also feeds the adaptive-quality
    /// estimate.
    pub fn step(&mut self, dt: Duration) {
        self.adapt_quality(dt);

        let pointer = self.pointer;
        let (width, height) = (self.width, self.height);
        let mouse_radius = self.config.mouse_radius;
        for particle in &mut self.particles {
            let to_pointer = pointer.position - particle.position;
            let distance = to_pointer.length();
            if pointer.active && distance < mouse_radius {
                // Magnetic pull: linear falloff from 1 at the pointer to 0
                // at the influence radius.
                let force = (mouse_radius - distance) / mouse_radius;
                if distance > f32::EPSILON {
                    particle.velocity += to_pointer / distance * force * ATTRACT_GAIN;
                }
            } else {
                particle.velocity +=
                    (particle.base_velocity - particle.velocity) * RELAX_RATE;
            }

            particle.position += particle.velocity;
            particle.position.x = wrap(particle.position.x, width);
            particle.position.y = wrap(particle.position.y, height);

            particle.velocity *= DAMPING;
        }
    }

    /// One-shot-per-frame backpressure: shed 10% of the field whenever the
    /// instantaneous frame rate dips below the floor. Never grows back.
    fn adapt_quality(&mut self, dt: Duration) {
        let dt_sec = dt.as_secs_f32();
        if dt_sec <= 0.0 {
            return;
        }
        let fps = 1.0 / dt_sec;
        if fps < ADAPTIVE_FPS_FLOOR && self.particles.len() > ADAPTIVE_MIN_PARTICLES {
            let kept = (self.particles.len() as f32 * 0.9).floor() as usize;
            log::debug!(
                "frame rate {:.1} below floor; trimming field {} -> {}",
                fps,
                self.particles.len(),
                kept
            );
            self.particles.truncate(kept);
        }
    }

    /// Every unordered particle pair closer than the connection threshold,
    /// with its stroke alpha. O(n^2); this is the dominant per-frame cost.
    pub fn connections(&self) -> Vec<Connection> {
        let threshold = self.config.connection_distance;
        let mut out = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let distance = self.particles[i]
                    .position
                    .distance(self.particles[j].position);
                if distance < threshold {
                    out.push(Connection {
                        a: i,
                        b: j,
                        alpha: (1.0 - distance / threshold) * self.config.connection_opacity,
                    });
                }
            }
        }
        out
    }
}

/// Toroidal wrap into `[0, extent)`. Euclidean remainder keeps the bound
/// strict on both edges for any overshoot.
#[inline]
fn wrap(coordinate: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return coordinate;
    }
    let wrapped = coordinate.rem_euclid(extent);
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
