// Shared visual/audio tuning constants used across the core and the web frontend.

/// Solid RGB color; canvas styles are produced via [`Rgb::to_css`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Format as a CSS `rgba()` string with the given alpha in `[0, 1]`.
    pub fn to_css(&self, alpha: f32) -> String {
        format!("rgba({},{},{},{})", self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
    }
}

// Site palette
pub const ACCENT: Rgb = Rgb(100, 255, 218); // teal
pub const BACKGROUND: Rgb = Rgb(10, 25, 47); // navy

// Hero particle field
pub const DEFAULT_PARTICLE_COUNT: usize = 80;
pub const DEFAULT_CONNECTION_DISTANCE: f32 = 120.0;
pub const DEFAULT_MOUSE_RADIUS: f32 = 150.0;
pub const DEFAULT_PARTICLE_SPEED: f32 = 0.5;
pub const DEFAULT_PARTICLE_SIZE: f32 = 2.0;
pub const DEFAULT_CONNECTION_OPACITY: f32 = 0.2;
pub const DEFAULT_PARTICLE_OPACITY: f32 = 0.6;

// Frame-rate floor below which the engine starts shedding particles,
// and the count it never sheds below.
pub const ADAPTIVE_FPS_FLOOR: f32 = 30.0;
pub const ADAPTIVE_MIN_PARTICLES: usize = 40;

// Pointer activity window: the pointer counts as moving for this long
// after the last move event.
pub const POINTER_ACTIVE_MS: i32 = 100;

// Reduced-motion scaling
pub const REDUCED_SPEED_FACTOR: f32 = 0.3;

// Cursor trail
pub const TRAIL_LEN: usize = 8;

// Team showcase playback rates
pub const AUTO_ROTATE_RATE: f64 = 1.2;
pub const HOVER_ROTATE_RATE: f64 = 0.2;
pub const MANUAL_ROTATE_STEP: f64 = 0.5;

// Ambient track
pub const AMBIENT_LOOP_SECONDS: u32 = 60;
pub const AMBIENT_FADE_SECONDS: f32 = 2.0;
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.3;

/// Candidate locations probed for a user-provided background track before
/// falling back to the synthesized loop.
pub const AMBIENT_TRACK_PATHS: &[&str] = &[
    "assets/audio/background.mp3",
    "assets/music/background.mp3",
    "assets/background.mp3",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_css_formats_and_clamps_alpha() {
        assert_eq!(ACCENT.to_css(0.5), "rgba(100,255,218,0.5)");
        assert_eq!(BACKGROUND.to_css(2.0), "rgba(10,25,47,1)");
        assert_eq!(BACKGROUND.to_css(-1.0), "rgba(10,25,47,0)");
    }
}
