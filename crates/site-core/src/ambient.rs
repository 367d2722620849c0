//! Synthesized fallback for the background-music player.
//!
//! When no user-provided track is found at any of the candidate paths, the
//! player renders this loop into an audio buffer instead: four layered
//! sine tones (A3/E4/A4/E5) with a slow variation term and a little noise,
//! faded in and out for seamless looping.

use rand::prelude::*;
use std::f32::consts::TAU;
use thiserror::Error;

use crate::constants::{AMBIENT_FADE_SECONDS, AMBIENT_LOOP_SECONDS};

/// Outcome of probing the candidate track paths. `NotFound` selects the
/// synthetic path; it is not a fault.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("no background track found at any candidate path")]
    NotFound,
}

const TONES: &[(f32, f32)] = &[
    (220.0, 0.05),  // A3
    (330.0, 0.03),  // E4
    (440.0, 0.02),  // A4
    (660.0, 0.015), // E5
];
const VARIATION_HZ: f32 = 0.1;
const VARIATION_AMP: f32 = 0.01;
const NOISE_AMP: f32 = 0.005;
const MASTER: f32 = 0.8;

/// Render one channel of the ambient loop at `sample_rate` Hz. Channels are
/// rendered independently so the stereo image keeps distinct noise.
pub fn render_ambient_channel(sample_rate: u32, rng: &mut StdRng) -> Vec<f32> {
    let len = (AMBIENT_LOOP_SECONDS * sample_rate) as usize;
    let fade_len = (AMBIENT_FADE_SECONDS * sample_rate as f32) as usize;
    let mut samples = Vec::with_capacity(len);
    for i in 0..len {
        let t = i as f32 / sample_rate as f32;
        let mut s = 0.0;
        for (freq, amp) in TONES {
            s += (TAU * freq * t).sin() * amp;
        }
        s += (TAU * VARIATION_HZ * t).sin() * VARIATION_AMP;
        s += (rng.gen::<f32>() - 0.5) * NOISE_AMP;
        s *= MASTER;

        // Linear fade at both ends for a click-free loop point.
        if i < fade_len {
            s *= i as f32 / fade_len as f32;
        } else if i >= len - fade_len {
            s *= (len - i) as f32 / fade_len as f32;
        }
        samples.push(s);
    }
    samples
}

/// Upper bound on the absolute sample value the renderer can produce.
/// Useful for callers that want headroom checks without scanning.
pub fn peak_amplitude_bound() -> f32 {
    let tone_sum: f32 = TONES.iter().map(|(_, amp)| amp).sum();
    (tone_sum + VARIATION_AMP + NOISE_AMP / 2.0) * MASTER
}
