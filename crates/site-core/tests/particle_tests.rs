// Host-side tests for the hero particle engine. All deterministic: the
// engine takes an explicit RNG seed and an explicit per-frame delta.

use glam::Vec2;
use site_core::{Connection, EngineConfig, ParticleEngine};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const SLOW_FRAME: Duration = Duration::from_millis(50);

fn make_engine(count: usize, width: f32, height: f32) -> ParticleEngine {
    let config = EngineConfig {
        particle_count: count,
        ..EngineConfig::default()
    };
    ParticleEngine::new(width, height, config, 42)
}

#[test]
fn particles_stay_wrapped_after_many_steps() {
    let mut engine = make_engine(10, 100.0, 100.0);
    for _ in 0..500 {
        engine.step(FRAME);
    }
    assert_eq!(engine.particles.len(), 10);
    for p in &engine.particles {
        assert!(p.position.x >= 0.0 && p.position.x < 100.0, "x = {}", p.position.x);
        assert!(p.position.y >= 0.0 && p.position.y < 100.0, "y = {}", p.position.y);
    }
}

#[test]
fn single_step_matches_update_rule_with_pointer_inactive() {
    let mut engine = make_engine(10, 100.0, 100.0);
    let before: Vec<_> = engine.particles.clone();
    engine.step(FRAME);
    for (prev, now) in before.iter().zip(&engine.particles) {
        // relax 2% toward base, integrate, then damp by 0.99
        let relaxed = prev.velocity + (prev.base_velocity - prev.velocity) * 0.02;
        let expected_v = relaxed * 0.99;
        assert!((now.velocity - expected_v).length() < 1e-6);
        let raw = prev.position + relaxed;
        let expected_p = Vec2::new(raw.x.rem_euclid(100.0), raw.y.rem_euclid(100.0));
        assert!((now.position - expected_p).length() < 1e-5);
    }
}

#[test]
fn velocity_converges_to_relaxation_fixed_point() {
    // With relaxation rate r and damping d the update is
    // v' = d * (v + r*(b - v)), whose fixed point is b * d*r / (1 - d*(1 - r)).
    let mut engine = make_engine(5, 100.0, 100.0);
    let fixed_point_scale = (0.99 * 0.02) / (1.0 - 0.99 * 0.98);
    for _ in 0..2000 {
        engine.step(FRAME);
    }
    for p in &engine.particles {
        let expected = p.base_velocity * fixed_point_scale;
        assert!(
            (p.velocity - expected).length() < 1e-4,
            "velocity {:?} expected {:?}",
            p.velocity,
            expected
        );
    }
}

#[test]
fn damping_bounds_speed_without_relaxation_pull() {
    let mut engine = make_engine(5, 100.0, 100.0);
    // Zero the drift targets so the relaxation term only ever pulls toward
    // rest; speed must then decay at least as fast as the damping factor.
    for p in &mut engine.particles {
        p.base_velocity = Vec2::ZERO;
    }
    let initial: Vec<f32> = engine.particles.iter().map(|p| p.velocity.length()).collect();
    let k = 50;
    for _ in 0..k {
        engine.step(FRAME);
    }
    let bound = 0.99f32.powi(k);
    for (v0, p) in initial.iter().zip(&engine.particles) {
        assert!(p.velocity.length() <= v0 * bound + 1e-6);
    }
}

#[test]
fn pointer_attraction_force_has_linear_falloff() {
    // Particle at (60,50), pointer at (50,50), influence radius 50:
    // force = (50 - 10)/50 * 0.02 = 0.016 along (-1, 0).
    let config = EngineConfig {
        particle_count: 1,
        mouse_radius: 50.0,
        ..EngineConfig::default()
    };
    let mut engine = ParticleEngine::new(100.0, 100.0, config, 7);
    engine.particles[0].position = Vec2::new(60.0, 50.0);
    engine.particles[0].velocity = Vec2::ZERO;
    engine.particles[0].base_velocity = Vec2::ZERO;
    engine.pointer_moved(Vec2::new(50.0, 50.0));
    engine.step(FRAME);
    // One damping application follows the impulse.
    let v = engine.particles[0].velocity;
    assert!((v.x - (-0.016 * 0.99)).abs() < 1e-6, "vx = {}", v.x);
    assert!(v.y.abs() < 1e-9);
}

#[test]
fn pointer_outside_radius_leaves_particle_relaxing() {
    let config = EngineConfig {
        particle_count: 1,
        mouse_radius: 50.0,
        ..EngineConfig::default()
    };
    let mut engine = ParticleEngine::new(400.0, 400.0, config, 7);
    engine.particles[0].position = Vec2::new(300.0, 300.0);
    engine.particles[0].velocity = Vec2::ZERO;
    engine.particles[0].base_velocity = Vec2::new(0.1, 0.0);
    engine.pointer_moved(Vec2::new(50.0, 50.0));
    engine.step(FRAME);
    let v = engine.particles[0].velocity;
    assert!((v.x - 0.1 * 0.02 * 0.99).abs() < 1e-7);
}

#[test]
fn connections_form_below_threshold_with_linear_alpha() {
    let mut engine = make_engine(3, 500.0, 500.0);
    engine.particles[0].position = Vec2::new(10.0, 10.0);
    engine.particles[1].position = Vec2::new(70.0, 10.0); // 60 px from [0]
    engine.particles[2].position = Vec2::new(400.0, 400.0); // far from both
    let connections = engine.connections();
    assert_eq!(connections.len(), 1);
    let Connection { a, b, alpha } = connections[0];
    assert_eq!((a, b), (0, 1));
    // alpha = (1 - 60/120) * connection_opacity
    let expected = 0.5 * engine.config().connection_opacity;
    assert!((alpha - expected).abs() < 1e-6);
}

#[test]
fn coincident_particles_connect_at_full_configured_opacity() {
    let mut engine = make_engine(2, 500.0, 500.0);
    engine.particles[1].position = engine.particles[0].position;
    let connections = engine.connections();
    assert_eq!(connections.len(), 1);
    assert!((connections[0].alpha - engine.config().connection_opacity).abs() < 1e-6);
}

#[test]
fn adaptive_quality_sheds_particles_monotonically() {
    let mut engine = make_engine(80, 800.0, 600.0);
    assert_eq!(engine.particles.len(), 80);

    // A slow frame (20 fps) trims to 90%.
    engine.step(SLOW_FRAME);
    assert_eq!(engine.particles.len(), 72);

    // Fast frames never trim and never grow the field back.
    engine.step(FRAME);
    assert_eq!(engine.particles.len(), 72);

    // Sustained slow frames keep shedding until the floor.
    let mut last = engine.particles.len();
    for _ in 0..20 {
        engine.step(SLOW_FRAME);
        let now = engine.particles.len();
        assert!(now <= last);
        last = now;
    }
    assert_eq!(last, 40);

    // At the floor the count is pinned even under load.
    engine.step(SLOW_FRAME);
    assert_eq!(engine.particles.len(), 40);
}

#[test]
fn reduced_motion_halves_count_and_scales_speed_once() {
    let mut engine = make_engine(80, 800.0, 600.0);
    engine.set_reduced_motion(true);
    assert_eq!(engine.effective_count(), 40);
    assert!((engine.effective_speed() - 0.15).abs() < 1e-6);
    assert_eq!(engine.particles.len(), 40);

    // Repeated application must not compound.
    engine.set_reduced_motion(true);
    assert_eq!(engine.effective_count(), 40);
    assert!((engine.effective_speed() - 0.15).abs() < 1e-6);
    assert_eq!(engine.particles.len(), 40);

    // Clearing the flag restores the constructed profile.
    engine.set_reduced_motion(false);
    assert_eq!(engine.effective_count(), 80);
    assert!((engine.effective_speed() - 0.5).abs() < 1e-6);
    assert_eq!(engine.particles.len(), 80);
}

#[test]
fn resize_regenerates_the_field_within_new_bounds() {
    let mut engine = make_engine(30, 100.0, 100.0);
    engine.resize(250.0, 150.0);
    assert_eq!(engine.particles.len(), 30);
    for p in &engine.particles {
        assert!(p.position.x >= 0.0 && p.position.x < 250.0);
        assert!(p.position.y >= 0.0 && p.position.y < 150.0);
    }
}

#[test]
fn zero_area_viewport_yields_empty_field_and_steps_safely() {
    let mut engine = make_engine(30, 0.0, 0.0);
    assert!(engine.particles.is_empty());
    engine.step(FRAME);
    assert!(engine.connections().is_empty());
}

#[test]
fn initial_velocity_and_base_velocity_are_sampled_independently() {
    let engine = make_engine(40, 200.0, 200.0);
    let identical = engine
        .particles
        .iter()
        .all(|p| p.velocity == p.base_velocity);
    assert!(!identical, "base drift should not just copy the initial velocity");
    let half_speed = engine.effective_speed() / 2.0;
    for p in &engine.particles {
        assert!(p.velocity.x.abs() <= half_speed && p.velocity.y.abs() <= half_speed);
        assert!(p.base_velocity.x.abs() <= half_speed && p.base_velocity.y.abs() <= half_speed);
        assert!(p.radius >= 1.0 && p.radius < 1.0 + engine.config().particle_size);
        assert!(p.opacity >= 0.3 && p.opacity < 0.3 + engine.config().particle_opacity);
    }
}
