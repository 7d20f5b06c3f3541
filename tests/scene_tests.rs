// Host-side tests for the scene state and animation math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use glam::Vec3;
use scene::*;

fn make_scene() -> SceneState {
    let markers = vec![
        Marker {
            position: Vec3::new(-2.0, 0.5, 4.0),
            title: "One",
            description: "first",
        },
        Marker {
            position: Vec3::new(3.0, -1.0, 2.0),
            title: "Two",
            description: "second",
        },
        Marker {
            position: Vec3::new(0.0, 2.0, -3.0),
            title: "Three",
            description: "third",
        },
    ];
    SceneState::new(markers, 64, 32, 42)
}

#[test]
fn marker_pulse_matches_formula_at_t1000() {
    let mut s = make_scene();
    s.advance(1000.0);
    let expected_opacity = 0.75 + (1000.0f32 * 0.002).sin() * 0.25;
    let expected_scale = 0.9 + (1000.0f32 * 0.0015).sin() * 0.15;
    assert!((s.marker_opacity(0) - expected_opacity).abs() < 1e-5);
    assert!((s.marker_scale(0) - expected_scale).abs() < 1e-5);
}

#[test]
fn marker_phases_are_offset_by_index() {
    let mut s = make_scene();
    s.advance(1000.0);
    assert!((s.marker_opacity(0) - s.marker_opacity(1)).abs() > 1e-3);
    assert!((s.marker_scale(0) - s.marker_scale(1)).abs() > 1e-3);
}

#[test]
fn marker_visuals_stay_within_bounds() {
    for step in 0..4000 {
        let t = step as f32 * 37.0;
        for index in 0..16 {
            let opacity = marker_opacity_at(t, index);
            assert!(
                (0.5 - 1e-4..=1.0 + 1e-4).contains(&opacity),
                "opacity {opacity} at t={t}"
            );
            let scale = marker_scale_at(t, index, false);
            assert!(
                (0.75 - 1e-4..=1.05 + 1e-4).contains(&scale),
                "scale {scale} at t={t}"
            );
            let hovered = marker_scale_at(t, index, true);
            assert!((hovered - scale - 0.35).abs() < 1e-5);
        }
    }
}

#[test]
fn clearing_hover_restores_the_breathing_baseline() {
    let mut s = make_scene();
    s.advance(4321.0);
    let baseline = s.marker_scale(1);
    assert!(s.set_hover(Some(1)));
    assert!((s.marker_scale(1) - baseline - 0.35).abs() < 1e-6);
    assert!(s.set_hover(None));
    assert!((s.marker_scale(1) - baseline).abs() < 1e-6);
}

#[test]
fn hover_changes_only_the_hovered_marker() {
    let mut s = make_scene();
    s.advance(777.0);
    let other = s.marker_scale(2);
    s.set_hover(Some(0));
    assert!((s.marker_scale(2) - other).abs() < 1e-6);
}

#[test]
fn set_hover_is_idempotent() {
    let mut s = make_scene();
    assert!(s.set_hover(Some(2)));
    assert!(!s.set_hover(Some(2)));
    assert_eq!(s.hovered(), Some(2));
    assert!(s.set_hover(None));
    assert!(!s.set_hover(None));
    assert_eq!(s.hovered(), None);
}

#[test]
fn particles_stay_inside_the_wraparound_cube() {
    let mut s = make_scene();
    for _ in 0..20_000 {
        s.advance(16.7);
    }
    for p in &s.particles {
        for v in [p.position.x, p.position.y, p.position.z] {
            assert!(
                (-PARTICLE_BOUND..=PARTICLE_BOUND).contains(&v),
                "coordinate {v} escaped the cube"
            );
        }
    }
}

#[test]
fn particle_wraps_across_each_bound() {
    let mut p = Particle {
        position: Vec3::new(19.999, -19.999, 0.0),
        velocity: Vec3::new(0.01, -0.01, 0.0),
    };
    step_particle(&mut p);
    assert_eq!(p.position.x, -PARTICLE_BOUND);
    assert_eq!(p.position.y, PARTICLE_BOUND);
    assert!((p.position.z).abs() < 1e-6);
}

#[test]
fn particle_velocities_never_change() {
    let mut s = make_scene();
    let velocities: Vec<Vec3> = s.particles.iter().map(|p| p.velocity).collect();
    for _ in 0..500 {
        s.advance(16.7);
    }
    for (p, v) in s.particles.iter().zip(&velocities) {
        assert_eq!(p.velocity, *v);
    }
}

#[test]
fn star_twinkle_parameters_are_within_creation_ranges() {
    let s = make_scene();
    assert_eq!(s.stars.len(), 64);
    for star in &s.stars {
        assert!((STAR_TWINKLE_SPEED_MIN..STAR_TWINKLE_SPEED_MAX).contains(&star.twinkle_speed));
        assert!((0.0..STAR_TWINKLE_OFFSET_MAX).contains(&star.twinkle_offset));
        assert!((STAR_BASE_OPACITY_MIN..STAR_BASE_OPACITY_MAX).contains(&star.base_opacity));
        assert!(star.position.length() >= STAR_SHELL_RADIUS_MIN - 1e-3);
        assert!(star.position.length() <= STAR_SHELL_RADIUS_MAX + 1e-3);
    }
}

#[test]
fn star_opacity_stays_renderable() {
    let s = make_scene();
    for step in 0..2000 {
        let t = step as f32 * 53.0;
        for star in &s.stars {
            let o = star_opacity_at(t, star);
            assert!(o > 0.0 && o <= 1.0, "star opacity {o} at t={t}");
        }
    }
}

#[test]
fn line_opacity_oscillates_in_its_band() {
    for step in 0..2000 {
        let t = step as f32 * 41.0;
        let o = line_opacity_at(t);
        assert!(
            (0.04 - 1e-4..=0.12 + 1e-4).contains(&o),
            "line opacity {o} at t={t}"
        );
    }
}

#[test]
fn clock_accumulates_frame_deltas() {
    let mut s = make_scene();
    s.advance(16.7);
    s.advance(16.7);
    assert!((s.time_ms() - 33.4).abs() < 1e-4);
    // Negative deltas (a suspended tab resuming) never rewind the clock
    s.advance(-100.0);
    assert!((s.time_ms() - 33.4).abs() < 1e-4);
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let a = make_scene();
    let b = make_scene();
    for (x, y) in a.stars.iter().zip(&b.stars) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.twinkle_speed, y.twinkle_speed);
    }
    for (x, y) in a.particles.iter().zip(&b.particles) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.velocity, y.velocity);
    }
}
