// Host-side tests for pure picking functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    let t = ray_sphere(ray_origin, ray_dir, center, 2.0).expect("ray should hit");
    assert!((t - 3.0).abs() < 1e-4, "enters the sphere at z=3, got {t}");
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, -5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn pick_marker_prefers_the_nearest_hit() {
    let centers = [
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(0.0, 0.0, 7.0),
    ];
    let hit = pick_marker(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &centers, 1.0);
    assert_eq!(hit, Some(1));
}

#[test]
fn pick_marker_ignores_spheres_off_the_ray() {
    let centers = [Vec3::new(5.0, 5.0, 5.0), Vec3::new(-4.0, 2.0, 9.0)];
    let hit = pick_marker(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &centers, 1.0);
    assert_eq!(hit, None);
}

#[test]
fn pick_marker_on_empty_scene_is_none() {
    let hit = pick_marker(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &[], 1.0);
    assert_eq!(hit, None);
}

#[test]
fn pick_marker_grazing_hit_counts() {
    // Sphere offset by almost the pick radius from the ray axis
    let centers = [Vec3::new(0.95, 0.0, 6.0)];
    let hit = pick_marker(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &centers, 1.0);
    assert_eq!(hit, Some(0));
}
