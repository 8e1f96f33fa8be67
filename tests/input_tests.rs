// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod input {
    include!("../src/input.rs");
}

use camera::Camera;
use glam::{Vec2, Vec3};
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    // Sphere at (0, 0, 5) with radius 2
    let t = ray_sphere(ray_origin, ray_dir, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    let center = Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, center, 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_a_miss() {
    let center = Vec3::new(0.0, 0.0, -5.0);
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, center, 2.0).is_none());
}

#[test]
fn ray_sphere_from_inside_reports_no_entry() {
    let center = Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(center, Vec3::X, center, 3.0).is_none());
}

#[test]
fn pointer_ndc_maps_corners_and_centre() {
    assert_eq!(pointer_ndc(Vec2::new(400.0, 300.0), 800, 600), Vec2::ZERO);
    assert_eq!(pointer_ndc(Vec2::new(0.0, 0.0), 800, 600), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(Vec2::new(800.0, 600.0), 800, 600), Vec2::new(1.0, -1.0));
}

#[test]
fn pointer_ndc_survives_zero_viewport() {
    let ndc = pointer_ndc(Vec2::new(10.0, 10.0), 0, 0);
    assert!(ndc.is_finite());
}

#[test]
fn centre_ray_points_at_the_target() {
    let cam = Camera::new(16.0 / 9.0);
    let (ro, rd) = cam.ray_through_ndc(Vec2::ZERO);
    assert_eq!(ro, cam.eye);
    let expected = (cam.target - cam.eye).normalize();
    assert!(rd.distance(expected) < 1e-4);
    assert!((rd.length() - 1.0).abs() < 1e-5);
}

#[test]
fn top_of_screen_ray_tilts_up() {
    let cam = Camera::new(4.0 / 3.0);
    let (_, centre) = cam.ray_through_ndc(Vec2::ZERO);
    let (_, top) = cam.ray_through_ndc(Vec2::new(0.0, 1.0));
    assert!(top.y > centre.y);
    // half the vertical field of view
    let angle = centre.angle_between(top).to_degrees();
    assert!((angle - 37.5).abs() < 0.1);
}

#[test]
fn viewport_sets_aspect_and_ignores_zero() {
    let mut cam = Camera::new(1.0);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.set_viewport(1920, 0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
}
