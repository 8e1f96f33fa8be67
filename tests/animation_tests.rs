// Host-side tests for the per-frame animation.
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
mod city {
    pub mod animation {
        include!("../src/city/animation.rs");
    }
    pub mod app {
        include!("../src/city/app.rs");
    }
    pub mod color {
        include!("../src/city/color.rs");
    }
    pub mod constants {
        include!("../src/city/constants.rs");
    }
    pub mod geometry {
        include!("../src/city/geometry.rs");
    }
    pub mod picking {
        include!("../src/city/picking.rs");
    }
    pub mod scene {
        include!("../src/city/scene.rs");
    }
    pub mod toggles {
        include!("../src/city/toggles.rs");
    }
}

use city::animation::{self, FrameClock};
use city::scene::CityScene;
use city::toggles::ToggleState;
use camera::Camera;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn clock(scene_time: f32) -> FrameClock {
    FrameClock {
        scene_time,
        elapsed_ms: scene_time as f64 * 2000.0,
    }
}

fn setup(seed: u64) -> (CityScene, Camera, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let scene = CityScene::build(&mut rng);
    (scene, Camera::new(4.0 / 3.0), rng)
}

#[test]
fn frame_clock_runs_scene_time_at_half_speed() {
    let c = FrameClock::from_elapsed(Duration::from_millis(2000));
    assert!((c.scene_time - 1.0).abs() < 1e-6);
    assert!((c.elapsed_ms - 2000.0).abs() < 1e-9);
}

#[test]
fn orbit_traces_a_circle_at_fixed_altitude() {
    for t in [0.0_f32, 0.5, 1.0, 3.3, 12.0] {
        let eye = animation::orbit_eye(t);
        assert!((eye.x - t.cos() * 150.0).abs() < 1e-3);
        assert!((eye.z - t.sin() * 150.0).abs() < 1e-3);
        assert_eq!(eye.y, 100.0);
        assert!((Vec3::new(eye.x, 0.0, eye.z).length() - 150.0).abs() < 1e-2);
    }
}

#[test]
fn rotating_camera_follows_orbit_and_faces_origin() {
    let (mut scene, mut cam, mut rng) = setup(1);
    let toggles = ToggleState::default();
    animation::advance(&mut scene, &mut cam, &toggles, clock(0.75), &mut rng);
    assert_eq!(cam.eye, animation::orbit_eye(0.75));
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn paused_camera_stays_put_while_city_animates() {
    let (mut scene, mut cam, mut rng) = setup(2);
    let mut toggles = ToggleState::default();
    toggles.toggle_rotation();
    let eye_before = cam.eye;
    let colors_before: Vec<_> = scene.buildings.iter().map(|b| b.color).collect();
    animation::advance(&mut scene, &mut cam, &toggles, clock(1.3), &mut rng);
    animation::advance(&mut scene, &mut cam, &toggles, clock(1.4), &mut rng);
    assert_eq!(cam.eye, eye_before);
    let colors_after: Vec<_> = scene.buildings.iter().map(|b| b.color).collect();
    assert_ne!(colors_before, colors_after);
}

#[test]
fn resumed_orbit_continues_from_the_clock() {
    let (mut scene, mut cam, mut rng) = setup(3);
    let mut toggles = ToggleState::default();
    toggles.toggle_rotation();
    animation::advance(&mut scene, &mut cam, &toggles, clock(2.0), &mut rng);
    toggles.toggle_rotation();
    animation::advance(&mut scene, &mut cam, &toggles, clock(5.0), &mut rng);
    assert_eq!(cam.eye, animation::orbit_eye(5.0));
}

#[test]
fn building_height_pulses_around_its_base() {
    let (mut scene, mut cam, mut rng) = setup(4);
    let toggles = ToggleState::default();
    let t = 0.9;
    animation::advance(&mut scene, &mut cam, &toggles, clock(t), &mut rng);
    for (b, p) in scene.buildings.iter().zip(&scene.pulses) {
        let expected = p.base_height * (1.0 + (2.0 * t).sin() * p.pulse_factor);
        assert!((b.scale.y - expected).abs() < 1e-3, "{} vs {}", b.scale.y, expected);
    }
}

#[test]
fn pulse_can_briefly_invert_the_tallest_factor() {
    let p = city::scene::PulseProfile {
        base_height: 10.0,
        pulse_factor: 1.1,
    };
    // sin(2t) = -1
    let t = 3.0 * std::f32::consts::FRAC_PI_4;
    assert!(animation::pulse_scale_y(p, t) < 0.0);
}

#[test]
fn buildings_spin_a_fixed_step_per_tick() {
    let (mut scene, mut cam, mut rng) = setup(5);
    let toggles = ToggleState::default();
    for i in 0..10 {
        animation::advance(&mut scene, &mut cam, &toggles, clock(i as f32 * 0.016), &mut rng);
    }
    for b in &scene.buildings {
        assert!((b.rotation_y - 0.02).abs() < 1e-5);
    }
}

#[test]
fn hue_stays_in_unit_range() {
    for t in [-50.0_f32, -0.01, 0.0, 0.5, 9.99, 10.0, 1234.5] {
        for jitter in [0.0, 0.05, 0.0999] {
            let h = animation::cycling_hue(t, jitter);
            assert!((0.0..1.0).contains(&h), "hue {} for t={} j={}", h, t, jitter);
        }
    }
}

#[test]
fn building_colors_are_mid_saturation_mid_lightness() {
    let (mut scene, mut cam, mut rng) = setup(6);
    let toggles = ToggleState::default();
    animation::advance(&mut scene, &mut cam, &toggles, clock(2.2), &mut rng);
    for b in &scene.buildings {
        let max = b.color.r.max(b.color.g).max(b.color.b);
        let min = b.color.r.min(b.color.g).min(b.color.b);
        assert!((max - 0.75).abs() < 1e-4);
        assert!((min - 0.25).abs() < 1e-4);
    }
}

#[test]
fn markers_bob_by_a_sine_of_time_and_x() {
    let (mut scene, _, _) = setup(7);
    let before: Vec<Vec3> = scene.markers.iter().map(|m| m.position).collect();
    animation::bob_markers(&mut scene.markers, 1500.0);
    for (m, p) in scene.markers.iter().zip(&before) {
        let expected = p.y + ((1.5 + p.x as f64).sin() as f32) * 0.02;
        assert!((m.position.y - expected).abs() < 1e-4);
        assert_eq!(m.position.x, p.x);
        assert_eq!(m.position.z, p.z);
    }
}

#[test]
fn bob_step_is_bounded() {
    for ms in [0.0, 16.7, 1e6] {
        for x in [-200.0_f32, 0.0, 57.3] {
            assert!(animation::bob_delta(ms, x).abs() <= 0.02 + 1e-7);
        }
    }
}
