use super::color::{wrap_unit, Rgb};
use super::constants::*;
use super::scene::{Building, CityScene, FloatingMarker, PulseProfile};
use super::toggles::ToggleState;
use crate::camera::Camera;
use crate::constants::{ORBIT_ALTITUDE, ORBIT_RADIUS, SCENE_TIME_SCALE};
use glam::Vec3;
use rand::Rng;
use std::time::Duration;

/// Time inputs for one animation tick.
///
/// `scene_time` drives orbit, hue and pulse; the marker bob runs on raw
/// milliseconds. Both are measured from startup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    pub scene_time: f32,
    pub elapsed_ms: f64,
}

impl FrameClock {
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self {
            scene_time: elapsed.as_secs_f32() * SCENE_TIME_SCALE,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

#[inline]
pub fn orbit_eye(scene_time: f32) -> Vec3 {
    Vec3::new(
        scene_time.cos() * ORBIT_RADIUS,
        ORBIT_ALTITUDE,
        scene_time.sin() * ORBIT_RADIUS,
    )
}

#[inline]
pub fn pulse_scale_y(profile: PulseProfile, scene_time: f32) -> f32 {
    profile.base_height * (1.0 + (scene_time * PULSE_RATE).sin() * profile.pulse_factor)
}

/// Hue for a building this tick; `jitter` is the per-tick random offset.
#[inline]
pub fn cycling_hue(scene_time: f32, jitter: f32) -> f32 {
    wrap_unit(scene_time * HUE_RATE + jitter)
}

#[inline]
pub fn bob_delta(elapsed_ms: f64, x: f32) -> f32 {
    ((elapsed_ms * BOB_RATE_PER_MS + x as f64).sin() as f32) * BOB_STEP
}

/// One animation tick over the whole scene.
pub fn advance<R: Rng + ?Sized>(
    scene: &mut CityScene,
    camera: &mut Camera,
    toggles: &ToggleState,
    clock: FrameClock,
    rng: &mut R,
) {
    if toggles.camera_rotating {
        camera.eye = orbit_eye(clock.scene_time);
        camera.look_at(Vec3::ZERO);
    }
    animate_buildings(&mut scene.buildings, &scene.pulses, clock.scene_time, rng);
    bob_markers(&mut scene.markers, clock.elapsed_ms);
}

pub fn animate_buildings<R: Rng + ?Sized>(
    buildings: &mut [Building],
    pulses: &[PulseProfile],
    scene_time: f32,
    rng: &mut R,
) {
    for (building, profile) in buildings.iter_mut().zip(pulses) {
        building.rotation_y += BUILDING_SPIN_PER_TICK;
        let hue = cycling_hue(scene_time, rng.gen::<f32>() * HUE_JITTER);
        building.color = Rgb::from_hsl(hue, BUILDING_SATURATION, BUILDING_LIGHTNESS);
        building.scale.y = pulse_scale_y(*profile, scene_time);
    }
}

pub fn bob_markers(markers: &mut [FloatingMarker], elapsed_ms: f64) {
    for m in markers {
        m.position.y += bob_delta(elapsed_ms, m.position.x);
    }
}
