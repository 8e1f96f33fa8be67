// Host-side tests for scene construction and mesh generation.
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

use city::color::Rgb;
use city::constants::*;
use city::geometry::{self, Shape};
use city::scene::CityScene;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_scene(seed: u64) -> CityScene {
    CityScene::build(&mut StdRng::seed_from_u64(seed))
}

#[test]
fn scene_has_expected_population() {
    let scene = seeded_scene(7);
    assert_eq!(scene.stars.len(), 15_000);
    assert_eq!(scene.buildings.len(), 200);
    assert_eq!(scene.pulses.len(), scene.buildings.len());
    assert_eq!(scene.markers.len(), 50);
    assert_eq!(scene.lighting.points.len(), 6);
}

#[test]
fn stars_fill_a_cube_centred_on_origin() {
    let scene = seeded_scene(1);
    let half = STAR_CUBE_SIDE * 0.5;
    for s in &scene.stars {
        assert!(s.abs().max_element() <= half, "star outside cube: {:?}", s);
    }
}

#[test]
fn buildings_stand_on_the_ground_within_ranges() {
    let scene = seeded_scene(2);
    for (b, p) in scene.buildings.iter().zip(&scene.pulses) {
        assert!(b.position.x >= -200.0 && b.position.x < 200.0);
        assert!(b.position.z >= -200.0 && b.position.z < 200.0);
        assert!(b.scale.y >= 10.0 && b.scale.y < 60.0);
        assert!(b.scale.x >= 5.0 && b.scale.x < 15.0);
        assert!(b.scale.z >= 5.0 && b.scale.z < 15.0);
        // base sits at y = 0
        assert!((b.position.y - b.scale.y * 0.5).abs() < 1e-4);
        assert_eq!(p.base_height, b.scale.y);
        assert!(p.pulse_factor >= 0.9 && p.pulse_factor < 1.1);
        assert!(b.shininess >= 50.0 && b.shininess < 100.0);
        assert_eq!(b.rotation_y, 0.0);
        assert!(!b.is_highlighted());
    }
}

#[test]
fn every_shape_appears_in_a_full_city() {
    let scene = seeded_scene(3);
    for shape in Shape::ALL {
        assert!(scene.buildings.iter().any(|b| b.shape == shape), "{:?} missing", shape);
    }
}

#[test]
fn markers_float_above_the_city() {
    let scene = seeded_scene(4);
    for m in &scene.markers {
        assert!(m.position.y >= 50.0 && m.position.y < 150.0);
        assert!(m.position.x.abs() <= 200.0 && m.position.z.abs() <= 200.0);
    }
}

#[test]
fn point_lights_use_the_fixed_palette() {
    let scene = seeded_scene(5);
    let colors: Vec<u32> = scene.lighting.points.iter().map(|p| p.color.to_hex()).collect();
    assert_eq!(colors, POINT_LIGHT_COLORS.to_vec());
    for p in &scene.lighting.points {
        assert!(p.position.y >= 10.0 && p.position.y < 110.0);
        assert_eq!(p.range, 50.0);
        assert_eq!(p.intensity, 1.0);
    }
    assert_eq!(scene.lighting.sun_position, Vec3::new(100.0, 100.0, 50.0));
    assert_eq!(scene.lighting.ambient.to_hex(), 0x404040);
}

#[test]
fn same_seed_builds_the_same_city() {
    let a = seeded_scene(99);
    let b = seeded_scene(99);
    assert_eq!(a.stars, b.stars);
    assert_eq!(a.pulses, b.pulses);
    let c = seeded_scene(100);
    assert_ne!(a.stars[0], c.stars[0]);
}

#[test]
fn hex_colors_survive_conversion() {
    for hex in [0x87ceeb, 0x000011, 0xff0000, 0x404040] {
        assert_eq!(Rgb::from_hex(hex).to_hex(), hex);
    }
}

#[test]
fn hsl_primaries_and_greys() {
    assert_eq!(Rgb::from_hsl(0.0, 1.0, 0.5).to_hex(), 0xff0000);
    assert_eq!(Rgb::from_hsl(1.0 / 3.0, 1.0, 0.5).to_hex(), 0x00ff00);
    assert_eq!(Rgb::from_hsl(2.0 / 3.0, 1.0, 0.5).to_hex(), 0x0000ff);
    assert_eq!(Rgb::from_hsl(0.3, 0.0, 0.5), Rgb::new(0.5, 0.5, 0.5));
    // hue wraps
    assert_eq!(Rgb::from_hsl(1.25, 0.5, 0.5), Rgb::from_hsl(0.25, 0.5, 0.5));
}

#[test]
fn linear_conversion_keeps_endpoints() {
    let white = Rgb::new(1.0, 1.0, 1.0).to_linear();
    assert!((white.r - 1.0).abs() < 1e-4);
    assert_eq!(Rgb::BLACK.to_linear(), Rgb::BLACK);
    let mid = Rgb::new(0.5, 0.5, 0.5).to_linear();
    assert!((mid.r - 0.214).abs() < 1e-3);
}

#[test]
fn primitive_meshes_have_expected_sizes() {
    let boxed = geometry::unit_box();
    assert_eq!((boxed.vertices.len(), boxed.indices.len()), (24, 36));
    let cyl = Shape::Cylinder.geometry();
    assert_eq!((cyl.vertices.len(), cyl.indices.len()), (38, 96));
    let cone = Shape::Cone.geometry();
    assert_eq!((cone.vertices.len(), cone.indices.len()), (22, 36));
    let sphere = geometry::marker_sphere();
    assert_eq!((sphere.vertices.len(), sphere.indices.len()), (1089, 6144));
}

#[test]
fn meshes_are_unit_sized_with_valid_indices() {
    for shape in Shape::ALL {
        let data = shape.geometry();
        for v in &data.vertices {
            let p = Vec3::from(v.position);
            assert!(p.abs().max_element() <= 0.5 + 1e-5, "{:?}: {:?}", shape, p);
            assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-4);
        }
        assert_eq!(data.indices.len() % 3, 0);
        assert!(data.indices.iter().all(|&i| (i as usize) < data.vertices.len()));
    }
    let sphere = geometry::marker_sphere();
    for v in &sphere.vertices {
        assert!((Vec3::from(v.position).length() - MARKER_RADIUS).abs() < 1e-4);
    }
}

#[test]
fn picking_hull_encloses_the_drawn_mesh() {
    for shape in Shape::ALL {
        let hull = shape.hull();
        for v in &shape.geometry().vertices {
            let p = Vec3::from(v.position);
            for plane in &hull {
                assert!(
                    plane.normal.dot(p) <= plane.offset + 1e-4,
                    "{:?} vertex {:?} outside hull",
                    shape,
                    p
                );
            }
        }
    }
}
