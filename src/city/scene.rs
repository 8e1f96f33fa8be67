use super::color::Rgb;
use super::constants::*;
use super::geometry::Shape;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

/// One building mesh: transform plus Phong material.
#[derive(Clone, Debug)]
pub struct Building {
    pub shape: Shape,
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: Vec3,
    pub color: Rgb,
    pub emissive: Rgb,
    pub shininess: f32,
}

impl Building {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_rotation_y(self.rotation_y),
            self.position,
        )
    }

    pub fn is_highlighted(&self) -> bool {
        !self.emissive.is_black()
    }
}

/// Values fixed at creation that drive a building's vertical pulse.
/// `pulses[i]` belongs to `buildings[i]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseProfile {
    pub base_height: f32,
    pub pulse_factor: f32,
}

#[derive(Clone, Debug)]
pub struct FloatingMarker {
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
    pub range: f32,
    pub decay: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub ambient: Rgb,
    pub ambient_intensity: f32,
    pub sun_color: Rgb,
    pub sun_intensity: f32,
    /// Sun position; it shines toward the origin.
    pub sun_position: Vec3,
    pub points: [PointLight; 6],
}

/// Background and exponential-squared fog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atmosphere {
    pub background: Rgb,
    pub fog_color: Rgb,
    pub fog_density: f32,
}

impl Atmosphere {
    pub fn day() -> Self {
        Self::with_sky(Rgb::from_hex(SKY_DAY))
    }

    pub fn night() -> Self {
        Self::with_sky(Rgb::from_hex(SKY_NIGHT))
    }

    fn with_sky(sky: Rgb) -> Self {
        Self {
            background: sky,
            fog_color: sky,
            fog_density: FOG_DENSITY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CityScene {
    pub stars: Vec<Vec3>,
    pub buildings: Vec<Building>,
    pub pulses: Vec<PulseProfile>,
    pub markers: Vec<FloatingMarker>,
    pub lighting: Lighting,
    pub atmosphere: Atmosphere,
}

impl CityScene {
    /// Populate the whole scene. Every parameter is drawn from `rng`.
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stars = build_starfield(rng);
        let (buildings, pulses) = build_buildings(rng);
        let markers = build_markers(rng);
        let lighting = build_lighting(rng);
        Self {
            stars,
            buildings,
            pulses,
            markers,
            lighting,
            atmosphere: Atmosphere::day(),
        }
    }
}

#[inline]
fn ground_coord<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * GROUND_SIDE - GROUND_SIDE * 0.5
}

fn build_starfield<R: Rng + ?Sized>(rng: &mut R) -> Vec<Vec3> {
    (0..STAR_COUNT)
        .map(|_| {
            let x = (rng.gen::<f32>() - 0.5) * STAR_CUBE_SIDE;
            let y = (rng.gen::<f32>() - 0.5) * STAR_CUBE_SIDE;
            let z = (rng.gen::<f32>() - 0.5) * STAR_CUBE_SIDE;
            Vec3::new(x, y, z)
        })
        .collect()
}

fn build_buildings<R: Rng + ?Sized>(rng: &mut R) -> (Vec<Building>, Vec<PulseProfile>) {
    let mut buildings = Vec::with_capacity(BUILDING_COUNT);
    let mut pulses = Vec::with_capacity(BUILDING_COUNT);
    for _ in 0..BUILDING_COUNT {
        let shape = Shape::ALL[rng.gen_range(0..Shape::ALL.len())];
        let color = Rgb::new(rng.gen(), rng.gen(), rng.gen());
        let shininess = SHININESS_MIN + rng.gen::<f32>() * SHININESS_SPAN;

        let x = ground_coord(rng);
        let z = ground_coord(rng);
        let height = rng.gen::<f32>() * BUILDING_HEIGHT_SPAN + BUILDING_HEIGHT_MIN;
        let width_x = rng.gen::<f32>() * BUILDING_WIDTH_SPAN + BUILDING_WIDTH_MIN;
        let width_z = rng.gen::<f32>() * BUILDING_WIDTH_SPAN + BUILDING_WIDTH_MIN;
        let pulse_factor = rng.gen::<f32>() * PULSE_FACTOR_SPAN + PULSE_FACTOR_MIN;

        buildings.push(Building {
            shape,
            position: Vec3::new(x, height * 0.5, z),
            rotation_y: 0.0,
            scale: Vec3::new(width_x, height, width_z),
            color,
            emissive: Rgb::BLACK,
            shininess,
        });
        pulses.push(PulseProfile {
            base_height: height,
            pulse_factor,
        });
    }
    (buildings, pulses)
}

fn build_markers<R: Rng + ?Sized>(rng: &mut R) -> Vec<FloatingMarker> {
    (0..MARKER_COUNT)
        .map(|_| {
            let x = ground_coord(rng);
            let y = rng.gen::<f32>() * MARKER_ALTITUDE_SPAN + MARKER_ALTITUDE_MIN;
            let z = ground_coord(rng);
            FloatingMarker {
                position: Vec3::new(x, y, z),
            }
        })
        .collect()
}

fn build_lighting<R: Rng + ?Sized>(rng: &mut R) -> Lighting {
    let points = POINT_LIGHT_COLORS.map(|hex| {
        let x = ground_coord(rng);
        let y = rng.gen::<f32>() * POINT_LIGHT_ALTITUDE_SPAN + POINT_LIGHT_ALTITUDE_MIN;
        let z = ground_coord(rng);
        PointLight {
            position: Vec3::new(x, y, z),
            color: Rgb::from_hex(hex),
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            decay: POINT_LIGHT_DECAY,
        }
    });
    Lighting {
        ambient: Rgb::from_hex(AMBIENT_COLOR),
        ambient_intensity: AMBIENT_INTENSITY,
        sun_color: Rgb::from_hex(SUN_COLOR),
        sun_intensity: SUN_INTENSITY,
        sun_position: Vec3::from(SUN_POSITION),
        points,
    }
}
