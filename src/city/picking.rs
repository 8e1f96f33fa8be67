use super::color::Rgb;
use super::constants::HIGHLIGHT_EMISSIVE;
use super::geometry::Plane;
use super::scene::Building;
use crate::input::ray_sphere;
use glam::Vec3;

// Half-diagonal of the unit cube every building shape fits in.
const UNIT_BOUND_RADIUS: f32 = 0.866_025_4;

/// Nearest building along the ray, with its distance from the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub index: usize,
    pub distance: f32,
}

/// Entry distance of a ray into a convex solid given as half-spaces.
///
/// Only entering hits count: a ray that starts inside the solid (or behind
/// it) returns `None`.
pub fn ray_convex(ray_origin: Vec3, ray_dir: Vec3, planes: &[Plane]) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    for plane in planes {
        let denom = plane.normal.dot(ray_dir);
        let dist = plane.offset - plane.normal.dot(ray_origin);
        if denom.abs() < 1e-9 {
            if dist < 0.0 {
                return None;
            }
            continue;
        }
        let t = dist / denom;
        if denom < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
        if t_enter > t_exit {
            return None;
        }
    }
    (t_enter >= 0.0 && t_enter.is_finite()).then_some(t_enter)
}

/// World distance at which the ray enters `building`, if it does.
///
/// `ray_dir` must be unit length. The ray is moved into the building's object
/// space where the shape is unit sized; parameters carry over unchanged.
pub fn intersect_building(ray_origin: Vec3, ray_dir: Vec3, building: &Building) -> Option<f32> {
    let s = building.scale;
    if s.x.abs() < 1e-6 || s.y.abs() < 1e-6 || s.z.abs() < 1e-6 {
        return None;
    }
    let bound = UNIT_BOUND_RADIUS * s.abs().max_element();
    let outside = (ray_origin - building.position).length_squared() > bound * bound;
    if outside && ray_sphere(ray_origin, ray_dir, building.position, bound).is_none() {
        return None;
    }

    let inv = building.model_matrix().inverse();
    let local_origin = inv.transform_point3(ray_origin);
    let local_dir = inv.transform_vector3(ray_dir);
    ray_convex(local_origin, local_dir, &building.shape.hull())
}

/// Nearest building hit by the ray. Equal distances keep the earlier index.
pub fn resolve_pick(ray_origin: Vec3, ray_dir: Vec3, buildings: &[Building]) -> Option<PickHit> {
    let mut best = None::<PickHit>;
    for (index, building) in buildings.iter().enumerate() {
        if let Some(distance) = intersect_building(ray_origin, ray_dir, building) {
            match best {
                Some(b) if distance >= b.distance => {}
                _ => best = Some(PickHit { index, distance }),
            }
        }
    }
    best
}

/// Clear every building's emissive, then light up `hit` (if any).
pub fn apply_highlight(buildings: &mut [Building], hit: Option<usize>) {
    for b in buildings.iter_mut() {
        b.emissive = Rgb::BLACK;
    }
    if let Some(b) = hit.and_then(|i| buildings.get_mut(i)) {
        b.emissive = Rgb::from_hex(HIGHLIGHT_EMISSIVE);
    }
}
