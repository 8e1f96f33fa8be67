use super::constants::{
    CONE_SEGMENTS, CYLINDER_SEGMENTS, MARKER_RADIUS, SPHERE_RINGS, SPHERE_SEGMENTS,
};
use glam::Vec3;
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

/// Mesh vertex: object-space position and smooth normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// CPU-side mesh before upload.
#[derive(Clone, Debug, Default)]
pub struct GeometryData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Bounding plane `normal · p <= offset` of a convex solid.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f32,
}

/// Building footprint, all unit-sized (fits the `[-0.5, 0.5]³` cube) and
/// centred on the origin so scale maps directly to world size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Box,
    Cylinder,
    Cone,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Box, Shape::Cylinder, Shape::Cone];

    pub fn geometry(self) -> GeometryData {
        match self {
            Shape::Box => unit_box(),
            Shape::Cylinder => tapered_prism(0.5, 0.5, 1.0, CYLINDER_SEGMENTS),
            Shape::Cone => tapered_prism(0.0, 0.5, 1.0, CONE_SEGMENTS),
        }
    }

    /// Faces of the tessellated solid as half-spaces, so picking hits exactly
    /// what is drawn.
    pub fn hull(self) -> SmallVec<[Plane; 10]> {
        let mut planes = SmallVec::new();
        match self {
            Shape::Box => {
                for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
                    planes.push(Plane { normal: axis, offset: 0.5 });
                    planes.push(Plane { normal: -axis, offset: 0.5 });
                }
            }
            Shape::Cylinder => {
                let n = CYLINDER_SEGMENTS;
                let apothem = 0.5 * (PI / n as f32).cos();
                for k in 0..n {
                    let theta = (k as f32 + 0.5) * TAU / n as f32;
                    planes.push(Plane {
                        normal: Vec3::new(theta.sin(), 0.0, theta.cos()),
                        offset: apothem,
                    });
                }
                planes.push(Plane { normal: Vec3::Y, offset: 0.5 });
                planes.push(Plane { normal: Vec3::NEG_Y, offset: 0.5 });
            }
            Shape::Cone => {
                let n = CONE_SEGMENTS;
                let apothem = 0.5 * (PI / n as f32).cos();
                for k in 0..n {
                    let theta = (k as f32 + 0.5) * TAU / n as f32;
                    // through the apex (0, 0.5, 0) and the base edge at distance `apothem`
                    planes.push(Plane {
                        normal: Vec3::new(theta.sin(), apothem, theta.cos()),
                        offset: 0.5 * apothem,
                    });
                }
                planes.push(Plane { normal: Vec3::NEG_Y, offset: 0.5 });
            }
        }
        planes
    }
}

/// Unit cube centred at the origin, one quad per face.
pub fn unit_box() -> GeometryData {
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // normal, u axis, v axis
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ];
    let mut data = GeometryData::default();
    for (normal, u, v) in faces {
        let (n, u, v) = (Vec3::from(normal), Vec3::from(u), Vec3::from(v));
        let base = data.vertices.len() as u32;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let p = n * 0.5 + u * su + v * sv;
            data.vertices.push(Vertex::new(p.to_array(), normal));
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    data
}

/// Cylinder/cone family: a `segments`-sided solid with independent top and
/// bottom radii, capped where the radius is non-zero.
pub fn tapered_prism(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::default();
    let half = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;

    // torso: row 0 is the top ring, row 1 the bottom ring
    for (radius, y) in [(radius_top, half), (radius_bottom, -half)] {
        for k in 0..=segments {
            let theta = k as f32 / segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            let normal = Vec3::new(s, slope, c).normalize();
            data.vertices
                .push(Vertex::new([radius * s, y, radius * c], normal.to_array()));
        }
    }
    let ring = segments + 1;
    for k in 0..segments {
        let a = k;
        let b = ring + k;
        let c = ring + k + 1;
        let d = k + 1;
        if radius_top > 0.0 {
            data.indices.extend_from_slice(&[a, b, d]);
        }
        if radius_bottom > 0.0 {
            data.indices.extend_from_slice(&[b, c, d]);
        }
    }

    if radius_top > 0.0 {
        push_cap(&mut data, radius_top, half, segments, true);
    }
    if radius_bottom > 0.0 {
        push_cap(&mut data, radius_bottom, -half, segments, false);
    }
    data
}

fn push_cap(data: &mut GeometryData, radius: f32, y: f32, segments: u32, top: bool) {
    let normal = if top { [0.0, 1.0, 0.0] } else { [0.0, -1.0, 0.0] };
    let center = data.vertices.len() as u32;
    data.vertices.push(Vertex::new([0.0, y, 0.0], normal));
    for k in 0..=segments {
        let theta = k as f32 / segments as f32 * TAU;
        let (s, c) = theta.sin_cos();
        data.vertices.push(Vertex::new([radius * s, y, radius * c], normal));
    }
    for k in 0..segments {
        let (i, j) = (center + 1 + k, center + 2 + k);
        if top {
            data.indices.extend_from_slice(&[center, i, j]);
        } else {
            data.indices.extend_from_slice(&[center, j, i]);
        }
    }
}

/// UV sphere used for the floating markers.
pub fn marker_sphere() -> GeometryData {
    uv_sphere(MARKER_RADIUS, SPHERE_SEGMENTS, SPHERE_RINGS)
}

pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> GeometryData {
    let mut data = GeometryData::default();
    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();
        for segment in 0..=segments {
            let theta = TAU * segment as f32 / segments as f32;
            let p = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
            let n = p.normalize_or_zero();
            data.vertices.push(Vertex::new(p.to_array(), n.to_array()));
        }
    }
    for ring in 0..rings {
        for segment in 0..segments {
            let current = ring * (segments + 1) + segment;
            let next = current + segments + 1;
            data.indices
                .extend_from_slice(&[current, next, current + 1, current + 1, next, next + 1]);
        }
    }
    data
}
