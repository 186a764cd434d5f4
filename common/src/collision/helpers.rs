use bevy_math::Vec3;

use crate::{components::Position, constants::PHYSICS_EPSILON};

// Circle-circle overlap on the ground plane; touching circles do not overlap.
#[must_use]
pub fn overlap_circles(a: &Position, radius_a: f32, b: &Position, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

// Closest point to `p` on the segment [a, b].
#[must_use]
pub fn closest_point_on_segment(p: Vec3, a: Vec3, b: Vec3) -> Vec3 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= PHYSICS_EPSILON {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Distance along a unit-length ray to the first point of a sphere.
///
/// Returns `Some(0.0)` when the origin is already inside and `None` when the
/// sphere is missed or lies entirely behind the origin.
#[must_use]
pub fn ray_vs_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let m = origin - center;
    let c = m.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }

    let b = m.dot(dir);
    // Outside and pointing away
    if b > 0.0 {
        return None;
    }

    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    Some((-b - disc.sqrt()).max(0.0))
}

/// Distance along a unit-length ray to the first point of a capsule (segment `a`-`b`
/// swept by `radius`). The capsule is tested as its cylinder plus two end spheres.
#[must_use]
pub fn ray_vs_capsule(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, radius: f32) -> Option<f32> {
    if origin.distance_squared(closest_point_on_segment(origin, a, b)) <= radius * radius {
        return Some(0.0);
    }

    let mut best = ray_vs_cylinder_side(origin, dir, a, b, radius);
    for cap in [a, b] {
        if let Some(t) = ray_vs_sphere(origin, dir, cap, radius) {
            best = Some(best.map_or(t, |current| current.min(t)));
        }
    }
    best
}

// Side wall of the finite cylinder around [a, b]; caps are handled by the caller.
fn ray_vs_cylinder_side(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, radius: f32) -> Option<f32> {
    let axis = b - a;
    let axis_len_sq = axis.length_squared();
    if axis_len_sq <= PHYSICS_EPSILON {
        return None;
    }

    // Project the ray onto the plane perpendicular to the axis
    let oa = origin - a;
    let dir_along = dir.dot(axis) / axis_len_sq;
    let oa_along = oa.dot(axis) / axis_len_sq;
    let d_perp = dir - axis * dir_along;
    let o_perp = oa - axis * oa_along;

    let qa = d_perp.length_squared();
    if qa <= PHYSICS_EPSILON {
        // Ray runs parallel to the axis: only the caps can be hit
        return None;
    }
    let qb = o_perp.dot(d_perp);
    let qc = o_perp.length_squared() - radius * radius;

    let disc = qb * qb - qa * qc;
    if disc < 0.0 {
        return None;
    }

    let t = (-qb - disc.sqrt()) / qa;
    if t < 0.0 {
        return None;
    }

    let along = dir_along.mul_add(t, oa_along);
    (0.0..=1.0).contains(&along).then_some(t)
}
