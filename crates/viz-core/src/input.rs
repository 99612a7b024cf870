//! Pure picking math: screen-space ray construction and ring intersection.

use crate::constants::{CAMERA_FOVY, CAMERA_ZFAR, CAMERA_ZNEAR, PICK_BAND_HALF_WIDTH};
use crate::rings::RingField;
use glam::{Mat4, Vec3, Vec4};

/// Compute a world-space ray from pixel coordinates in the viewport.
///
/// - `sx`, `sy`: pixel coordinates in the viewport's backing store space
/// - `width`, `height`: viewport size in the same units
/// - `eye`, `target`: the camera pose the frame was rendered with
///
/// Returns `(ray_origin, ray_direction)` in world space.
#[inline]
pub fn screen_to_world_ray(
    sx: f32,
    sy: f32,
    width: f32,
    height: f32,
    eye: Vec3,
    target: Vec3,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let aspect = width / height.max(1.0);
    let proj = Mat4::perspective_rh(CAMERA_FOVY, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
    let view = Mat4::look_at_rh(eye, target, Vec3::Z);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    (eye, (p1 - eye).normalize())
}

/// Ray vs. plane through `point` with unit `normal`; forward hits only.
#[inline]
pub fn ray_plane(ray_origin: Vec3, ray_dir: Vec3, point: Vec3, normal: Vec3) -> Option<f32> {
    let denom = normal.dot(ray_dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = normal.dot(point - ray_origin) / denom;
    (t >= 0.0).then_some(t)
}

/// Intersect a ray with every ring and return the subject id of the nearest
/// hit, or `None` on a miss (always `None` for an empty field).
///
/// Each ring is tested as an annulus of half-width
/// [`PICK_BAND_HALF_WIDTH`] around its base radius, in the ring's current
/// wobble-tilted plane. Ties between overlapping rings go to the smaller
/// ray distance.
pub fn pick_ring<'a>(ray_origin: Vec3, ray_dir: Vec3, field: &'a RingField) -> Option<&'a str> {
    let mut best: Option<(f32, usize)> = None;
    for (i, entity) in field.entities.iter().enumerate() {
        // plane normal = +Z tilted by the ring's rotation about X
        let normal = Vec3::new(0.0, -entity.rotation_x.sin(), entity.rotation_x.cos());
        let Some(t) = ray_plane(ray_origin, ray_dir, Vec3::ZERO, normal) else {
            continue;
        };
        let hit = ray_origin + ray_dir * t;
        // the plane passes through the origin, so |hit| is in-plane distance
        let radial = hit.length();
        if (radial - entity.base_radius).abs() <= PICK_BAND_HALF_WIDTH
            && best.map_or(true, |(bt, _)| t < bt)
        {
            best = Some((t, i));
        }
    }
    best.map(|(_, i)| field.entities[i].subject_id.as_str())
}
