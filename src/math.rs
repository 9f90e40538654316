//! Small geometric helpers on top of `cgmath`.

use cgmath::{prelude::*, Vector3, Vector4};
use derive_more::{From, Into};


/// A homogeneous position or direction with 4 components.
pub type Vec4 = Vector4<f32>;

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, From, Into)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const RED: Color = Color([1.0, 0.0, 0.0, 1.0]);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Creates a point `(x, y, z, 1)`.
#[inline]
pub fn point(x: f32, y: f32, z: f32) -> Vec4 {
    Vector4::new(x, y, z, 1.0)
}

/// Returns the unnormalized normal of the triangle `p0 p1 p2`, i.e.
/// `(p1 - p0) × (p2 - p0)`. Only the `xyz` parts are used; `w` of the result
/// is 0. The length of the result is twice the triangle's area.
pub fn face_normal(p0: Vec4, p1: Vec4, p2: Vec4) -> Vec4 {
    let e1: Vector3<f32> = (p1 - p0).truncate();
    let e2: Vector3<f32> = (p2 - p0).truncate();
    e1.cross(e2).extend(0.0)
}

/// Appends the four components of `v` to `out`.
#[inline]
pub(crate) fn push_vec4(out: &mut Vec<f32>, v: Vec4) {
    out.extend_from_slice(&[v.x, v.y, v.z, v.w]);
}

/// The zero vector, used as starting value for normal accumulation.
#[inline]
pub(crate) fn zero() -> Vec4 {
    Vec4::zero()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_of_ccw_triangle_points_up() {
        let n = face_normal(point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(0.0, 1.0, 0.0));
        assert_eq!(n, Vector4::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn normal_is_not_normalized() {
        let n = face_normal(point(0.0, 0.0, 0.0), point(2.0, 0.0, 0.0), point(0.0, 3.0, 0.0));
        assert_eq!(n, Vector4::new(0.0, 0.0, 6.0, 0.0));
    }

    #[test]
    fn w_is_ignored() {
        let a = Vector4::new(0.0, 0.0, 0.0, 5.0);
        let n = face_normal(a, point(0.0, 1.0, 0.0), point(0.0, 0.0, 1.0));
        assert_eq!(n, Vector4::new(1.0, 0.0, 0.0, 0.0));
    }
}
