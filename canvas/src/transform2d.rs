use std::f32;
use std::ops::{Mul};

///
/// Represents a 2D affine transformation matrix
///
/// Only the top two rows vary: the bottom row of an affine transform is always `[0, 0, 1]`
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform2D(pub [[f32; 3]; 3]);

impl Default for Transform2D {
    fn default() -> Transform2D {
        Transform2D::identity()
    }
}

impl Transform2D {
    ///
    /// Applies this transformation to a point, returning the transformed point
    ///
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let Transform2D(ref a) = self;

        (
            x*a[0][0] + y*a[0][1] + a[0][2],
            x*a[1][0] + y*a[1][1] + a[1][2]
        )
    }

    ///
    /// Creates the identity transform
    ///
    pub fn identity() -> Transform2D {
        Transform2D([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0]])
    }

    ///
    /// True if this transform leaves every point where it is
    ///
    pub fn is_identity(&self) -> bool {
        *self == Transform2D::identity()
    }

    ///
    /// Creates a translation transformation
    ///
    pub fn translate(x: f32, y: f32) -> Transform2D {
        Transform2D([
            [1.0, 0.0, x    ],
            [0.0, 1.0, y    ],
            [0.0, 0.0, 1.0  ]
        ])
    }

    ///
    /// Creates a scaling transformation
    ///
    pub fn scale(scale_x: f32, scale_y: f32) -> Transform2D {
        Transform2D([
            [scale_x,   0.0,        0.0],
            [0.0,       scale_y,    0.0],
            [0.0,       0.0,        1.0]])
    }

    ///
    /// Creates a rotation transformation (positive angles turn clockwise on a y-down surface)
    ///
    pub fn rotate(radians: f32) -> Transform2D {
        let cos = f32::cos(radians);
        let sin = f32::sin(radians);

        Transform2D([
            [cos,   -sin,   0.0],
            [sin,   cos,    0.0],
            [0.0,   0.0,    1.0]
        ])
    }

    ///
    /// Creates a rotation transformation from an angle in degrees
    ///
    pub fn rotate_degrees(degrees: f32) -> Transform2D {
        Self::rotate(degrees / 180.0 * f32::consts::PI)
    }

    ///
    /// Returns the transform that applies `other` first and then this transform
    ///
    /// This is how a canvas composes a new transformation with its current one: `current.then(translate)`
    /// moves everything drawn afterwards in the current coordinate space.
    ///
    pub fn then(&self, other: &Transform2D) -> Transform2D {
        self * other
    }

    ///
    /// Returns an inverted Transform2D, or None if the transform collapses the plane
    ///
    pub fn invert(&self) -> Option<Transform2D> {
        let Transform2D(m) = self;

        let det = m[0][0]*m[1][1] - m[0][1]*m[1][0];
        if det == 0.0 {
            return None;
        }

        let inv_det = 1.0/det;
        let a       =  m[1][1] * inv_det;
        let b       = -m[0][1] * inv_det;
        let c       = -m[1][0] * inv_det;
        let d       =  m[0][0] * inv_det;

        Some(Transform2D([
            [a,     b,      -(a*m[0][2] + b*m[1][2])],
            [c,     d,      -(c*m[0][2] + d*m[1][2])],
            [0.0,   0.0,    1.0]
        ]))
    }
}

impl Mul<&Transform2D> for &Transform2D {
    type Output=Transform2D;

    fn mul(self, other: &Transform2D) -> Transform2D {
        let Transform2D(a) = self;
        let Transform2D(b) = other;

        let mut result = [[0.0; 3]; 3];
        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col];
            }
        }

        Transform2D(result)
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output=Transform2D;

    #[inline]
    fn mul(self, other: Transform2D) -> Transform2D {
        &self * &other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn apply_translate() {
        let translate   = Transform2D::translate(200.0, 300.0);

        let (x, y)      = translate.transform_point(20.0, 30.0);
        assert!((x-220.0).abs() < 0.01);
        assert!((y-330.0).abs() < 0.01);
    }

    #[test]
    pub fn invert_translate() {
        let translate   = Transform2D::translate(200.0, 300.0);
        let inverse     = translate.invert().unwrap();

        let (x, y)      = inverse.transform_point(220.0, 330.0);
        assert!((y-30.0).abs() < 0.01);
        assert!((x-20.0).abs() < 0.01);
    }

    #[test]
    pub fn invert_rotate_and_translate() {
        let transform   = Transform2D::translate(15.0, -4.0) * Transform2D::rotate(1.2);
        let inverse     = transform.invert().unwrap();

        let (x1, y1)    = transform.transform_point(40.0, 90.0);
        let (x2, y2)    = inverse.transform_point(x1, y1);
        assert!((y2-90.0).abs() < 0.01);
        assert!((x2-40.0).abs() < 0.01);
    }

    #[test]
    pub fn collapsed_transform_has_no_inverse() {
        assert!(Transform2D::scale(0.0, 2.0).invert().is_none());
    }

    #[test]
    pub fn then_applies_the_new_transform_first() {
        let current     = Transform2D::scale(2.0, 2.0);
        let moved       = current.then(&Transform2D::translate(10.0, 5.0));

        let (x, y)      = moved.transform_point(1.0, 1.0);
        assert!((x-22.0).abs() < 0.01);
        assert!((y-12.0).abs() < 0.01);
    }

    #[test]
    pub fn quarter_turn_in_degrees() {
        let (x, y)      = Transform2D::rotate_degrees(90.0).transform_point(10.0, 0.0);
        assert!(x.abs() < 0.01);
        assert!((y-10.0).abs() < 0.01);
    }
}
