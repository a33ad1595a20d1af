use std::ops::{Add, Sub, Mul, Div, Neg};

///
/// The size of the surface that a frame is being drawn on, in pixels
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> SurfaceSize {
        SurfaceSize { width, height }
    }
}

///
/// A position or distance on the canvas
///
/// The value is made of an absolute part, in pixels, and a relative part, which is a fraction of the
/// width or height of the surface. Which extent the relative part is measured against depends on
/// where the value is used: x coordinates and widths resolve against the surface width, y coordinates
/// and heights against the surface height.
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CanvasValue {
    pub absolute: f64,
    pub relative: f64
}

impl CanvasValue {
    ///
    /// Creates a value from its absolute and relative parts
    ///
    pub fn new(absolute: f64, relative: f64) -> CanvasValue {
        CanvasValue { absolute, relative }
    }

    ///
    /// A value that's a fixed number of pixels
    ///
    pub fn absolute(pixels: f64) -> CanvasValue {
        CanvasValue { absolute: pixels, relative: 0.0 }
    }

    ///
    /// A value that's a fraction of the extent of the surface
    ///
    pub fn relative(fraction: f64) -> CanvasValue {
        CanvasValue { absolute: 0.0, relative: fraction }
    }

    pub fn zero() -> CanvasValue {
        CanvasValue { absolute: 0.0, relative: 0.0 }
    }

    ///
    /// Works out the pixel position of this value along an axis of the specified length
    ///
    #[inline]
    pub fn resolve(&self, extent: f64) -> f64 {
        self.relative * extent + self.absolute
    }
}

impl From<f64> for CanvasValue {
    #[inline]
    fn from(pixels: f64) -> CanvasValue {
        CanvasValue::absolute(pixels)
    }
}

impl From<f32> for CanvasValue {
    #[inline]
    fn from(pixels: f32) -> CanvasValue {
        CanvasValue::absolute(pixels as f64)
    }
}

impl From<i32> for CanvasValue {
    #[inline]
    fn from(pixels: i32) -> CanvasValue {
        CanvasValue::absolute(pixels as f64)
    }
}

impl Add<CanvasValue> for CanvasValue {
    type Output = CanvasValue;

    fn add(self, other: CanvasValue) -> CanvasValue {
        CanvasValue::new(self.absolute + other.absolute, self.relative + other.relative)
    }
}

impl Sub<CanvasValue> for CanvasValue {
    type Output = CanvasValue;

    fn sub(self, other: CanvasValue) -> CanvasValue {
        CanvasValue::new(self.absolute - other.absolute, self.relative - other.relative)
    }
}

impl Mul<f64> for CanvasValue {
    type Output = CanvasValue;

    fn mul(self, factor: f64) -> CanvasValue {
        CanvasValue::new(self.absolute * factor, self.relative * factor)
    }
}

impl Mul<CanvasValue> for f64 {
    type Output = CanvasValue;

    fn mul(self, value: CanvasValue) -> CanvasValue {
        value * self
    }
}

impl Div<f64> for CanvasValue {
    type Output = CanvasValue;

    fn div(self, divisor: f64) -> CanvasValue {
        CanvasValue::new(self.absolute / divisor, self.relative / divisor)
    }
}

impl Neg for CanvasValue {
    type Output = CanvasValue;

    fn neg(self) -> CanvasValue {
        self * -1.0
    }
}

///
/// A point on the canvas
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: CanvasValue,
    pub y: CanvasValue
}

impl CanvasPoint {
    pub fn new<X: Into<CanvasValue>, Y: Into<CanvasValue>>(x: X, y: Y) -> CanvasPoint {
        CanvasPoint { x: x.into(), y: y.into() }
    }

    ///
    /// A point a fixed number of pixels from the origin
    ///
    pub fn absolute(x: f64, y: f64) -> CanvasPoint {
        CanvasPoint::new(CanvasValue::absolute(x), CanvasValue::absolute(y))
    }

    ///
    /// A point at a fraction of the width and height of the surface
    ///
    pub fn relative(x: f64, y: f64) -> CanvasPoint {
        CanvasPoint::new(CanvasValue::relative(x), CanvasValue::relative(y))
    }

    pub fn zero() -> CanvasPoint {
        CanvasPoint::default()
    }

    ///
    /// The pixel position of this point on a surface of the specified size
    ///
    pub fn resolve(&self, size: SurfaceSize) -> (f64, f64) {
        (self.x.resolve(size.width), self.y.resolve(size.height))
    }
}

impl From<(f64, f64)> for CanvasPoint {
    fn from((x, y): (f64, f64)) -> CanvasPoint {
        CanvasPoint::absolute(x, y)
    }
}

impl Add<CanvasPoint> for CanvasPoint {
    type Output = CanvasPoint;

    fn add(self, other: CanvasPoint) -> CanvasPoint {
        CanvasPoint { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub<CanvasPoint> for CanvasPoint {
    type Output = CanvasPoint;

    fn sub(self, other: CanvasPoint) -> CanvasPoint {
        CanvasPoint { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f64> for CanvasPoint {
    type Output = CanvasPoint;

    fn mul(self, factor: f64) -> CanvasPoint {
        CanvasPoint { x: self.x * factor, y: self.y * factor }
    }
}

///
/// The size of something on the canvas
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: CanvasValue,
    pub height: CanvasValue
}

impl CanvasSize {
    pub fn new<W: Into<CanvasValue>, H: Into<CanvasValue>>(width: W, height: H) -> CanvasSize {
        CanvasSize { width: width.into(), height: height.into() }
    }

    pub fn absolute(width: f64, height: f64) -> CanvasSize {
        CanvasSize::new(CanvasValue::absolute(width), CanvasValue::absolute(height))
    }

    pub fn relative(width: f64, height: f64) -> CanvasSize {
        CanvasSize::new(CanvasValue::relative(width), CanvasValue::relative(height))
    }

    ///
    /// The size in pixels on a surface of the specified size
    ///
    pub fn resolve(&self, size: SurfaceSize) -> (f64, f64) {
        (self.width.resolve(size.width), self.height.resolve(size.height))
    }
}

impl Add<CanvasSize> for CanvasSize {
    type Output = CanvasSize;

    fn add(self, other: CanvasSize) -> CanvasSize {
        CanvasSize { width: self.width + other.width, height: self.height + other.height }
    }
}

impl Sub<CanvasSize> for CanvasSize {
    type Output = CanvasSize;

    fn sub(self, other: CanvasSize) -> CanvasSize {
        CanvasSize { width: self.width - other.width, height: self.height - other.height }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolve_combines_both_parts() {
        let value = CanvasValue::new(10.0, 0.25);

        assert!((value.resolve(400.0) - 110.0).abs() < 0.0001);
        assert!((value.resolve(0.0) - 10.0).abs() < 0.0001);
    }

    #[test]
    fn resolve_is_additive() {
        let a = CanvasValue::new(10.0, 0.25);
        let b = CanvasValue::new(-4.0, 0.5);

        for extent in [0.0, 1.0, 123.0, 800.0].iter() {
            let combined = (a + b).resolve(*extent);
            assert!((combined - (a.resolve(*extent) + b.resolve(*extent))).abs() < 0.0001);
        }
    }

    #[test]
    fn arithmetic_scales_both_parts() {
        let value = CanvasValue::new(10.0, 0.5);

        assert!(value * 2.0 == CanvasValue::new(20.0, 1.0));
        assert!(2.0 * value == CanvasValue::new(20.0, 1.0));
        assert!(value / 2.0 == CanvasValue::new(5.0, 0.25));
        assert!(-value == CanvasValue::new(-10.0, -0.5));
        assert!(value - value == CanvasValue::zero());
    }

    #[test]
    fn points_resolve_each_axis_separately() {
        let point   = CanvasPoint::relative(0.5, 0.5) + CanvasPoint::absolute(10.0, 0.0);
        let (x, y)  = point.resolve(SurfaceSize::new(200.0, 100.0));

        assert!((x - 110.0).abs() < 0.0001);
        assert!((y - 50.0).abs() < 0.0001);
    }

    #[test]
    fn sizes_subtract_componentwise() {
        let size = CanvasSize::relative(1.0, 1.0) - CanvasSize::absolute(20.0, 10.0);

        assert!(size.resolve(SurfaceSize::new(100.0, 50.0)) == (80.0, 40.0));
    }
}
