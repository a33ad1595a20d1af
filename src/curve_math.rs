//!
//! Evaluating points and tangents along bezier and Catmull-Rom curves
//!
//! These work one coordinate at a time, so they can be called with plain numbers, with `CanvasValue`s
//! or with whole `CanvasPoint`s (which work out the x and y coordinates together).
//!

use std::ops::{Add, Sub, Mul};

///
/// The position at `t` (0-1) along a cubic bezier curve
///
pub fn bezier_point<T>(start: T, control1: T, control2: T, end: T, t: f64) -> T
where T: Copy+Add<Output=T>+Sub<Output=T>+Mul<f64, Output=T> {
    let u = 1.0 - t;

    start*(u*u*u) + control1*(3.0*u*u*t) + control2*(3.0*u*t*t) + end*(t*t*t)
}

///
/// The tangent at `t` (0-1) along a cubic bezier curve
///
pub fn bezier_tangent<T>(start: T, control1: T, control2: T, end: T, t: f64) -> T
where T: Copy+Add<Output=T>+Sub<Output=T>+Mul<f64, Output=T> {
    let (a, b, c, d) = (start, control1, control2, end);

    (b*3.0 - a - c*3.0 + d)*(3.0*t*t) + (a - b*2.0 + c)*(6.0*t) + (b - a)*3.0
}

///
/// The position at `t` (0-1) along the Catmull-Rom segment between `control1` and `control2`
///
/// `start` and `end` are the points before and after the segment, which set its direction at each end.
///
pub fn curve_point<T>(start: T, control1: T, control2: T, end: T, t: f64) -> T
where T: Copy+Add<Output=T>+Sub<Output=T>+Mul<f64, Output=T> {
    let (a, b, c, d) = (start, control1, control2, end);

    (b*2.0 + (c - a)*t + (a*2.0 - b*5.0 + c*4.0 - d)*(t*t) + (b*3.0 - a - c*3.0 + d)*(t*t*t)) * 0.5
}

///
/// The tangent at `t` (0-1) along the Catmull-Rom segment between `control1` and `control2`
///
pub fn curve_tangent<T>(start: T, control1: T, control2: T, end: T, t: f64) -> T
where T: Copy+Add<Output=T>+Sub<Output=T>+Mul<f64, Output=T> {
    let (a, b, c, d) = (start, control1, control2, end);

    ((c - a) + (a*2.0 - b*5.0 + c*4.0 - d)*(2.0*t) + (b*3.0 - a - c*3.0 + d)*(3.0*t*t)) * 0.5
}

///
/// The distance between two points
///
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let (dx, dy) = (x2-x1, y2-y1);

    (dx*dx + dy*dy).sqrt()
}
