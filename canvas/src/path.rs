//!
//! Functions that build paths as lists of `Draw` path elements (`Move`, `Line`, `BezierCurve`, `ClosePath`)
//!

use super::draw::*;
use super::transform2d::*;

use curves::*;
use curves::arc;
use curves::bezier;
use curves::bezier::BezierCurve;

use std::f64;
use std::iter;

/// Distance of the control points from the corner of a quarter circle with radius 1
const QUARTER_CIRCLE_CONTROL: f32 = 0.552_284_8;

///
/// Returns the drawing commands for a rectangle
///
pub fn draw_rect(x1: f32, y1: f32, x2: f32, y2: f32) -> Vec<Draw> {
    use self::Draw::*;

    vec![
        Move(x1, y1),
        Line(x1, y2),
        Line(x2, y2),
        Line(x2, y1),
        Line(x1, y1),
        ClosePath
    ]
}

///
/// Returns the drawing commands for a rectangle with rounded corners
///
/// The radius is limited to half of the shortest side. A radius of 0 produces the same path as `draw_rect`.
///
pub fn draw_rounded_rect(x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) -> Vec<Draw> {
    use self::Draw::*;

    let (left, right)   = (x1.min(x2), x1.max(x2));
    let (top, bottom)   = (y1.min(y2), y1.max(y2));
    let radius          = radius.min((right-left)/2.0).min((bottom-top)/2.0);

    if radius <= 0.0 {
        return draw_rect(x1, y1, x2, y2);
    }

    let k = radius * QUARTER_CIRCLE_CONTROL;

    vec![
        Move(left + radius, top),
        Line(right - radius, top),
        BezierCurve((right, top + radius), (right - radius + k, top), (right, top + radius - k)),
        Line(right, bottom - radius),
        BezierCurve((right - radius, bottom), (right, bottom - radius + k), (right - radius + k, bottom)),
        Line(left + radius, bottom),
        BezierCurve((left, bottom - radius), (left + radius - k, bottom), (left, bottom - radius + k)),
        Line(left, top + radius),
        BezierCurve((left + radius, top), (left, top + radius - k), (left + radius - k, top)),
        ClosePath
    ]
}

///
/// Returns the drawing commands for an ellipse with the specified center and radii
///
pub fn draw_ellipse(center_x: f32, center_y: f32, radius_x: f32, radius_y: f32) -> Vec<Draw> {
    use self::Draw::*;

    // Generate a unit circle and turn it into bezier curves
    let circle                          = arc::Circle::new(Coord2(0.0, 0.0), 1.0);
    let curves: Vec<bezier::Curve<_>>   = circle.to_curves();
    let start_point                     = curves[0].start_point();

    // Draw the curves
    let curves  = curves.iter().map(|curve| Draw::from(curve));

    // Complete the path
    let path: Vec<_> = iter::once(Move(start_point.x() as f32, start_point.y() as f32))
        .chain(curves)
        .chain(iter::once(ClosePath))
        .collect();

    // Stretch the unit circle into the ellipse
    let to_ellipse = Transform2D::translate(center_x, center_y) * Transform2D::scale(radius_x, radius_y);
    transform_path(&path, &to_ellipse)
}

///
/// Returns the drawing commands for a circular arc
///
/// Angles are in radians and the arc sweeps from `start` towards increasing angles until it reaches `stop`.
/// When `stop` is less than `start`, it's moved on by whole turns until it isn't. The sweep never covers
/// more than one full turn. A pie arc is closed by a line back to the center, which is the shape used when
/// an arc is filled. Angles that aren't finite produce an empty path.
///
pub fn draw_arc(center_x: f32, center_y: f32, radius: f32, start: f32, stop: f32, pie: bool) -> Vec<Draw> {
    use self::Draw::*;

    let start       = start as f64;
    let stop        = stop as f64;
    if !start.is_finite() || !stop.is_finite() {
        return vec![];
    }

    let full_turn   = f64::consts::PI * 2.0;
    let sweep       = if stop < start { (stop - start).rem_euclid(full_turn) } else { (stop - start).min(full_turn) };
    let start       = start.rem_euclid(full_turn);

    let circle      = arc::Circle::new(Coord2(center_x as f64, center_y as f64), radius as f64);
    let (sx, sy)    = (center_x + radius * (start.cos() as f32), center_y + radius * (start.sin() as f32));
    let mut path    = vec![Move(sx, sy)];

    // Split into sections of at most a quarter turn, each of which becomes one bezier curve (sweeps too small to bend are left out)
    if sweep > 1e-9 {
        let sections    = (sweep / f64::consts::FRAC_PI_2 - 1e-6).ceil().max(1.0) as usize;
        let section     = sweep / (sections as f64);

        for index in 0..sections {
            let a0      = start + section * (index as f64);
            let curve   = circle.arc(a0, a0 + section).to_bezier_curve::<bezier::Curve<Coord2>>();

            path.push(Draw::from(&curve));
        }
    }

    if pie {
        path.push(Line(center_x, center_y));
        path.push(ClosePath);
    }

    path
}

///
/// Applies a transformation to every point in a path
///
pub fn transform_path(path: &[Draw], transform: &Transform2D) -> Vec<Draw> {
    use self::Draw::*;

    let apply = |(x, y): (f32, f32)| transform.transform_point(x, y);

    path.iter()
        .map(|element| match element {
            Move(x, y)                  => { let (x, y) = apply((*x, *y)); Move(x, y) },
            Line(x, y)                  => { let (x, y) = apply((*x, *y)); Line(x, y) },
            BezierCurve(end, cp1, cp2)  => BezierCurve(apply(*end), apply(*cp1), apply(*cp2)),
            other                       => other.clone()
        })
        .collect()
}

///
/// Returns the number of closed subpaths in a path
///
pub fn count_closed_subpaths(path: &[Draw]) -> usize {
    path.iter().filter(|element| **element == Draw::ClosePath).count()
}

impl<'a, Curve: BezierCurve> From<&'a Curve> for Draw
where Curve::Point: Coordinate2D {
    fn from(curve: &'a Curve) -> Draw {
        let end         = curve.end_point();
        let (cp1, cp2)  = curve.control_points();

        Draw::BezierCurve(
            (end.x() as f32, end.y() as f32),
            (cp1.x() as f32, cp1.y() as f32),
            (cp2.x() as f32, cp2.y() as f32))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn end_point(element: &Draw) -> (f32, f32) {
        match element {
            Draw::Move(x, y) | Draw::Line(x, y) => (*x, *y),
            Draw::BezierCurve(end, _, _)        => *end,
            _                                   => panic!("Not a path point")
        }
    }

    #[test]
    fn ellipse_stays_inside_its_bounds() {
        let path = draw_ellipse(100.0, 50.0, 40.0, 20.0);

        for element in path.iter().filter(|element| **element != Draw::ClosePath) {
            let (x, y) = end_point(element);

            assert!(x >= 59.9 && x <= 140.1);
            assert!(y >= 29.9 && y <= 70.1);
        }

        assert!(count_closed_subpaths(&path) == 1);
    }

    #[test]
    fn quarter_arc_ends_at_the_right_place() {
        let path        = draw_arc(0.0, 0.0, 10.0, 0.0, std::f32::consts::FRAC_PI_2, false);
        let (x, y)      = end_point(path.last().unwrap());

        assert!(path.len() == 2);
        assert!(x.abs() < 0.01);
        assert!((y-10.0).abs() < 0.01);
    }

    #[test]
    fn pie_arc_closes_at_center() {
        let path        = draw_arc(5.0, 5.0, 10.0, 0.0, std::f32::consts::PI, true);

        assert!(path[path.len()-2] == Draw::Line(5.0, 5.0));
        assert!(path[path.len()-1] == Draw::ClosePath);
    }

    #[test]
    fn stop_before_start_wraps_around() {
        let path        = draw_arc(0.0, 0.0, 10.0, std::f32::consts::PI, 0.0, false);
        let (x, y)      = end_point(path.last().unwrap());

        assert!(path.len() == 3);
        assert!((x-10.0).abs() < 0.01);
        assert!(y.abs() < 0.01);
    }

    #[test]
    fn stop_far_before_start_finishes() {
        let path        = draw_arc(0.0, 0.0, 10.0, 1.0e20, 0.0, false);

        assert!(path.len() <= 5);
        assert!(path.iter().all(|element| { let (x, y) = end_point(element); x.is_finite() && y.is_finite() }));
    }

    #[test]
    fn huge_sweep_is_limited_to_one_turn() {
        let path        = draw_arc(0.0, 0.0, 10.0, 0.0, 1.0e12, false);

        assert!(path.len() == 5);
    }

    #[test]
    fn full_turn_returns_to_the_start() {
        let path        = draw_arc(0.0, 0.0, 10.0, 0.0, 2.0 * std::f32::consts::PI, false);
        let (x, y)      = end_point(path.last().unwrap());

        assert!(path.len() == 5);
        assert!((x-10.0).abs() < 0.01);
        assert!(y.abs() < 0.01);
    }

    #[test]
    fn non_finite_angles_have_no_path() {
        assert!(draw_arc(0.0, 0.0, 10.0, std::f32::NAN, 1.0, true).is_empty());
        assert!(draw_arc(0.0, 0.0, 10.0, 0.0, std::f32::INFINITY, false).is_empty());
    }

    #[test]
    fn zero_radius_rounded_rect_is_a_rect() {
        assert!(draw_rounded_rect(0.0, 0.0, 10.0, 10.0, 0.0) == draw_rect(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn rounded_rect_radius_is_limited() {
        let path = draw_rounded_rect(0.0, 0.0, 10.0, 4.0, 100.0);

        assert!(path[0] == Draw::Move(2.0, 0.0));
    }
}
