use super::*;

fn pt(x: f64, y: f64) -> PointFixed {
    PointFixed::new(Fixed::from_f64(x), Fixed::from_f64(y))
}

fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Trapezoid {
    Trapezoid::from_rect(
        Fixed::from_f64(x1),
        Fixed::from_f64(y1),
        Fixed::from_f64(x2),
        Fixed::from_f64(y2),
    )
}

#[test]
fn line_x_truncates_or_rounds_up() {
    let line = LineFixed::new(pt(0.0, 0.0), pt(1.0, 3.0));
    assert_eq!(line_fixed_x(&line, Fixed::ONE, false), Fixed(21845));
    assert_eq!(line_fixed_x(&line, Fixed::ONE, true), Fixed(21846));
    assert_eq!(line_fixed_x(&line, Fixed::from_int(3), true), Fixed::ONE);

    let flat = LineFixed::new(pt(2.0, 1.0), pt(5.0, 1.0));
    assert_eq!(line_fixed_x(&flat, Fixed::ZERO, false), Fixed::from_int(2));
}

#[test]
fn trapezoid_bounds_round_outwards() {
    assert_eq!(
        trapezoid_bounds(&[rect(0.5, 0.25, 2.5, 1.75)]),
        Some(IntBox::new(0, 0, 3, 2))
    );
    let slanted = Trapezoid::new(
        Fixed::ZERO,
        Fixed::ONE,
        LineFixed::new(pt(0.25, 0.0), pt(0.75, 1.0)),
        LineFixed::new(pt(1.0, 0.0), pt(1.0, 1.0)),
    );
    assert_eq!(trapezoid_bounds(&[slanted]), Some(IntBox::new(0, 0, 1, 1)));
}

#[test]
fn trapezoid_bounds_skip_degenerate_input() {
    let degenerate = rect(-50.0, 9.0, 50.0, 9.0);
    assert_eq!(trapezoid_bounds(&[]), None);
    assert_eq!(trapezoid_bounds(&[degenerate]), None);
    assert_eq!(
        trapezoid_bounds(&[degenerate, rect(1.0, 1.0, 2.0, 3.0), rect(4.0, 0.5, 6.0, 1.0)]),
        Some(IntBox::new(1, 0, 6, 3))
    );
}

#[test]
fn triangle_bounds_cover_every_vertex() {
    let tri = Triangle::new(pt(5.0, 5.0), pt(1.0, 9.0), pt(3.0, 2.0));
    assert_eq!(triangle_bounds(&[tri]), Some(IntBox::new(1, 2, 5, 9)));

    let other = Triangle::new(pt(0.5, 0.2), pt(3.7, 1.1), pt(1.6, 3.9));
    assert_eq!(triangle_bounds(&[other]), Some(IntBox::new(0, 0, 4, 4)));
    assert_eq!(triangle_bounds(&[tri, other]), Some(IntBox::new(0, 0, 5, 9)));
    assert_eq!(triangle_bounds(&[]), None);
}
