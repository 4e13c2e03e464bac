use super::*;

#[test]
fn floor_and_ceil_round_towards_infinities() {
    assert_eq!(Fixed::from_f64(1.25).floor(), 1);
    assert_eq!(Fixed::from_f64(1.25).ceil(), 2);
    assert_eq!(Fixed::from_f64(-1.25).floor(), -2);
    assert_eq!(Fixed::from_f64(-1.25).ceil(), -1);
    assert_eq!(Fixed::from_int(3).ceil(), 3);
    assert_eq!(Fixed::from_int(3).floor(), 3);
}

#[test]
fn from_int_saturates() {
    assert_eq!(Fixed::from_int(40_000).0, i32::MAX);
    assert_eq!(Fixed::from_int(-40_000).0, i32::MIN);
    assert_eq!(Fixed::from(2), Fixed(0x2_0000));
}

#[test]
fn float_round_trip_is_exact_for_representable_values() {
    for v in [0.0, 0.5, -0.25, 17.0625, -300.75] {
        assert_eq!(Fixed::from_f64(v).to_f64(), v);
    }
    assert_eq!(Fixed::from_f64(0.75).frac(), 0xc000);
}

#[test]
fn serde_is_transparent() {
    let json = serde_json::to_string(&Fixed::ONE).unwrap();
    assert_eq!(json, "65536");
    let back: Fixed = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Fixed::ONE);
}
