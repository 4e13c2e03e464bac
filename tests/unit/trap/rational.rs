use super::*;

#[test]
fn new_normalizes_negative_numerators() {
    assert_eq!(
        RationalPoint::new(-7, 3),
        RationalPoint {
            whole: -3,
            rem: 2,
            den: 3
        }
    );
    assert_eq!(RationalPoint::new(9, 3).rem, 0);
}

#[test]
fn stepping_matches_direct_construction() {
    let mut p = RationalPoint::new(5, 7);
    let inc = p.increment(-11);
    for k in 1..50i128 {
        p.step(inc);
        assert_eq!(p, RationalPoint::new(5 - 11 * k, 7), "step {k}");
    }
}

#[test]
fn strict_comparisons() {
    let exact = RationalPoint::new(12, 4);
    assert!(!exact.lt(3) && !exact.gt(3));
    let above = RationalPoint::new(13, 4);
    assert!(above.gt(3) && !above.lt(3));
    assert!(above.lt(4));
}
