use super::*;

#[test]
fn disjoint_parts() {
    assert_eq!(disjoint_out_part(0x80, 0x80), 253);
    assert_eq!(disjoint_in_part(0x80, 0x80), 2);
    // Enough room left: the whole of `a` stays outside.
    assert_eq!(disjoint_out_part(0x40, 0x80), 0xff);
    assert_eq!(disjoint_in_part(0x40, 0x80), 0);
}

#[test]
fn conjoint_parts() {
    assert_eq!(conjoint_out_part(0x80, 0x40), 128);
    assert_eq!(conjoint_in_part(0x80, 0x40), 127);
    assert_eq!(conjoint_out_part(0x40, 0x80), 0);
    assert_eq!(conjoint_in_part(0x40, 0x80), 0xff);
}

#[test]
fn division_truncates() {
    // 1/2 of 255 is 127.5; the factor keeps the truncated value.
    assert_eq!(conjoint_in_part(2, 1), 127);
    assert_eq!(disjoint_out_part(2, 0xfe), 127);
    assert_eq!(int_div(127, 254), 127);
}

#[test]
fn zero_alphas_do_not_divide_by_zero() {
    for b in [0u8, 1, 0x80, 0xff] {
        assert_eq!(disjoint_out_part(0, b), 0xff);
        assert_eq!(conjoint_in_part(0, b), 0xff);
        assert_eq!(conjoint_out_part(0, b), 0);
        assert_eq!(disjoint_in_part(0, b), 0);
    }
}

#[test]
fn combine_flags_select_factors() {
    assert_eq!(factors::<DISJOINT>(A, 0x80, 0x80), (0xff, 0));
    assert_eq!(factors::<DISJOINT>(B, 0x80, 0x80), (0, 0xff));
    assert_eq!(factors::<DISJOINT>(A_OVER, 0x80, 0x80), (0xff, 253));
    assert_eq!(factors::<CONJOINT>(B_OVER, 0x80, 0x40), (128, 0xff));
    assert_eq!(factors::<CONJOINT>(XOR, 0x80, 0x80), (0, 0));
    assert_eq!(factors::<DISJOINT>(A_ATOP, 0xff, 0xff), (0xff, 0));
    assert_eq!(factors::<CONJOINT>(B_ATOP, 0xff, 0xff), (0, 0xff));
    assert_eq!(factors::<CONJOINT>(A_IN | B_IN, 0x40, 0x80), (0xff, 127));
}
