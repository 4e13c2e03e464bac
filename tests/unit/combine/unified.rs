use super::*;

fn px(argb: u32) -> Sample {
    Sample { argb, alpha: argb }
}

fn mask(a: u8) -> Option<Sample> {
    let argb = u32::from(a) << 24;
    Some(Sample {
        argb,
        alpha: u32::from(a) * 0x0101_0101,
    })
}

#[test]
fn mask_helpers() {
    assert_eq!(mask_u(px(0xff00_00ff), None), 0xff00_00ff);
    assert_eq!(mask_u(px(0xff00_00ff), mask(0)), 0);
    assert_eq!(mask_u(px(0xff00_00ff), mask(0xff)), 0xff00_00ff);
    assert_eq!(mask_u(px(0xff00_00ff), mask(0x80)), 0x8000_0080);
    assert_eq!(mask_alpha_u(px(0xff00_00ff), mask(0x80)), 0x8000_0000);
}

#[test]
fn over_shortcuts_and_blend() {
    assert_eq!(over_u(px(0xff10_2030), None, 0x8080_8080), Some(0xff10_2030));
    assert_eq!(over_u(px(0), None, 0x8080_8080), None);
    assert_eq!(over_u(px(0x80ff_0000), None, 0xffff_ffff), Some(0xffff_7f7f));
    assert_eq!(over_u(px(0xffff_ffff), mask(0), 0x1234_5678), None);
}

#[test]
fn over_reverse_keeps_opaque_destination() {
    assert_eq!(over_reverse_u(px(0xffff_ffff), None, 0xff00_0000), None);
    assert_eq!(over_reverse_u(px(0xff00_ff00), None, 0), Some(0xff00_ff00));
    assert_eq!(over_reverse_u(px(0xffff_ffff), None, 0x8000_0000), Some(0xff7f_7f7f));
}

#[test]
fn in_and_out() {
    assert_eq!(in_u(px(0xffff_ffff), None, 0), Some(0));
    assert_eq!(in_u(px(0xffff_ffff), None, 0x8000_0000), Some(0x8080_8080));
    assert_eq!(out_u(px(0xffff_ffff), None, 0xff00_0000), Some(0));
    assert_eq!(out_u(px(0xffff_ffff), None, 0x8000_0000), Some(0x7f7f_7f7f));
    assert_eq!(in_reverse_u(px(0x8000_0000), None, 0xff40_2010), Some(0x8020_1008));
    assert_eq!(in_reverse_u(px(0xff00_0000), None, 0xff40_2010), None);
    assert_eq!(out_reverse_u(px(0xff00_0000), None, 0xff40_2010), Some(0));
    assert_eq!(out_reverse_u(px(0), None, 0xff40_2010), None);
}

#[test]
fn atop_and_xor_of_opaque_pixels() {
    let s = px(0xffff_0000);
    let d = 0xff00_00ff;
    assert_eq!(atop_u(s, None, d), Some(0xffff_0000));
    assert_eq!(atop_reverse_u(s, None, d), Some(0xff00_00ff));
    assert_eq!(xor_u(s, None, d), Some(0));
}

#[test]
fn add_saturates_and_skips_noops() {
    assert_eq!(add_u(px(0x8080_8080), None, 0x9090_9090), Some(0xffff_ffff));
    assert_eq!(add_u(px(0x0102_0304), None, 0x1010_1010), Some(0x1112_1314));
    assert_eq!(add_u(px(0x0102_0304), None, 0xffff_ffff), None);
    assert_eq!(add_u(px(0), None, 0x1234_5678), None);
    assert_eq!(add_u(px(0xffff_ffff), None, 0xffff_ffff), Some(0xffff_ffff));
}

#[test]
fn saturate_stores_only_denser_sources() {
    assert_eq!(saturate_u(px(0x4000_0000), None, 0x8000_0000), None);
    assert_eq!(saturate_u(px(0x9000_0000), None, 0x8000_0000), Some(0x9000_0000));
    assert_eq!(saturate_u(px(0xff00_0000), None, 0xff00_0000), Some(0xff00_0000));
}

#[test]
fn disjoint_and_conjoint_over_differ_on_overlap() {
    let s = px(0x8040_0000);
    let d = 0x8000_8000;
    assert_eq!(disjoint_over_u(s, None, d), Some(0xff40_7f00));
    assert_eq!(
        general_u::<{ factor::CONJOINT }, { factor::A_OVER }>(s, None, d),
        Some(0x8040_0000)
    );
    assert_eq!(disjoint_over_u(px(0), None, d), None);
}

#[test]
fn disjoint_xor_of_opaque_pixels_clears() {
    let r = general_u::<{ factor::DISJOINT }, { factor::XOR }>(px(0xffff_ffff), None, 0xff00_ff00);
    assert_eq!(r, Some(0));
}
