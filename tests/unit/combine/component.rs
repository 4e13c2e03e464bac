use super::*;

fn px(argb: u32) -> Sample {
    Sample { argb, alpha: argb }
}

fn cmask(alpha: u32) -> Option<Sample> {
    Some(Sample {
        argb: alpha,
        alpha,
    })
}

#[test]
fn mask_c_carries_per_channel_alpha() {
    let s = px(0x8010_2030);
    assert_eq!(
        mask_c(s, cmask(0xffff_ffff)),
        Masked {
            value: 0x8010_2030,
            alpha: 0x8080_8080
        }
    );
    assert_eq!(mask_c(s, cmask(0)), Masked { value: 0, alpha: 0 });
    let m = mask_c(px(0xffff_ffff), cmask(0x00ff_0080));
    assert_eq!(m.value, 0x00ff_0080);
    assert_eq!(m.alpha, 0x00ff_0080);
}

#[test]
fn over_uses_each_channel_alpha() {
    let r = over_c(px(0xffff_ffff), cmask(0x00ff_0080), 0xff00_0000);
    assert_eq!(r, Some(0xffff_0080));
    assert_eq!(over_c(px(0xffff_ffff), cmask(0), 0x1234_5678), None);
}

#[test]
fn in_reverse_scales_destination_per_channel() {
    let s = Sample {
        argb: 0xff00_0000,
        alpha: 0xffff_ffff,
    };
    assert_eq!(in_reverse_c(s, cmask(0xffff_ffff), 0x1234_5678), None);
    assert_eq!(in_reverse_c(s, cmask(0), 0x1234_5678), Some(0));
    assert_eq!(in_reverse_c(s, cmask(0xff00_ff00), 0xff40_4040), Some(0xff00_4000));
    assert_eq!(out_reverse_c(s, cmask(0xff00_ff00), 0xff40_4040), Some(0x0040_0040));
}

#[test]
fn atop_keeps_destination_under_uncovered_channels() {
    // Opaque red through a mask that only covers red, onto opaque blue.
    let r = atop_c(px(0xffff_0000), cmask(0x00ff_0000), 0xff00_00ff);
    assert_eq!(r, Some(0xffff_00ff));
}

#[test]
fn saturate_adds_up_to_free_alpha() {
    let full = cmask(0xffff_ffff);
    assert_eq!(saturate_c(px(0xffff_ffff), full, 0x8080_8080), Some(0xffff_ffff));
    assert_eq!(saturate_c(px(0xff00_0000), full, 0x8080_8080), Some(0xff80_8080));
    // A channel alpha equal to the free alpha still adds.
    assert_eq!(saturate_c(px(0xffff_ffff), cmask(0x007f_0000), 0x8000_0000), Some(0x807f_0000));
}

#[test]
fn general_uses_source_alpha_byte_for_destination_factor() {
    // The mask leaves alpha untouched but zeroes blue; Fb must follow the alpha byte.
    let r = general_c::<{ factor::CONJOINT }, { factor::A_OVER }>(
        px(0xffff_ffff),
        cmask(0xffff_ff00),
        0xff00_00ff,
    );
    assert_eq!(r, Some(0xffff_ff00));
}
