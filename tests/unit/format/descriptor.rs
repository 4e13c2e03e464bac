use super::*;

#[test]
fn codes_match_packed_layout() {
    assert_eq!(FormatName::A8r8g8b8.code(), 0x2002_8888);
    assert_eq!(FormatName::R5g6b5.code(), 0x1002_0565);
    assert_eq!(FormatName::B2g3r3.code(), 0x0803_0332);
    assert_eq!(FormatName::A8.code(), 0x0801_8000);
    assert_eq!(FormatName::A1.code(), 0x0101_1000);
    assert_eq!(FormatName::G1.code(), 0x0105_0000);
}

#[test]
fn codes_are_unique_and_round_trip() {
    for &f in FormatName::ALL {
        assert_eq!(FormatName::from_code(f.code()), Some(f), "{f}");
    }
    assert_eq!(FormatName::from_code(0xdead_beef), None);
}

#[test]
fn every_layout_is_consistent() {
    for &f in FormatName::ALL {
        let d = f.descriptor();
        assert!(d.is_consistent(), "{f}");
        assert_eq!(d.depth, f.bpp());
        assert_eq!(d.alpha.bits(), f.alpha_bits());
        if f.has_color() {
            assert_eq!(d.red.bits(), f.red_bits());
            assert_eq!(d.green.bits(), f.green_bits());
            assert_eq!(d.blue.bits(), f.blue_bits());
        }
    }
}

#[test]
fn argb_and_abgr_place_channels_oppositely() {
    let argb = FormatName::R5g6b5.descriptor();
    assert_eq!(argb.red.shifted_mask(), 0xf800);
    assert_eq!(argb.green.shifted_mask(), 0x07e0);
    assert_eq!(argb.blue.shifted_mask(), 0x001f);

    let abgr = FormatName::A8b8g8r8.descriptor();
    assert_eq!(abgr.alpha.shifted_mask(), 0xff00_0000);
    assert_eq!(abgr.blue.shifted_mask(), 0x00ff_0000);
    assert_eq!(abgr.red.shifted_mask(), 0x0000_00ff);

    let b2g3r3 = FormatName::B2g3r3.descriptor();
    assert_eq!(b2g3r3.blue.shifted_mask(), 0xc0);
    assert_eq!(b2g3r3.red.shifted_mask(), 0x07);
}

#[test]
fn alpha_only_and_indexed_classification() {
    assert!(FormatName::A4.is_alpha_only());
    assert!(!FormatName::A8r8g8b8.is_alpha_only());
    assert!(!FormatName::X8r8g8b8.has_alpha());
    assert!(!FormatName::C8.has_color());
    assert_eq!(FormatName::G4.format_type(), FormatType::Gray);
}

#[test]
fn names_serialize_lowercase() {
    let json = serde_json::to_string(&FormatName::X1b5g5r5).unwrap();
    assert_eq!(json, "\"x1b5g5r5\"");
    assert_eq!(FormatName::A2r2g2b2.to_string(), "a2r2g2b2");
}
