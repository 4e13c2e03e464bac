use super::*;

#[test]
fn single_pixel_repeat_source_binds_constant() {
    let mut img = Image::new(FormatName::A8, 1, 1).unwrap().with_repeat(true);
    img.set_pixel(0, 0, 0x8000_0000).unwrap();
    let op = bind(&img, IntPoint::new(5, -3), BindCaps::SOURCE).unwrap();
    assert!(op.is_constant());
    assert_eq!(op.fetch(), 0x8000_0000);
    assert_eq!(op.fetch_alpha(), 0x8080_8080);
}

#[test]
fn destination_never_binds_constant() {
    let mut img = Image::new(FormatName::A8r8g8b8, 1, 1).unwrap().with_repeat(true);
    let op = bind(&mut img, IntPoint::default(), BindCaps::DESTINATION).unwrap();
    assert!(matches!(op, Operand::Direct(_)));
}

#[test]
fn unregistered_formats_fail_without_panicking() {
    for f in [FormatName::C8, FormatName::G4, FormatName::G1] {
        let img = Image::new(f, 2, 2).unwrap();
        let err = bind(&img, IntPoint::default(), BindCaps::SOURCE).unwrap_err();
        assert!(matches!(err, PixcompError::UnsupportedFormat(_)), "{f}");
    }
}

#[test]
fn transform_wins_over_alpha_map_for_sources() {
    let mut img = Image::new(FormatName::A8r8g8b8, 2, 2).unwrap();
    img.set_alpha_map(Some(Image::new(FormatName::A8, 2, 2).unwrap()), IntPoint::default())
        .unwrap();
    img.set_transform(Some(Affine::scale(2.0)));
    let op = bind(&img, IntPoint::new(1, 1), BindCaps::SOURCE).unwrap();
    let Operand::Transformed { inner, .. } = &op else {
        panic!("expected transformed operand");
    };
    assert!(matches!(**inner, Operand::ExternalAlpha { .. }));
    assert_eq!(op.fetch(), 0);

    let op = bind(&img, IntPoint::new(1, 1), BindCaps::DESTINATION);
    assert!(matches!(op, Ok(Operand::ExternalAlpha { .. })));
}

#[test]
fn alpha_operand_is_offset_by_alpha_origin() {
    let mut img = Image::new(FormatName::X8r8g8b8, 3, 1).unwrap();
    img.set_pixel(2, 0, 0xff10_2030).unwrap();
    let mut map = Image::new(FormatName::A8, 3, 1).unwrap();
    map.set_pixel(1, 0, 0x7700_0000).unwrap();
    img.set_alpha_map(Some(map), IntPoint::new(1, 0)).unwrap();

    let op = bind(&img, IntPoint::new(2, 0), BindCaps::SOURCE).unwrap();
    assert_eq!(op.fetch(), 0x7710_2030);
}

#[test]
fn external_alpha_destination_writes_both_buffers() {
    let mut img = Image::new(FormatName::X8r8g8b8, 1, 1).unwrap();
    img.set_alpha_map(Some(Image::new(FormatName::A8, 1, 1).unwrap()), IntPoint::default())
        .unwrap();
    {
        let mut op = bind(&mut img, IntPoint::default(), BindCaps::DESTINATION).unwrap();
        op.store(0x3344_5566);
    }
    assert_eq!(img.pixel(0, 0).unwrap(), 0xff44_5566);
    assert_eq!(img.alpha_map().unwrap().pixel(0, 0).unwrap(), 0x3300_0000);
}
