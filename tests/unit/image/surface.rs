use super::*;
use crate::foundation::core::IntRect;

#[test]
fn new_image_is_zeroed_with_word_aligned_stride() {
    let img = Image::new(FormatName::R8g8b8, 3, 2).unwrap();
    assert_eq!(img.stride(), 12);
    assert_eq!(img.data().len(), 24);
    assert!(img.data().iter().all(|&b| b == 0));
    assert_eq!(min_stride(FormatName::A1, 33), 8);
    assert_eq!(min_stride(FormatName::A4, 1), 4);
}

#[test]
fn oversized_images_are_rejected() {
    let err = Image::new(FormatName::A8, 32768, 1).unwrap_err();
    assert!(matches!(err, PixcompError::Validation(_)));
    assert!(Image::new(FormatName::A1, MAX_DIMENSION, 1).is_ok());
}

#[test]
fn from_data_checks_stride_and_length() {
    assert!(Image::from_data(FormatName::A8r8g8b8, 2, 2, 4, vec![0; 16]).is_err());
    assert!(Image::from_data(FormatName::A8r8g8b8, 2, 2, 8, vec![0; 15]).is_err());
    assert!(Image::from_data(FormatName::A8r8g8b8, 2, 2, 8, vec![0; 16]).is_ok());
}

#[test]
fn pixel_round_trip_and_bounds() {
    let mut img = Image::new(FormatName::A8r8g8b8, 2, 2).unwrap();
    img.set_pixel(1, 1, 0x8040_2010).unwrap();
    assert_eq!(img.pixel(1, 1).unwrap(), 0x8040_2010);
    assert_eq!(&img.data()[12..16], &[0x10, 0x20, 0x40, 0x80]);
    assert!(img.pixel(2, 0).is_err());
    assert!(img.set_pixel(0, 2, 0).is_err());
}

#[test]
fn indexed_formats_have_no_pixel_access() {
    let img = Image::new(FormatName::C8, 1, 1).unwrap();
    assert!(matches!(
        img.pixel(0, 0).unwrap_err(),
        PixcompError::UnsupportedFormat(_)
    ));
}

#[test]
fn origin_selects_a_sub_block() {
    let mut data = vec![0u8; 4 * 4];
    data[4 * 1 + 2] = 0x77;
    let img = Image::from_data(FormatName::A8, 2, 2, 4, data)
        .unwrap()
        .with_origin(IntPoint::new(1, 1))
        .unwrap();
    assert_eq!(img.pixel(1, 0).unwrap(), 0x7700_0000);
    assert_eq!(img.raw(1, 0), 0x77);
    assert_eq!(img.raw(-1, 0), 0);

    let img = Image::new(FormatName::A8, 2, 2).unwrap();
    assert!(img.with_origin(IntPoint::new(0, 1)).is_err());
}

#[test]
fn composite_clip_applies_origin_then_bounds() {
    let mut img = Image::new(FormatName::A8, 4, 4).unwrap();
    assert_eq!(img.composite_clip().unwrap().boxes(), &[IntBox::new(0, 0, 4, 4)]);

    img.set_clip_region(Some(Region::from_rect(IntRect::new(0, 0, 3, 3))));
    img.set_clip_origin(IntPoint::new(2, -1));
    assert_eq!(img.composite_clip().unwrap().boxes(), &[IntBox::new(2, 0, 4, 2)]);
}

#[test]
fn alpha_map_must_carry_alpha() {
    let mut img = Image::new(FormatName::X8r8g8b8, 2, 2).unwrap();
    let rgb = Image::new(FormatName::R5g6b5, 2, 2).unwrap();
    assert!(img.set_alpha_map(Some(rgb), IntPoint::default()).is_err());

    let map = Image::new(FormatName::A8, 2, 2).unwrap();
    img.set_alpha_map(Some(map), IntPoint::new(1, 0)).unwrap();
    assert_eq!(img.alpha_origin(), IntPoint::new(1, 0));
    assert!(!img.is_solid());

    let nested = img.clone();
    let mut other = Image::new(FormatName::A8r8g8b8, 1, 1).unwrap();
    assert!(other.set_alpha_map(Some(nested), IntPoint::default()).is_err());
    assert!(img.take_alpha_map().is_some());
}

#[test]
fn solid_requires_repeat_single_pixel_and_no_transform() {
    let img = Image::new(FormatName::A8r8g8b8, 1, 1).unwrap();
    assert!(!img.is_solid());
    let mut img = img.with_repeat(true);
    assert!(img.is_solid());
    img.set_transform(Some(Affine::scale(2.0)));
    assert!(!img.is_solid());
}

#[test]
fn identity_transform_is_no_transform() {
    let mut img = Image::new(FormatName::A8r8g8b8, 1, 1).unwrap().with_repeat(true);
    img.set_transform(Some(Affine::IDENTITY));
    assert_eq!(img.transform(), None);
    assert!(img.is_solid());

    img.set_transform(Some(Affine::translate((1.0, 0.0))));
    assert!(img.transform().is_some());
    img.set_transform(None);
    assert_eq!(img.transform(), None);
}

#[test]
fn raw_access_at_sub_byte_depth() {
    let mut img = Image::new(FormatName::A4, 3, 1).unwrap();
    img.set_raw(2, 0, 0xf);
    img.set_raw(1, 0, 0x3);
    assert_eq!(img.raw(2, 0), 0xf);
    assert_eq!(img.raw(1, 0), 0x3);
    assert_eq!(img.data()[0], 0x30);
    assert_eq!(img.data()[1], 0x0f);
    img.set_raw(3, 0, 0xf);
    assert_eq!(img.data()[1], 0x0f);
}
