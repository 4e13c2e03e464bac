use super::*;

fn key(op: Op, src: FormatName, mask: Option<(FormatName, bool)>, dst: FormatName) -> FastPathKey {
    FastPathKey {
        op,
        src,
        src_solid: true,
        mask,
        dst,
    }
}

#[test]
fn solid_over_mask_selection() {
    let k = key(Op::Over, F::A8r8g8b8, Some((F::A8, false)), F::R5g6b5);
    assert_eq!(select_fast_path(&k), Some(FastPath::SolidA8Over));

    let k = key(Op::Over, F::A8r8g8b8, Some((F::A8r8g8b8, true)), F::X8r8g8b8);
    assert_eq!(select_fast_path(&k), Some(FastPath::SolidComponentOver));
    let k = key(Op::Over, F::A8r8g8b8, Some((F::A8r8g8b8, false)), F::X8r8g8b8);
    assert_eq!(select_fast_path(&k), None);
    let k = key(Op::Over, F::A8r8g8b8, Some((F::A8b8g8r8, true)), F::R5g6b5);
    assert_eq!(select_fast_path(&k), None);

    let k = key(Op::Over, F::X8b8g8r8, Some((F::A1, false)), F::B8g8r8);
    assert_eq!(select_fast_path(&k), Some(FastPath::SolidA1Over));

    let mut k = key(Op::Over, F::A8r8g8b8, Some((F::A8, false)), F::A8r8g8b8);
    k.src_solid = false;
    assert_eq!(select_fast_path(&k), None);
    let k = key(Op::Over, F::A8, Some((F::A8, false)), F::A8r8g8b8);
    assert_eq!(select_fast_path(&k), None);
}

#[test]
fn unmasked_over_and_add_selection() {
    let cases = [
        (Op::Over, F::A8r8g8b8, F::X8r8g8b8, Some(FastPath::Over8888)),
        (Op::Over, F::A8b8g8r8, F::A8r8g8b8, None),
        (Op::Over, F::X8b8g8r8, F::B8g8r8, Some(FastPath::Over8888To0888)),
        (Op::Over, F::A8r8g8b8, F::R5g6b5, Some(FastPath::Over8888To0565)),
        (Op::Over, F::B5g6r5, F::B5g6r5, Some(FastPath::Copy0565)),
        (Op::Over, F::R5g6b5, F::B5g6r5, None),
        (Op::Add, F::A8b8g8r8, F::A8b8g8r8, Some(FastPath::Add8888)),
        (Op::Add, F::X8r8g8b8, F::X8r8g8b8, None),
        (Op::Add, F::A8, F::A8, Some(FastPath::AddA8)),
        (Op::Add, F::A1, F::A1, Some(FastPath::AddA1)),
        (Op::Src, F::A8r8g8b8, F::A8r8g8b8, None),
    ];
    for (op, src, dst, want) in cases {
        let mut k = key(op, src, None, dst);
        k.src_solid = false;
        assert_eq!(select_fast_path(&k), want, "{op} {src} {dst}");
    }
}

#[test]
fn unmasked_solid_sources_use_the_constant_loop() {
    for (op, src, dst) in [
        (Op::Over, F::A8r8g8b8, F::A8r8g8b8),
        (Op::Over, F::A8r8g8b8, F::R5g6b5),
        (Op::Over, F::R5g6b5, F::R5g6b5),
        (Op::Add, F::A8r8g8b8, F::A8r8g8b8),
        (Op::Add, F::A8, F::A8),
    ] {
        assert_eq!(select_fast_path(&key(op, src, None, dst)), None, "{op} {src} {dst}");
    }

    let src = Image::new(F::A8r8g8b8, 1, 1).unwrap().with_repeat(true);
    let dst = Image::new(F::A8r8g8b8, 4, 4).unwrap();
    let k = FastPathKey::of(Op::Over, &src, None, &dst).unwrap();
    assert!(k.src_solid);
    assert_eq!(select_fast_path(&k), None);
}

#[test]
fn transforms_and_alpha_maps_disable_fast_paths() {
    let src = Image::new(F::A8r8g8b8, 2, 2).unwrap();
    let dst = Image::new(F::A8r8g8b8, 2, 2).unwrap();
    assert!(FastPathKey::of(Op::Over, &src, None, &dst).is_some());

    let mut t = src.clone();
    t.set_transform(Some(crate::foundation::core::Affine::scale(2.0)));
    assert!(FastPathKey::of(Op::Over, &t, None, &dst).is_none());

    let mut mapped = dst.clone();
    mapped
        .set_alpha_map(Some(Image::new(F::A8, 2, 2).unwrap()), IntPoint::default())
        .unwrap();
    assert!(FastPathKey::of(Op::Over, &src, None, &mapped).is_none());
}

#[test]
fn add_a1_ors_bits() {
    let mut src = Image::new(F::A1, 8, 1).unwrap();
    let mut dst = Image::new(F::A1, 8, 1).unwrap();
    src.data_mut()[0] = 0b0000_1111;
    dst.data_mut()[0] = 0b0011_1100;
    let tile = Tile {
        width: 8,
        height: 1,
        ..Tile::default()
    };
    FastPath::AddA1
        .run(&Combiner::new(Op::Add, false), &src, None, &mut dst, &tile)
        .unwrap();
    assert_eq!(dst.data()[0], 0b0011_1111);
}

#[test]
fn solid_paths_require_a_mask() {
    let src = Image::new(F::A8r8g8b8, 1, 1).unwrap().with_repeat(true);
    let mut dst = Image::new(F::A8r8g8b8, 1, 1).unwrap();
    let err = FastPath::SolidA8Over
        .run(&Combiner::new(Op::Over, false), &src, None, &mut dst, &Tile::default())
        .unwrap_err();
    assert!(matches!(err, PixcompError::Evaluation(_)));
}
