use super::*;

fn unified_mask(a: u8) -> Sample {
    Sample {
        argb: u32::from(a) << 24,
        alpha: u32::from(a) * 0x0101_0101,
    }
}

#[test]
fn every_operator_has_both_combiners() {
    let s = Sample {
        argb: 0x8040_2010,
        alpha: 0x8040_2010,
    };
    for &op in Op::ALL {
        for component_alpha in [false, true] {
            let c = Combiner::new(op, component_alpha);
            assert_eq!(c.op(), op);
            let _ = c.combine(s, Some(unified_mask(0x80)), 0x4020_1008);
        }
    }
}

#[test]
fn dst_never_stores_and_clear_stores_zero() {
    let s = Sample {
        argb: 0xffff_ffff,
        alpha: 0xffff_ffff,
    };
    for op in [Op::Dst, Op::DisjointDst, Op::ConjointDst] {
        let c = Combiner::new(op, false);
        assert_eq!(c.combine(s, None, 0x1234_5678), None);
    }
    for op in [Op::Clear, Op::DisjointClear, Op::ConjointClear] {
        assert_eq!(Combiner::new(op, true).combine(s, None, 0x1234_5678), Some(0));
    }
}

#[test]
fn component_table_matches_unified_for_uniform_masks() {
    let ops = [
        Op::Clear,
        Op::Src,
        Op::Dst,
        Op::Over,
        Op::OverReverse,
        Op::In,
        Op::Out,
        Op::Atop,
        Op::AtopReverse,
        Op::Xor,
        Op::Add,
        Op::DisjointOver,
        Op::DisjointIn,
        Op::DisjointXor,
        Op::ConjointOver,
        Op::ConjointAtop,
    ];
    let sources = [0xff10_2030u32, 0x8040_2010, 0x0000_0000, 0x3f3f_3f3f];
    let dests = [0xffff_ffffu32, 0x8000_8000, 0, 0x4020_1008];
    for op in ops {
        let u = Combiner::new(op, false);
        let c = Combiner::new(op, true);
        for &s in &sources {
            let s = Sample { argb: s, alpha: s };
            for &d in &dests {
                for m in [0u8, 0x40, 0xff] {
                    let m = Some(unified_mask(m));
                    let (a, b) = (u.combine(s, m, d), c.combine(s, m, d));
                    assert_eq!(a.unwrap_or(d), b.unwrap_or(d), "{op} {s:?} {d:#x} {m:?}");
                }
            }
        }
    }
}
