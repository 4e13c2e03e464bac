use super::*;

#[test]
fn codes_follow_the_protocol_numbering() {
    assert_eq!(Op::Clear.code(), 0);
    assert_eq!(Op::Saturate.code(), 13);
    assert_eq!(Op::DisjointClear.code(), 0x10);
    assert_eq!(Op::DisjointXor.code(), 0x1b);
    assert_eq!(Op::ConjointOver.code(), 0x23);
    assert_eq!(Op::ALL.len(), 38);
}

#[test]
fn from_code_accepts_only_assigned_codes() {
    for op in Op::ALL {
        assert_eq!(Op::from_code(op.code()), Some(*op));
    }
    for code in [14u8, 15, 0x1c, 0x1f, 0x2c, 0xff] {
        assert_eq!(Op::from_code(code), None, "{code:#x}");
    }
}

#[test]
fn families_and_names() {
    assert!(Op::DisjointAtop.is_disjoint());
    assert!(!Op::DisjointAtop.is_conjoint());
    assert!(Op::ConjointIn.is_conjoint());
    assert!(!Op::Add.is_disjoint() && !Op::Add.is_conjoint());
    assert_eq!(Op::OverReverse.to_string(), "over_reverse");
    let parsed: Op = serde_json::from_str("\"conjoint_xor\"").unwrap();
    assert_eq!(parsed, Op::ConjointXor);
}
