use std::fmt;

macro_rules! operators {
    ($($variant:ident = $code:literal => $name:literal,)*) => {
        /// Porter-Duff compositing operator, with its protocol code as discriminant.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[repr(u8)]
        pub enum Op {
            $(
                #[doc = concat!("`", $name, "` (code ", stringify!($code), ").")]
                $variant = $code,
            )*
        }

        impl Op {
            /// Every operator in code order.
            pub const ALL: &'static [Op] = &[$(Op::$variant,)*];

            /// Snake-case name, e.g. `over_reverse`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Op::$variant => $name,)*
                }
            }
        }
    };
}

operators! {
    Clear = 0x00 => "clear",
    Src = 0x01 => "src",
    Dst = 0x02 => "dst",
    Over = 0x03 => "over",
    OverReverse = 0x04 => "over_reverse",
    In = 0x05 => "in",
    InReverse = 0x06 => "in_reverse",
    Out = 0x07 => "out",
    OutReverse = 0x08 => "out_reverse",
    Atop = 0x09 => "atop",
    AtopReverse = 0x0a => "atop_reverse",
    Xor = 0x0b => "xor",
    Add = 0x0c => "add",
    Saturate = 0x0d => "saturate",
    DisjointClear = 0x10 => "disjoint_clear",
    DisjointSrc = 0x11 => "disjoint_src",
    DisjointDst = 0x12 => "disjoint_dst",
    DisjointOver = 0x13 => "disjoint_over",
    DisjointOverReverse = 0x14 => "disjoint_over_reverse",
    DisjointIn = 0x15 => "disjoint_in",
    DisjointInReverse = 0x16 => "disjoint_in_reverse",
    DisjointOut = 0x17 => "disjoint_out",
    DisjointOutReverse = 0x18 => "disjoint_out_reverse",
    DisjointAtop = 0x19 => "disjoint_atop",
    DisjointAtopReverse = 0x1a => "disjoint_atop_reverse",
    DisjointXor = 0x1b => "disjoint_xor",
    ConjointClear = 0x20 => "conjoint_clear",
    ConjointSrc = 0x21 => "conjoint_src",
    ConjointDst = 0x22 => "conjoint_dst",
    ConjointOver = 0x23 => "conjoint_over",
    ConjointOverReverse = 0x24 => "conjoint_over_reverse",
    ConjointIn = 0x25 => "conjoint_in",
    ConjointInReverse = 0x26 => "conjoint_in_reverse",
    ConjointOut = 0x27 => "conjoint_out",
    ConjointOutReverse = 0x28 => "conjoint_out_reverse",
    ConjointAtop = 0x29 => "conjoint_atop",
    ConjointAtopReverse = 0x2a => "conjoint_atop_reverse",
    ConjointXor = 0x2b => "conjoint_xor",
}

impl Op {
    /// Protocol code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Operator with protocol code `code`, if any.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.code() == code)
    }

    /// Return `true` for the disjoint family.
    pub fn is_disjoint(self) -> bool {
        self.code() & 0xf0 == 0x10
    }

    /// Return `true` for the conjoint family.
    pub fn is_conjoint(self) -> bool {
        self.code() & 0xf0 == 0x20
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/combine/op.rs"]
mod tests;
