/// Signed 16.16 fixed-point value used for trapezoid and triangle geometry.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Fixed(pub i32);

impl Fixed {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = 16;
    /// `0.0`.
    pub const ZERO: Self = Self(0);
    /// `1.0`.
    pub const ONE: Self = Self(1 << 16);

    /// Convert a whole number, saturating at the representable range.
    pub fn from_int(v: i32) -> Self {
        let raw = i64::from(v) << Self::FRAC_BITS;
        Self(raw.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Round a float to the nearest representable value. Out-of-range inputs saturate.
    pub fn from_f64(v: f64) -> Self {
        Self((v * 65536.0).round() as i32)
    }

    /// Value as a float.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / 65536.0
    }

    /// Raw 16.16 bits.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Largest whole number not above the value.
    pub fn floor(self) -> i32 {
        self.0 >> Self::FRAC_BITS
    }

    /// Smallest whole number not below the value.
    pub fn ceil(self) -> i32 {
        ((i64::from(self.0) + 0xffff) >> Self::FRAC_BITS) as i32
    }

    /// Fractional part in `[0, 0xffff]`.
    pub fn frac(self) -> i32 {
        self.0 & 0xffff
    }
}

impl From<i32> for Fixed {
    fn from(v: i32) -> Self {
        Self::from_int(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/fixed.rs"]
mod tests;
