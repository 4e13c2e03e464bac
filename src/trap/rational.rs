//! Exact positions along an edge.
//!
//! A [`RationalPoint`] stores `whole + rem / den` with `0 <= rem < den`, so stepping it by a
//! constant rational increment never accumulates rounding error.

/// Exact rational coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RationalPoint {
    pub(crate) whole: i64,
    pub(crate) rem: i64,
    pub(crate) den: i64,
}

/// Constant increment for [`RationalPoint::step`], split like the point itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RationalStep {
    whole: i64,
    rem: i64,
}

impl RationalPoint {
    /// `num / den` for `den > 0`.
    pub(crate) fn new(num: i128, den: i64) -> Self {
        let d = i128::from(den);
        Self {
            whole: num.div_euclid(d) as i64,
            rem: num.rem_euclid(d) as i64,
            den,
        }
    }

    /// Increment of `num / self.den`.
    pub(crate) fn increment(&self, num: i64) -> RationalStep {
        RationalStep {
            whole: num.div_euclid(self.den),
            rem: num.rem_euclid(self.den),
        }
    }

    pub(crate) fn step(&mut self, by: RationalStep) {
        self.whole += by.whole;
        self.rem += by.rem;
        if self.rem >= self.den {
            self.rem -= self.den;
            self.whole += 1;
        }
    }

    /// Return `true` when the point lies strictly below `v`.
    pub(crate) fn lt(&self, v: i64) -> bool {
        self.whole < v
    }

    /// Return `true` when the point lies strictly above `v`.
    pub(crate) fn gt(&self, v: i64) -> bool {
        self.whole > v || (self.whole == v && self.rem > 0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trap/rational.rs"]
mod tests;
