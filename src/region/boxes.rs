//! Banded rectangle sets.
//!
//! A [`Region`] keeps its boxes in y-x banded order: boxes are sorted by `y1` and then `x1`,
//! boxes in one band share `y1`/`y2`, intervals inside a band neither overlap nor touch, and
//! vertically adjacent bands with identical intervals are merged.

use crate::foundation::core::{IntBox, IntRect};
use crate::foundation::error::{PixcompError, PixcompResult};

/// Set of pixels described by disjoint boxes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    boxes: Vec<IntBox>,
}

#[derive(Clone, Copy)]
enum SetOp {
    Union,
    Intersect,
}

impl Region {
    /// Empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Region covering `rect`, or empty when `rect` has no area.
    pub fn from_rect(rect: IntRect) -> Self {
        Self::from_box(IntBox::from_rect(rect))
    }

    /// Region covering `b`, or empty when `b` has no area.
    pub fn from_box(b: IntBox) -> Self {
        if b.is_empty() {
            return Self::new();
        }
        Self { boxes: vec![b] }
    }

    /// Union of arbitrary, possibly overlapping, boxes.
    pub fn from_boxes(boxes: &[IntBox]) -> PixcompResult<Self> {
        boxes
            .iter()
            .try_fold(Self::new(), |acc, &b| acc.union(&Self::from_box(b)))
    }

    /// Boxes in banded order.
    pub fn boxes(&self) -> &[IntBox] {
        &self.boxes
    }

    /// Number of boxes.
    pub fn num_rects(&self) -> usize {
        self.boxes.len()
    }

    /// Return `true` when the region covers no pixel.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Smallest box containing the region; the zero box when empty.
    pub fn extents(&self) -> IntBox {
        let Some(first) = self.boxes.first() else {
            return IntBox::default();
        };
        self.boxes.iter().fold(*first, |acc, b| IntBox {
            x1: acc.x1.min(b.x1),
            y1: acc.y1.min(b.y1),
            x2: acc.x2.max(b.x2),
            y2: acc.y2.max(b.y2),
        })
    }

    /// Return `true` when pixel `(x, y)` is covered.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.boxes.iter().any(|b| b.contains(x, y))
    }

    /// Drop every box.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Shift every box by `(dx, dy)`, saturating at the `i32` range.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for b in &mut self.boxes {
            *b = b.translate(dx, dy);
        }
        self.boxes.retain(|b| !b.is_empty());
    }

    /// Copy shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let mut out = self.clone();
        out.translate(dx, dy);
        out
    }

    /// Union with a rectangle.
    pub fn union_rect(&self, rect: IntRect) -> PixcompResult<Self> {
        self.union(&Self::from_rect(rect))
    }

    /// Union of two regions.
    pub fn union(&self, other: &Self) -> PixcompResult<Self> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.is_empty() {
            return Ok(other.clone());
        }
        combine(self, other, SetOp::Union)
    }

    /// Intersection of two regions.
    pub fn intersect(&self, other: &Self) -> PixcompResult<Self> {
        if self.is_empty() || other.is_empty() {
            return Ok(Self::new());
        }
        if let ([a], [b]) = (self.boxes.as_slice(), other.boxes.as_slice()) {
            return Ok(Self::from_box(a.intersect(*b)));
        }
        combine(self, other, SetOp::Intersect)
    }

    /// Intersection with a single box.
    pub fn intersect_box(&self, b: IntBox) -> PixcompResult<Self> {
        self.intersect(&Self::from_box(b))
    }
}

fn combine(a: &Region, b: &Region, op: SetOp) -> PixcompResult<Region> {
    let ys = breakpoints(a, b)?;
    let mut out: Vec<IntBox> = Vec::new();
    let mut prev_band: Option<(usize, i32)> = None;

    for w in ys.windows(2) {
        let (y1, y2) = (w[0], w[1]);
        let ia = band_intervals(a, y1, y2)?;
        let ib = band_intervals(b, y1, y2)?;
        let merged = match op {
            SetOp::Union => union_intervals(&ia, &ib)?,
            SetOp::Intersect => intersect_intervals(&ia, &ib)?,
        };
        if merged.is_empty() {
            prev_band = None;
            continue;
        }

        if let Some((start, prev_y2)) = prev_band
            && prev_y2 == y1
            && out.len() - start == merged.len()
            && out[start..]
                .iter()
                .zip(&merged)
                .all(|(b, &(x1, x2))| b.x1 == x1 && b.x2 == x2)
        {
            for b in &mut out[start..] {
                b.y2 = y2;
            }
            prev_band = Some((start, y2));
            continue;
        }

        let start = out.len();
        out.try_reserve(merged.len())
            .map_err(|e| PixcompError::allocation(format!("region boxes: {e}")))?;
        out.extend(merged.iter().map(|&(x1, x2)| IntBox::new(x1, y1, x2, y2)));
        prev_band = Some((start, y2));
    }

    Ok(Region { boxes: out })
}

fn breakpoints(a: &Region, b: &Region) -> PixcompResult<Vec<i32>> {
    let mut ys = Vec::new();
    ys.try_reserve(2 * (a.boxes.len() + b.boxes.len()))
        .map_err(|e| PixcompError::allocation(format!("region bands: {e}")))?;
    for bx in a.boxes.iter().chain(&b.boxes) {
        ys.push(bx.y1);
        ys.push(bx.y2);
    }
    ys.sort_unstable();
    ys.dedup();
    Ok(ys)
}

/// Sorted, merged x-intervals of `r` that fully span `[y1, y2)`.
fn band_intervals(r: &Region, y1: i32, y2: i32) -> PixcompResult<Vec<(i32, i32)>> {
    let mut v = Vec::new();
    for b in r.boxes.iter().filter(|b| b.y1 <= y1 && b.y2 >= y2) {
        v.try_reserve(1)
            .map_err(|e| PixcompError::allocation(format!("region band: {e}")))?;
        v.push((b.x1, b.x2));
    }
    v.sort_unstable();
    union_intervals(&v, &[])
}

fn union_intervals(a: &[(i32, i32)], b: &[(i32, i32)]) -> PixcompResult<Vec<(i32, i32)>> {
    let mut all: Vec<(i32, i32)> = Vec::new();
    all.try_reserve(a.len() + b.len())
        .map_err(|e| PixcompError::allocation(format!("region intervals: {e}")))?;
    all.extend_from_slice(a);
    all.extend_from_slice(b);
    all.sort_unstable();

    let mut out: Vec<(i32, i32)> = Vec::new();
    out.try_reserve(all.len())
        .map_err(|e| PixcompError::allocation(format!("region intervals: {e}")))?;
    for (x1, x2) in all {
        match out.last_mut() {
            Some(last) if x1 <= last.1 => last.1 = last.1.max(x2),
            _ => out.push((x1, x2)),
        }
    }
    Ok(out)
}

fn intersect_intervals(a: &[(i32, i32)], b: &[(i32, i32)]) -> PixcompResult<Vec<(i32, i32)>> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let x1 = a[i].0.max(b[j].0);
        let x2 = a[i].1.min(b[j].1);
        if x1 < x2 {
            out.try_reserve(1)
                .map_err(|e| PixcompError::allocation(format!("region intervals: {e}")))?;
            out.push((x1, x2));
        }
        if a[i].1 < b[j].1 {
            i += 1;
        } else {
            j += 1;
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/region/boxes.rs"]
mod tests;
