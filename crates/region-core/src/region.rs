//! The banded region: storage, query predicates, and public set operations.
//!
//! Corresponds to Skia's `SkRegion` / the X11 server's `Region.c`. A
//! `Region` is a y-x banded list of half-open rectangles: sorted by `y1`
//! across bands, by `x1` within a band, non-touching within a band, and
//! maximally coalesced across bands — see the invariants documented on
//! [`Region`] itself.

use smallvec::SmallVec;

use crate::combine::{self, Operation};
use crate::geometry::{Box, Rectangle};

/// One member rectangle of a [`Region`], stored as `(y1, y2, x1, x2)`.
///
/// Field order follows the historical `Region.c` quadruple layout, though
/// storage itself is an array of records rather than a flat stride-4 array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Span {
    pub y1: i32,
    pub y2: i32,
    pub x1: i32,
    pub x2: i32,
}

impl Span {
    #[inline]
    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(self.x1, self.y1, self.x2 - self.x1, self.y2 - self.y1)
    }

    #[inline]
    fn from_box(b: Box) -> Self {
        Self {
            y1: b.y1,
            y2: b.y2,
            x1: b.x1,
            x2: b.x2,
        }
    }
}

/// A complex orthogonal region: the union of a y-x banded set of
/// rectangles, as used for clipping in the X11 server and in Skia's
/// `SkRegion`.
///
/// # Invariants
///
/// After every public mutation, letting the stored spans be `R[0..n)`:
///
/// 1. Non-degeneracy: every `R[i]` has `y2 > y1` and `x2 > x1`.
/// 2. Band ordering: `R[i].y1` is non-decreasing; spans sharing a `y1` share
///    the whole band (`y2` equal, `x1` sorted ascending, non-touching).
/// 3. Band uniformity: every rectangle within a band has the same `(y1,
///    y2)`.
/// 4. Non-touching within a band: `R[i].x2 < R[i+1].x1` (strictly) for
///    consecutive rectangles in the same band.
/// 5. Maximal band merge: no two vertically adjacent bands have identical
///    x-spans (they would have been coalesced into one taller band).
/// 6. Extent tightness: `extent` is exactly the bounding box of `R`, or
///    `(0, 0, 0, 0)` when empty.
///
/// These invariants are established by [`combine`](crate::combine) and
/// checked in debug builds by [`crate::debug_checks`].
#[derive(Debug, Clone, Default)]
pub struct Region {
    pub(crate) rects: SmallVec<[Span; 4]>,
    pub(crate) extent: Box,
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.extent == other.extent && self.rects == other.rects
    }
}
impl Eq for Region {}

impl Region {
    /// Creates an empty region.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a region containing exactly `rect` (empty if `rect` is
    /// empty).
    pub fn from_rectangle(rect: Rectangle) -> Self {
        Self::from_box(rect.into())
    }

    /// Creates a region containing exactly `b` (empty if `b` is empty).
    pub fn from_box(b: Box) -> Self {
        if b.is_empty() {
            return Self::default();
        }
        let mut rects = SmallVec::new();
        rects.push(Span::from_box(b));
        Self { rects, extent: b }
    }

    /// Returns true iff this region has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns true iff this region is a single rectangle.
    #[inline]
    pub fn is_rect(&self) -> bool {
        self.rects.len() == 1
    }

    /// Returns true iff this region is made of more than one rectangle.
    #[inline]
    pub fn is_complex(&self) -> bool {
        self.rects.len() > 1
    }

    /// Returns the bounding box of the region (`(0,0,0,0)` when empty).
    #[inline]
    pub fn extent(&self) -> Box {
        self.extent
    }

    /// Returns the number of rectangles making up this region.
    #[inline]
    pub fn rect_count(&self) -> usize {
        self.rects.len()
    }

    /// Iterates the member rectangles in band order (ascending `y1`, then
    /// ascending `y2`), left to right within a band.
    pub fn rects(&self) -> impl Iterator<Item = Rectangle> + '_ {
        self.rects.iter().map(|s| s.to_rectangle())
    }

    /// Replaces this region's contents with `other`'s (deep copy).
    pub fn set(&mut self, other: &Region) {
        self.rects = other.rects.clone();
        self.extent = other.extent;
    }

    /// Replaces this region's contents with exactly `rect`.
    pub fn set_rect(&mut self, rect: Rectangle) {
        *self = Self::from_rectangle(rect);
    }

    /// Clears the region to empty.
    pub fn clear(&mut self) {
        self.rects.clear();
        self.extent = Box::empty();
    }

    /// Translates every member rectangle (and the extent) by `(dx, dy)`.
    /// Order- and equality-preserving, so the invariants hold automatically.
    pub fn offset(&mut self, dx: i32, dy: i32) {
        for s in &mut self.rects {
            s.x1 += dx;
            s.x2 += dx;
            s.y1 += dy;
            s.y2 += dy;
        }
        self.extent = self.extent.offset(dx, dy);
    }

    /// Returns a translated copy, leaving `self` untouched.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let mut out = self.clone();
        out.offset(dx, dy);
        out
    }

    /// Replaces storage with a single rectangle equal to the current
    /// extent. Lossy — `self` becomes a (possibly strict) superset of its
    /// previous area — but always valid, and the escape hatch for
    /// pathological fragmentation.
    pub fn collapse(&mut self) {
        if self.is_empty() || self.rects.len() == 1 {
            return;
        }
        let extent = self.extent;
        self.rects.clear();
        self.rects.push(Span::from_box(extent));
    }

    // -- Query predicates ----------------------------------------------

    /// Returns true iff `(x, y)` lies in the region.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        if self.is_empty() || !self.extent.contains(x, y) {
            return false;
        }
        for s in &self.rects {
            if s.y2 <= y {
                continue;
            }
            if s.y1 > y {
                // Band ordering: no later band can contain this point.
                return false;
            }
            if s.x1 <= x && x < s.x2 {
                return true;
            }
        }
        false
    }

    /// Returns true iff `rect` is entirely covered by this region.
    ///
    /// Walks the bands spanning `rect`'s y-range and requires each one to
    /// contain `rect`'s x-span with no gaps between consecutive bands.
    pub fn is_inside_rect(&self, rect: Rectangle) -> bool {
        if rect.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        let target: Box = rect.into();
        if !target.contained_in(&self.extent) {
            return false;
        }

        let mut y = target.y1;
        let mut i = 0;
        while i < self.rects.len() {
            let band_y1 = self.rects[i].y1;
            let band_y2 = self.rects[i].y2;
            if band_y2 <= y {
                i += 1;
                continue;
            }
            if band_y1 > y {
                return false;
            }
            let mut found = false;
            let mut j = i;
            while j < self.rects.len() && self.rects[j].y1 == band_y1 {
                let s = self.rects[j];
                if s.x1 <= target.x1 && target.x2 <= s.x2 {
                    found = true;
                    break;
                }
                j += 1;
            }
            if !found {
                return false;
            }
            if band_y2 >= target.y2 {
                return true;
            }
            y = band_y2;
            while i < self.rects.len() && self.rects[i].y1 == band_y1 {
                i += 1;
            }
            if i >= self.rects.len() || self.rects[i].y1 != band_y2 {
                return false;
            }
        }
        false
    }

    /// Returns true iff subtracting `rect` from this region yields empty —
    /// i.e. `rect` fully covers (is a superset of) this region's area.
    pub fn is_inside_of(&self, rect: Rectangle) -> bool {
        let mut tmp = self.clone();
        tmp.subtract_rect(rect);
        tmp.is_empty()
    }

    /// Returns true iff `self intersect other` is non-empty.
    pub fn intersects_region(&self, other: &Region) -> bool {
        if self.is_empty() || other.is_empty() || !self.extent.overlaps(&other.extent) {
            return false;
        }
        let mut tmp = self.clone();
        tmp.intersect(other);
        !tmp.is_empty()
    }

    /// Returns true iff `self intersect rect` is non-empty.
    pub fn intersects_rect(&self, rect: Rectangle) -> bool {
        self.intersects_region(&Region::from_rectangle(rect))
    }

    // -- Public set operations -------------------------------------------

    /// In-place union with `other`.
    pub fn union(&mut self, other: &Region) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.set(other);
            return;
        }
        if self.rects.len() == 1 && other.rects.len() == 1 {
            if other.extent.contained_in(&self.extent) {
                return;
            }
            if self.extent.contained_in(&other.extent) {
                self.set(other);
                return;
            }
        }
        self.replace_with(combine::combine(&self.rects, &other.rects, Operation::Union));
    }

    /// In-place union with `rect`.
    pub fn union_rect(&mut self, rect: Rectangle) {
        self.union(&Region::from_rectangle(rect));
    }

    /// In-place intersection with `other`.
    pub fn intersect(&mut self, other: &Region) {
        if self.is_empty() || other.is_empty() || !self.extent.overlaps(&other.extent) {
            self.clear();
            return;
        }
        self.replace_with(combine::combine(
            &self.rects,
            &other.rects,
            Operation::Intersect,
        ));
    }

    /// In-place intersection with `rect`.
    pub fn intersect_rect(&mut self, rect: Rectangle) {
        self.intersect(&Region::from_rectangle(rect));
    }

    /// In-place subtraction of `other`.
    pub fn subtract(&mut self, other: &Region) {
        if self.is_empty() || other.is_empty() || !self.extent.overlaps(&other.extent) {
            return;
        }
        self.replace_with(combine::combine(
            &self.rects,
            &other.rects,
            Operation::Subtract,
        ));
    }

    /// In-place subtraction of `rect`.
    pub fn subtract_rect(&mut self, rect: Rectangle) {
        self.subtract(&Region::from_rectangle(rect));
    }

    /// In-place symmetric difference with `other`:
    /// `(other - self) union (self - other)`.
    pub fn xor(&mut self, other: &Region) {
        let mut tmp = other.clone();
        tmp.subtract(self);
        self.subtract(other);
        self.union(&tmp);
    }

    /// In-place symmetric difference with `rect`.
    pub fn xor_rect(&mut self, rect: Rectangle) {
        self.xor(&Region::from_rectangle(rect));
    }

    /// Pure union: returns a new region, leaving both operands untouched.
    #[must_use]
    pub fn union_of(a: &Region, b: &Region) -> Region {
        let mut out = a.clone();
        out.union(b);
        out
    }

    /// Pure intersection.
    #[must_use]
    pub fn intersect_of(a: &Region, b: &Region) -> Region {
        let mut out = a.clone();
        out.intersect(b);
        out
    }

    /// Pure subtraction: `a - b`.
    #[must_use]
    pub fn subtract_of(a: &Region, b: &Region) -> Region {
        let mut out = a.clone();
        out.subtract(b);
        out
    }

    /// Pure symmetric difference.
    #[must_use]
    pub fn xor_of(a: &Region, b: &Region) -> Region {
        let mut out = a.clone();
        out.xor(b);
        out
    }

    fn replace_with(&mut self, scratch: Vec<Span>) {
        self.rects = SmallVec::from_vec(scratch);
        self.update_extent();
        if cfg!(debug_assertions) || cfg!(feature = "debug-checks") {
            if let Err(e) = self.debug_validate() {
                panic!("combine() produced an invalid region: {e}");
            }
        }
    }

    fn update_extent(&mut self) {
        self.extent = match self.rects.first() {
            None => Box::empty(),
            Some(first) => {
                let mut x1 = first.x1;
                let mut x2 = first.x2;
                let y1 = first.y1;
                let mut y2 = first.y2;
                for s in self.rects.iter().skip(1) {
                    x1 = x1.min(s.x1);
                    x2 = x2.max(s.x2);
                    y2 = y2.max(s.y2);
                }
                Box::new(x1, y1, x2, y2)
            }
        };
    }
}
