//! Debug-only invariant self-checks for [`crate::region::Region`].
//!
//! One `thiserror` variant per failure mode, each carrying the offending
//! values, covering the six storage invariants `region` documents.
//! `debug_validate` runs from the mutators that call `replace_with`; it is
//! compiled out of release builds unless the `debug-checks` feature forces
//! it on (see the crate's `Cargo.toml`).

use thiserror::Error;

use crate::region::Region;

/// A violation of one of [`Region`]'s storage invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegionInvariantError {
    /// Rectangle `index` has `y2 <= y1` or `x2 <= x1`.
    #[error("rectangle {index} is degenerate: ({x1}, {y1}) .. ({x2}, {y2})")]
    NonDegenerate {
        /// Index of the offending rectangle.
        index: usize,
        /// Left edge.
        x1: i32,
        /// Top edge.
        y1: i32,
        /// Right edge.
        x2: i32,
        /// Bottom edge.
        y2: i32,
    },

    /// `rects[index].y1` is less than `rects[index - 1].y1`: bands are out
    /// of order.
    #[error("band order violated at index {index}: y1 {y1} precedes previous y1 {previous_y1}")]
    BandOrder {
        /// Index of the offending rectangle.
        index: usize,
        /// Its `y1`.
        y1: i32,
        /// The previous rectangle's `y1`.
        previous_y1: i32,
    },

    /// Two rectangles that share a `y1` (same band) disagree on `y2`.
    #[error("band starting at y1 {y1} is not uniform: y2 {y2} vs {other_y2} at index {index}")]
    BandNotUniform {
        /// Index of the offending rectangle.
        index: usize,
        /// Shared `y1` of the band.
        y1: i32,
        /// This rectangle's `y2`.
        y2: i32,
        /// The band's established `y2`.
        other_y2: i32,
    },

    /// Two consecutive rectangles in the same band touch or overlap in x
    /// (`x1 <= previous x2`) instead of being strictly separated.
    #[error("rectangles {index} and {prev_index} touch or overlap in x: {x2} >= {next_x1}")]
    BandTouching {
        /// Index of the earlier rectangle.
        prev_index: usize,
        /// Index of the later rectangle.
        index: usize,
        /// The earlier rectangle's `x2`.
        x2: i32,
        /// The later rectangle's `x1`.
        next_x1: i32,
    },

    /// Two vertically adjacent bands have identical x-spans and should have
    /// been coalesced into one.
    #[error("bands at y {boundary} were not coalesced despite identical x-spans")]
    NotCoalesced {
        /// The shared boundary (`previous.y2 == current.y1`).
        boundary: i32,
    },

    /// The cached `extent` does not match the bounding box of `rects`.
    #[error(
        "extent mismatch: cached ({cached_x1}, {cached_y1})..({cached_x2}, {cached_y2}), \
         computed ({computed_x1}, {computed_y1})..({computed_x2}, {computed_y2})"
    )]
    ExtentMismatch {
        /// Cached extent, left.
        cached_x1: i32,
        /// Cached extent, top.
        cached_y1: i32,
        /// Cached extent, right.
        cached_x2: i32,
        /// Cached extent, bottom.
        cached_y2: i32,
        /// Recomputed extent, left.
        computed_x1: i32,
        /// Recomputed extent, top.
        computed_y1: i32,
        /// Recomputed extent, right.
        computed_x2: i32,
        /// Recomputed extent, bottom.
        computed_y2: i32,
    },
}

impl Region {
    /// Checks every storage invariant documented on [`Region`], returning
    /// the first violation found.
    ///
    /// Intended for `debug_assert!(region.debug_validate().is_ok())` at
    /// mutation sites, not for routine use — a valid `Region` can only be
    /// produced by this crate's own constructors and operations, so a
    /// failure here indicates a bug in the engine, not bad caller input.
    pub fn debug_validate(&self) -> Result<(), RegionInvariantError> {
        let rects = &self.rects;

        for (index, s) in rects.iter().enumerate() {
            if s.y2 <= s.y1 || s.x2 <= s.x1 {
                return Err(RegionInvariantError::NonDegenerate {
                    index,
                    x1: s.x1,
                    y1: s.y1,
                    x2: s.x2,
                    y2: s.y2,
                });
            }
        }

        let mut band_start = 0usize;
        for index in 1..rects.len() {
            let prev = rects[index - 1];
            let cur = rects[index];

            if cur.y1 < prev.y1 {
                return Err(RegionInvariantError::BandOrder {
                    index,
                    y1: cur.y1,
                    previous_y1: prev.y1,
                });
            }

            if cur.y1 == prev.y1 {
                if cur.y2 != prev.y2 {
                    return Err(RegionInvariantError::BandNotUniform {
                        index,
                        y1: cur.y1,
                        y2: cur.y2,
                        other_y2: prev.y2,
                    });
                }
                if cur.x1 <= prev.x2 {
                    return Err(RegionInvariantError::BandTouching {
                        prev_index: index - 1,
                        index,
                        x2: prev.x2,
                        next_x1: cur.x1,
                    });
                }
            } else {
                let prev_band_start = rects[band_start];
                if prev_band_start.y2 == cur.y1 {
                    let prev_band_width = (band_start..index)
                        .map(|i| (rects[i].x1, rects[i].x2))
                        .collect::<Vec<_>>();
                    let cur_band_end = {
                        let mut j = index;
                        while j < rects.len() && rects[j].y1 == cur.y1 {
                            j += 1;
                        }
                        j
                    };
                    let cur_band_width = (index..cur_band_end)
                        .map(|i| (rects[i].x1, rects[i].x2))
                        .collect::<Vec<_>>();
                    if prev_band_width == cur_band_width {
                        return Err(RegionInvariantError::NotCoalesced {
                            boundary: cur.y1,
                        });
                    }
                }
                band_start = index;
            }
        }

        if let Some(first) = rects.first() {
            let mut x1 = first.x1;
            let mut x2 = first.x2;
            let y1 = first.y1;
            let mut y2 = first.y2;
            for s in rects.iter().skip(1) {
                x1 = x1.min(s.x1);
                x2 = x2.max(s.x2);
                y2 = y2.max(s.y2);
            }
            if self.extent.x1 != x1 || self.extent.y1 != y1 || self.extent.x2 != x2 || self.extent.y2 != y2
            {
                return Err(RegionInvariantError::ExtentMismatch {
                    cached_x1: self.extent.x1,
                    cached_y1: self.extent.y1,
                    cached_x2: self.extent.x2,
                    cached_y2: self.extent.y2,
                    computed_x1: x1,
                    computed_y1: y1,
                    computed_x2: x2,
                    computed_y2: y2,
                });
            }
        } else if self.extent != crate::geometry::Box::empty() {
            return Err(RegionInvariantError::ExtentMismatch {
                cached_x1: self.extent.x1,
                cached_y1: self.extent.y1,
                cached_x2: self.extent.x2,
                cached_y2: self.extent.y2,
                computed_x1: 0,
                computed_y1: 0,
                computed_x2: 0,
                computed_y2: 0,
            });
        }

        Ok(())
    }
}
