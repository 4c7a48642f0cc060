//! Benchmark utilities and test data generators for `region-core`.

use rand::Rng;
use rand_xorshift::XorShiftRng;
use region_core::{Box, Rectangle, Region};

/// Create a deterministic RNG for reproducible benchmarks.
pub fn create_rng() -> XorShiftRng {
    use rand::SeedableRng;
    XorShiftRng::seed_from_u64(0xDEAD_BEEF_CAFE_BABE)
}

/// Generate random non-degenerate rectangles within `bounds`, each no
/// larger than `max_size` on a side.
pub fn random_rects(
    rng: &mut impl Rng,
    count: usize,
    bounds: Box,
    max_size: i32,
) -> Vec<Rectangle> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(bounds.x1..bounds.x2 - max_size);
            let y = rng.gen_range(bounds.y1..bounds.y2 - max_size);
            let w = rng.gen_range(1..max_size);
            let h = rng.gen_range(1..max_size);
            Rectangle::new(x, y, w, h)
        })
        .collect()
}

/// Builds a region by unioning `count` random rectangles within `bounds`,
/// the typical way a fragmented region accumulates in practice (successive
/// clip/damage rectangles).
pub fn random_region(rng: &mut impl Rng, count: usize, bounds: Box, max_size: i32) -> Region {
    let mut region = Region::new();
    for rect in random_rects(rng, count, bounds, max_size) {
        region.union_rect(rect);
    }
    region
}

/// Rectangle/region counts for different benchmark scenarios.
pub mod sizes {
    /// Small data set for quick benchmarks.
    pub const SMALL: usize = 16;
    /// Medium data set.
    pub const MEDIUM: usize = 256;
    /// Large data set.
    pub const LARGE: usize = 4_096;
    /// Extra large data set for stress testing.
    pub const XLARGE: usize = 65_536;
}
