//! Algebraic-law property tests for [`Region`]'s set operations.
//!
//! Generator-function-plus-`proptest!`-block style, grounded on
//! `pubgrub`'s `range.rs` (`fn strategy() -> impl Strategy<Value = T>`
//! feeding `proptest! { #[test] fn law_name(x in strategy(), ...) { ... } }`).

use proptest::prelude::*;
use region_core::{Rectangle, Region};

/// A small, low-coordinate rectangle — keeps generated regions fragmented
/// enough to exercise banding/coalescing without proptest spending its
/// budget on astronomically large coordinates.
fn rect_strategy() -> impl Strategy<Value = Rectangle> {
    (0i32..200, 0i32..200, 1i32..40, 1i32..40)
        .prop_map(|(x, y, w, h)| Rectangle::new(x, y, w, h))
}

/// A region built by unioning a handful of random rectangles — the
/// natural way fragmented regions accumulate in practice.
fn region_strategy() -> impl Strategy<Value = Region> {
    proptest::collection::vec(rect_strategy(), 0..12).prop_map(|rects| {
        let mut region = Region::new();
        for r in rects {
            region.union_rect(r);
        }
        region
    })
}

proptest! {
    #[test]
    fn union_is_idempotent(a in region_strategy()) {
        let mut twice = a.clone();
        twice.union(&a);
        prop_assert_eq!(twice, a);
    }

    #[test]
    fn intersect_is_idempotent(a in region_strategy()) {
        let mut twice = a.clone();
        twice.intersect(&a);
        prop_assert_eq!(twice, a);
    }

    #[test]
    fn union_is_commutative(a in region_strategy(), b in region_strategy()) {
        let ab = Region::union_of(&a, &b);
        let ba = Region::union_of(&b, &a);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn intersect_is_commutative(a in region_strategy(), b in region_strategy()) {
        let ab = Region::intersect_of(&a, &b);
        let ba = Region::intersect_of(&b, &a);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn union_is_associative(a in region_strategy(), b in region_strategy(), c in region_strategy()) {
        let left = Region::union_of(&Region::union_of(&a, &b), &c);
        let right = Region::union_of(&a, &Region::union_of(&b, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn intersect_is_associative(a in region_strategy(), b in region_strategy(), c in region_strategy()) {
        let left = Region::intersect_of(&Region::intersect_of(&a, &b), &c);
        let right = Region::intersect_of(&a, &Region::intersect_of(&b, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn de_morgan_subtract_distributes_over_union(
        a in region_strategy(), b in region_strategy(), c in region_strategy()
    ) {
        // a - (b union c) == (a - b) intersect (a - c)
        let lhs = Region::subtract_of(&a, &Region::union_of(&b, &c));
        let rhs = Region::intersect_of(&Region::subtract_of(&a, &b), &Region::subtract_of(&a, &c));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn xor_decomposes_into_subtracts_and_union(a in region_strategy(), b in region_strategy()) {
        let xored = Region::xor_of(&a, &b);
        let mut expected = Region::subtract_of(&a, &b);
        expected.union(&Region::subtract_of(&b, &a));
        prop_assert_eq!(xored, expected);
    }

    #[test]
    fn every_operation_result_is_valid(a in region_strategy(), b in region_strategy()) {
        prop_assert!(Region::union_of(&a, &b).debug_validate().is_ok());
        prop_assert!(Region::intersect_of(&a, &b).debug_validate().is_ok());
        prop_assert!(Region::subtract_of(&a, &b).debug_validate().is_ok());
        prop_assert!(Region::xor_of(&a, &b).debug_validate().is_ok());
    }

    #[test]
    fn rects_cover_exactly_the_points_is_inside_reports(a in region_strategy()) {
        for r in a.rects() {
            prop_assert!(a.is_inside(r.center_x(), r.center_y()));
        }
    }

    #[test]
    fn subtract_then_union_back_is_superset(a in region_strategy(), b in region_strategy()) {
        let mut reconstructed = Region::subtract_of(&a, &b);
        reconstructed.union(&Region::intersect_of(&a, &b));
        prop_assert_eq!(reconstructed, a);
    }
}
