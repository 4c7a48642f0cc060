//! Concrete end-to-end scenarios exercising the banded representation:
//! exact rectangle sequences, extents, and point-containment results for
//! hand-worked cases.

use region_core::{Box, Rectangle, Region};

fn region_of(b: Box) -> Region {
    Region::from_box(b)
}

fn rects_of(r: &Region) -> Vec<(i32, i32, i32, i32)> {
    r.rects().map(|s| (s.y, s.y + s.height, s.x, s.x + s.width)).collect()
}

#[test]
fn disjoint_union() {
    let r1 = region_of(Box::new(0, 0, 10, 10));
    let r2 = region_of(Box::new(20, 0, 30, 10));
    let u = Region::union_of(&r1, &r2);

    assert_eq!(rects_of(&u), vec![(0, 10, 0, 10), (0, 10, 20, 30)]);
    assert_eq!(u.extent(), Box::new(0, 0, 30, 10));
}

#[test]
fn touching_bands_coalesce() {
    let r1 = region_of(Box::new(0, 0, 10, 10));
    let r2 = region_of(Box::new(0, 10, 10, 20));
    let u = Region::union_of(&r1, &r2);

    assert_eq!(u.rect_count(), 1);
    assert_eq!(rects_of(&u), vec![(0, 20, 0, 10)]);
    assert_eq!(u.extent(), Box::new(0, 0, 10, 20));
}

#[test]
fn intersection_producing_l_complement() {
    let r1 = region_of(Box::new(0, 0, 20, 20));
    let r2 = region_of(Box::new(10, 10, 30, 30));
    let i = Region::intersect_of(&r1, &r2);

    assert_eq!(rects_of(&i), vec![(10, 20, 10, 20)]);
}

#[test]
fn subtract_carves_a_hole_into_three_bands() {
    let r1 = region_of(Box::new(0, 0, 30, 30));
    let r2 = region_of(Box::new(10, 10, 20, 20));
    let d = Region::subtract_of(&r1, &r2);

    assert_eq!(d.rect_count(), 4);
    assert_eq!(
        rects_of(&d),
        vec![(0, 10, 0, 30), (10, 20, 0, 10), (10, 20, 20, 30), (20, 30, 0, 30)]
    );
}

#[test]
fn xor_symmetry_matches_subtract_union_decomposition() {
    let r1 = region_of(Box::new(0, 0, 20, 20));
    let r2 = region_of(Box::new(10, 10, 30, 30));

    let xored = Region::xor_of(&r1, &r2);
    let mut expected = Region::subtract_of(&r1, &r2);
    expected.union(&Region::subtract_of(&r2, &r1));

    assert_eq!(xored, expected);
    // Two overlapping 20x20 squares offset by (10,10): the XOR is the two
    // L-shaped remainders, which band into 3 rows (top-only, middle
    // split-left/right, bottom-only) for 4 rectangles total.
    assert_eq!(xored.rect_count(), 4);
    assert_eq!(
        rects_of(&xored),
        vec![(0, 10, 0, 20), (10, 20, 0, 10), (10, 20, 20, 30), (20, 30, 10, 30)]
    );
}

#[test]
fn point_queries_on_the_banded_hole() {
    let r1 = region_of(Box::new(0, 0, 30, 30));
    let r2 = region_of(Box::new(10, 10, 20, 20));
    let d = Region::subtract_of(&r1, &r2);

    assert!(d.is_inside(5, 5));
    assert!(!d.is_inside(15, 15));
    assert!(d.is_inside(25, 25));
    assert!(!d.is_inside(30, 5));
}

#[test]
fn rectangle_box_round_trip_is_identity_for_nonnegative_extent() {
    let r = Rectangle::new(3, 4, 10, 20);
    let b: Box = r.into();
    let back: Rectangle = b.into();
    assert_eq!(r, back);
}

#[test]
fn offset_translates_membership() {
    let mut r = region_of(Box::new(0, 0, 30, 30));
    r.subtract_rect(Rectangle::new(10, 10, 10, 10));
    let translated = r.translated(5, -3);

    assert_eq!(translated.is_inside(5 + 5, 5 - 3), r.is_inside(5, 5));
    assert_eq!(translated.is_inside(15 + 5, 15 - 3), r.is_inside(15, 15));
}
