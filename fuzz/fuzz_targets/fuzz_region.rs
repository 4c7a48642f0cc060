#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use region_core::{Rectangle, Region};

#[derive(Debug, Arbitrary)]
enum RegionOp {
    Union,
    Intersect,
    Subtract,
    Xor,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    rects1: Vec<(i16, i16, i16, i16)>,
    rects2: Vec<(i16, i16, i16, i16)>,
    operation: RegionOp,
    translate: (i16, i16),
}

fn build(rects: &[(i16, i16, i16, i16)]) -> Region {
    let mut region = Region::new();
    for (x, y, w, h) in rects.iter() {
        region.union_rect(Rectangle::new(*x as i32, *y as i32, *w as i32, *h as i32));
    }
    region
}

fuzz_target!(|input: FuzzInput| {
    if input.rects1.len() > 100 || input.rects2.len() > 100 {
        return;
    }

    let region1 = build(&input.rects1);
    let region2 = build(&input.rects2);

    let mut result = region1.clone();
    match input.operation {
        RegionOp::Union => result.union(&region2),
        RegionOp::Intersect => result.intersect(&region2),
        RegionOp::Subtract => result.subtract(&region2),
        RegionOp::Xor => result.xor(&region2),
    }

    assert!(result.debug_validate().is_ok());

    let _is_empty = result.is_empty();
    let _is_rect = result.is_rect();
    let _extent = result.extent();

    let translated = result.translated(input.translate.0 as i32, input.translate.1 as i32);
    assert!(translated.debug_validate().is_ok());

    for r in result.rects() {
        let cx = r.center_x();
        let cy = r.center_y();
        assert!(result.is_inside(cx, cy));
    }

    // A region never intersects its own complement within its extent's bounds.
    if !result.is_empty() {
        assert!(result.intersects_rect(result.extent().into()));
    }
});
