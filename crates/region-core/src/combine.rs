//! The band walker: lockstep scan over two banded rectangle sequences that
//! produces a new banded sequence for any of {Union, Intersect, Subtract}.
//!
//! This is the hard part of the engine: the three per-band producers
//! (`non_overlap1`, `non_overlap2`, `overlap`) and the coalescer that
//! merges vertically adjacent identical bands, following the X11
//! `Region.c` lineage of this representation.

use crate::region::Span;

/// The boolean set operation a combine pass implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    /// `A union B`.
    Union,
    /// `A intersect B`.
    Intersect,
    /// `A - B`.
    Subtract,
}

/// Runs the band walker over `a` and `b`, both satisfying the §3 storage
/// invariants, and returns a new span sequence for `a op b` that itself
/// satisfies those invariants.
pub(crate) fn combine(a: &[Span], b: &[Span], op: Operation) -> Vec<Span> {
    let mut out = Vec::new();
    if a.is_empty() && b.is_empty() {
        return out;
    }

    let mut ra = 0usize;
    let mut rb = 0usize;
    let na = a.len();
    let nb = b.len();

    // "the top of the plane relevant to the scan"
    let mut y_bottom = match (a.first(), b.first()) {
        (Some(fa), Some(fb)) => fa.y1.min(fb.y1),
        (Some(fa), None) => fa.y1,
        (None, Some(fb)) => fb.y1,
        (None, None) => 0,
    };

    let mut previous_band: Option<usize> = None;

    while ra < na && rb < nb {
        let a_end = band_end(a, ra);
        let b_end = band_end(b, rb);
        let a_y1 = a[ra].y1;
        let b_y1 = b[rb].y1;

        let before_pre_pass = out.len();
        let y_top = if a_y1 < b_y1 {
            let top = y_bottom.max(a_y1);
            let bottom = a[ra].y2.min(b_y1);
            if bottom > top {
                non_overlap1(&mut out, &a[ra..a_end], top, bottom, op);
            }
            b_y1
        } else if b_y1 < a_y1 {
            let top = y_bottom.max(b_y1);
            let bottom = b[rb].y2.min(a_y1);
            if bottom > top {
                non_overlap2(&mut out, &b[rb..b_end], top, bottom, op);
            }
            a_y1
        } else {
            a_y1
        };
        if out.len() > before_pre_pass {
            previous_band = Some(coalesce_bands(&mut out, previous_band, before_pre_pass));
        }

        y_bottom = a[ra].y2.min(b[rb].y2);
        let before_overlap = out.len();
        if y_bottom > y_top {
            overlap(&mut out, &a[ra..a_end], &b[rb..b_end], y_top, y_bottom, op);
        }
        if out.len() > before_overlap {
            previous_band = Some(coalesce_bands(&mut out, previous_band, before_overlap));
        }

        if a[ra].y2 == y_bottom {
            ra = a_end;
        }
        if b[rb].y2 == y_bottom {
            rb = b_end;
        }
    }

    if ra < na {
        tail(&mut out, a, ra, na, op, true, &mut previous_band, y_bottom);
    } else if rb < nb {
        tail(&mut out, b, rb, nb, op, false, &mut previous_band, y_bottom);
    }

    out
}

/// Emits whichever side still has rectangles once the other side is
/// exhausted. The first tail band is clipped against `y_bottom` (the last
/// strip the main loop produced); later bands are emitted at their full
/// `[y1, y2)` since the invariants guarantee they don't overlap what came
/// before.
#[allow(clippy::too_many_arguments)]
fn tail(
    out: &mut Vec<Span>,
    rs: &[Span],
    mut start: usize,
    end: usize,
    op: Operation,
    is_a: bool,
    previous_band: &mut Option<usize>,
    mut y_bottom: i32,
) {
    while start < end {
        let band = band_end(rs, start);
        let y1 = rs[start].y1.max(y_bottom);
        let y2 = rs[start].y2;
        if y1 < y2 {
            let before = out.len();
            if is_a {
                non_overlap1(out, &rs[start..band], y1, y2, op);
            } else {
                non_overlap2(out, &rs[start..band], y1, y2, op);
            }
            if out.len() > before {
                *previous_band = Some(coalesce_bands(out, *previous_band, before));
            }
        }
        y_bottom = y2;
        start = band;
    }
}

/// Returns the index one past the last rectangle in the band starting at
/// `start` (all rectangles with the same `y1`).
fn band_end(rs: &[Span], start: usize) -> usize {
    let y1 = rs[start].y1;
    let mut i = start + 1;
    while i < rs.len() && rs[i].y1 == y1 {
        i += 1;
    }
    i
}

/// A strip where only `A` has coverage: `[top, bottom)` drawn from `band`
/// (one of A's bands, already clipped to this strip's y-range).
fn non_overlap1(out: &mut Vec<Span>, band: &[Span], top: i32, bottom: i32, op: Operation) {
    match op {
        Operation::Union | Operation::Subtract => {
            for r in band {
                out.push(Span {
                    y1: top,
                    y2: bottom,
                    x1: r.x1,
                    x2: r.x2,
                });
            }
        }
        Operation::Intersect => {}
    }
}

/// A strip where only `B` has coverage.
fn non_overlap2(out: &mut Vec<Span>, band: &[Span], top: i32, bottom: i32, op: Operation) {
    match op {
        Operation::Union => {
            for r in band {
                out.push(Span {
                    y1: top,
                    y2: bottom,
                    x1: r.x1,
                    x2: r.x2,
                });
            }
        }
        Operation::Intersect | Operation::Subtract => {}
    }
}

/// A strip where both `A` and `B` have coverage: the only producer that
/// sees both bands at once, and so the only one that encodes the
/// operation-specific intersection semantics.
fn overlap(out: &mut Vec<Span>, a: &[Span], b: &[Span], top: i32, bottom: i32, op: Operation) {
    match op {
        Operation::Union => overlap_union(out, a, b, top, bottom),
        Operation::Intersect => overlap_intersect(out, a, b, top, bottom),
        Operation::Subtract => overlap_subtract(out, a, b, top, bottom),
    }
}

/// Merges `a` and `b` (each sorted, non-touching within themselves) into one
/// sorted, non-touching sequence, extending an emission's `x2` rather than
/// starting a new rectangle whenever the next input's `x1 <= x2`.
fn overlap_union(out: &mut Vec<Span>, a: &[Span], b: &[Span], top: i32, bottom: i32) {
    let mut ia = 0;
    let mut ib = 0;
    let mut pending: Option<(i32, i32)> = None;
    let mut flush = |pending: &mut Option<(i32, i32)>, out: &mut Vec<Span>| {
        if let Some((x1, x2)) = pending.take() {
            out.push(Span {
                y1: top,
                y2: bottom,
                x1,
                x2,
            });
        }
    };

    loop {
        let next = match (ia < a.len(), ib < b.len()) {
            (true, true) => {
                if a[ia].x1 <= b[ib].x1 {
                    let r = a[ia];
                    ia += 1;
                    r
                } else {
                    let r = b[ib];
                    ib += 1;
                    r
                }
            }
            (true, false) => {
                let r = a[ia];
                ia += 1;
                r
            }
            (false, true) => {
                let r = b[ib];
                ib += 1;
                r
            }
            (false, false) => {
                flush(&mut pending, out);
                return;
            }
        };

        match pending {
            Some((x1, x2)) if next.x1 <= x2 => pending = Some((x1, x2.max(next.x2))),
            Some(_) => {
                flush(&mut pending, out);
                pending = Some((next.x1, next.x2));
            }
            None => pending = Some((next.x1, next.x2)),
        }
    }
}

/// Walks both sequences in x order, for each overlapping pair emitting
/// `(max(x1), min(x2))` when positive, advancing whichever side's rectangle
/// ends first (both if tied).
fn overlap_intersect(out: &mut Vec<Span>, a: &[Span], b: &[Span], top: i32, bottom: i32) {
    let mut ia = 0;
    let mut ib = 0;
    while ia < a.len() && ib < b.len() {
        let x1 = a[ia].x1.max(b[ib].x1);
        let x2 = a[ia].x2.min(b[ib].x2);
        if x1 < x2 {
            out.push(Span {
                y1: top,
                y2: bottom,
                x1,
                x2,
            });
        }
        match a[ia].x2.cmp(&b[ib].x2) {
            std::cmp::Ordering::Less => ia += 1,
            std::cmp::Ordering::Greater => ib += 1,
            std::cmp::Ordering::Equal => {
                ia += 1;
                ib += 1;
            }
        }
    }
}

/// `A - B` within one band: `b` carves pieces out of `a` while a moving left
/// boundary tracks how much of the current `A` rectangle remains unclaimed.
fn overlap_subtract(out: &mut Vec<Span>, a: &[Span], b: &[Span], top: i32, bottom: i32) {
    if a.is_empty() {
        return;
    }
    let mut ia = 0;
    let mut ib = 0;
    let mut x1 = a[ia].x1;

    while ia < a.len() {
        let a_x2 = a[ia].x2;

        if ib >= b.len() || b[ib].x1 >= a_x2 {
            if x1 < a_x2 {
                out.push(Span {
                    y1: top,
                    y2: bottom,
                    x1,
                    x2: a_x2,
                });
            }
            ia += 1;
            if ia < a.len() {
                x1 = a[ia].x1;
            }
            continue;
        }

        if b[ib].x2 <= x1 {
            ib += 1;
            continue;
        }

        if b[ib].x1 > x1 {
            out.push(Span {
                y1: top,
                y2: bottom,
                x1,
                x2: b[ib].x1,
            });
        }
        x1 = x1.max(b[ib].x2);

        if b[ib].x2 < a_x2 {
            ib += 1;
        } else {
            ia += 1;
            if ia < a.len() {
                x1 = a[ia].x1;
            }
        }
    }
}

/// Merges the band starting at `current_band_start` into the band starting
/// at `previous_band_start` (if any) iff both have the same rectangle count,
/// are vertically contiguous (`previous.y2 == current.y1`), and every
/// rectangle pair at equal index has matching `(x1, x2)`.
///
/// On a successful merge the previous band's `y2` is extended to the
/// current band's `y2`, the current band's rows are dropped from `out`, and
/// the returned index is `previous_band_start` so the next coalescing
/// attempt joins onto the now-grown predecessor. On failure the returned
/// index is `current_band_start`.
fn coalesce_bands(
    out: &mut Vec<Span>,
    previous_band_start: Option<usize>,
    current_band_start: usize,
) -> usize {
    let Some(prev_start) = previous_band_start else {
        return current_band_start;
    };
    let prev_count = current_band_start - prev_start;
    let cur_count = out.len() - current_band_start;
    if prev_count != cur_count {
        return current_band_start;
    }
    if out[prev_start].y2 != out[current_band_start].y1 {
        return current_band_start;
    }
    for i in 0..prev_count {
        let p = out[prev_start + i];
        let c = out[current_band_start + i];
        if p.x1 != c.x1 || p.x2 != c.x2 {
            return current_band_start;
        }
    }

    let new_y2 = out[current_band_start].y2;
    for i in 0..prev_count {
        out[prev_start + i].y2 = new_y2;
    }
    out.truncate(current_band_start);
    prev_start
}
