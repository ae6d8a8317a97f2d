// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Plate partitioning: cut saturation and uniform subdivision

use super::{Cut, Plate, Plane};
use ahash::AHashSet;
use log::{debug, trace};
use std::collections::VecDeque;

/// Apply one cut until no plate crosses it.
///
/// Plates are tested from a pending queue; a plate the cut divides is
/// replaced by its two fragments, which go back on the queue. Plates the cut
/// leaves alone keep their relative order, fragments follow in the order they
/// were produced.
pub fn apply_cut(plates: Vec<Plate>, cut: &Cut) -> Vec<Plate> {
    let mut pending: VecDeque<Plate> = plates.into();
    let mut settled = Vec::with_capacity(pending.len());
    let mut splits = 0usize;

    while let Some(plate) = pending.pop_front() {
        match plate.split(cut) {
            Some([lower, upper]) => {
                splits += 1;
                pending.push_back(lower);
                pending.push_back(upper);
            }
            None => settled.push(plate),
        }
    }

    if splits > 0 {
        trace!(
            "cut {}@{} split {} plate(s), {} total",
            cut.plane,
            cut.offset,
            splits,
            settled.len()
        );
    }
    settled
}

/// Saturate every cut in registration order.
///
/// A cut that was already saturated cannot split anything again (later cuts
/// only shrink plates), so repeated cuts are skipped.
pub fn apply_cuts(mut plates: Vec<Plate>, cuts: &[Cut]) -> Vec<Plate> {
    let mut applied = AHashSet::with_capacity(cuts.len());
    for cut in cuts {
        if !applied.insert(*cut) {
            continue;
        }
        plates = apply_cut(plates, cut);
    }
    debug!(
        "partitioned into {} plates using {} distinct cuts",
        plates.len(),
        applied.len()
    );
    plates
}

/// Midpoint cuts that bring every span of every plate down to `max_span`.
///
/// Each span is bisected recursively; the cut for a plate's u span lies in
/// the plane that divides u, likewise for v. Returns nothing for
/// `max_span == 0`.
pub fn subdivision_cuts(plates: &[Plate], max_span: u64) -> Vec<Cut> {
    let mut cuts = Vec::new();
    if max_span == 0 {
        return cuts;
    }

    for plate in plates {
        let [u_plane, v_plane] = plate.plane.cutting_planes();
        let (u0, u1) = plate.span_u();
        let (v0, v1) = plate.span_v();
        bisect(u0, u1, u_plane, max_span, &mut cuts);
        bisect(v0, v1, v_plane, max_span, &mut cuts);
    }

    debug!(
        "subdivision to max span {} registered {} cuts",
        max_span,
        cuts.len()
    );
    cuts
}

fn bisect(lo: u64, hi: u64, plane: Plane, max_span: u64, cuts: &mut Vec<Cut>) {
    assert!(lo <= hi, "inverted span {lo}..{hi} on {plane}");

    if hi - lo > max_span {
        let mid = lo + (hi - lo) / 2;
        cuts.push(Cut::new(plane, mid));
        bisect(lo, mid, plane, max_span, cuts);
        bisect(mid, hi, plane, max_span, cuts);
    }
}
