use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;

use crate::*;

/// What exposing a single tile uncovers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    Mine,
    Revealed(u8),
}

/// Outcome for a single tile, or `None` when `coord` is outside the area.
pub fn reveal(coord: Coord, area: &Area, minefield: &Minefield) -> Option<RevealOutcome> {
    if !area.contains(coord) {
        return None;
    }
    if minefield.contains(coord) {
        Some(RevealOutcome::Mine)
    } else {
        Some(RevealOutcome::Revealed(minefield.adjacent_mine_count(coord)))
    }
}

/// Breadth-first reveal starting at `origin`. Every touched tile is paired
/// with its outcome; only a tile with zero adjacent mines propagates the
/// expansion to its in-area neighbors.
pub fn flood_fill_from(
    origin: Coord,
    area: &Area,
    minefield: &Minefield,
) -> Vec<(Coord, RevealOutcome)> {
    let mut results = Vec::new();
    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(origin);

    while let Some(coord) = queue.pop_front() {
        if !visited.insert(tile_key(coord)) {
            continue;
        }
        let Some(outcome) = reveal(coord, area, minefield) else {
            continue;
        };
        results.push((coord, outcome));
        if outcome == RevealOutcome::Revealed(0) {
            queue.extend(neighbors(coord).filter(|&neighbor| area.contains(neighbor)));
        }
    }

    results
}
