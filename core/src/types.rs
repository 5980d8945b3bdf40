use alloc::format;
use alloc::string::String;

/// Single coordinate axis in skew hex space.
pub type Axis = i32;

/// Axial hex coordinates `(x, y)`.
pub type Coord = (Axis, Axis);

/// Canonical string form of a coordinate, used wherever tiles are mapping keys.
pub type TileKey = String;

/// The six skew-grid offsets: every `(i, j)` with `i, j` in `{-1, 0, 1}` and
/// `i != j`. The two excluded diagonals are not neighbors on a hex grid.
pub const DISPLACEMENTS: [(Axis, Axis); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

/// The six tiles adjacent to `coord`, in fixed table order.
pub fn neighbors((x, y): Coord) -> impl Iterator<Item = Coord> {
    DISPLACEMENTS.iter().map(move |&(dx, dy)| (x + dx, y + dy))
}

/// Canonical `"x,y"` key for `coord`. Distinct coordinates always produce
/// distinct keys.
pub fn tile_key((x, y): Coord) -> TileKey {
    format!("{},{}", x, y)
}

/// Hop distance between two skew coordinates.
pub fn hex_distance((ax, ay): Coord, (bx, by): Coord) -> u32 {
    let dx = ax - bx;
    let dy = ay - by;
    ((dx.abs() + dy.abs() + (dx + dy).abs()) / 2) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_are_six_distinct_tiles_at_distance_one() {
        let center = (3, -2);
        let all: Vec<Coord> = neighbors(center).collect();
        let unique: BTreeSet<Coord> = all.iter().copied().collect();

        assert_eq!(all.len(), 6);
        assert_eq!(unique.len(), 6);
        for neighbor in all {
            assert_eq!(hex_distance(center, neighbor), 1);
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let center = (0, 0);
        for neighbor in neighbors(center) {
            assert!(neighbors(neighbor).any(|back| back == center));
        }
    }

    #[test]
    fn keys_are_injective_over_a_coordinate_range() {
        let mut seen = BTreeSet::new();
        for x in -6..=6 {
            for y in -6..=6 {
                assert!(seen.insert(tile_key((x, y))), "duplicate key for ({x},{y})");
            }
        }
        assert_eq!(seen.len(), 13 * 13);
    }

    #[test]
    fn key_is_the_canonical_pair_encoding() {
        assert_eq!(tile_key((0, 0)), "0,0");
        assert_eq!(tile_key((-4, 12)), "-4,12");
    }
}
