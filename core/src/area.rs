use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::*;

/// The finite set of playable tiles: every coordinate within `radius` hops
/// of the origin. Immutable once generated.
#[derive(Clone, Debug)]
pub struct Area {
    tiles: HashMap<TileKey, Coord>,
    keys: Vec<TileKey>,
}

impl Area {
    /// Breadth-first expansion from the origin out to `radius` rings.
    pub fn generate(radius: u16) -> Self {
        let mut tiles = HashMap::new();
        let mut keys = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(((0, 0), 0u16));

        while let Some((coord, distance)) = queue.pop_front() {
            let key = tile_key(coord);
            if tiles.contains_key(&key) {
                // several neighbors may enqueue the same tile
                continue;
            }
            keys.push(key.clone());
            tiles.insert(key, coord);
            if distance < radius {
                for neighbor in neighbors(coord) {
                    queue.push_back((neighbor, distance + 1));
                }
            }
        }

        Self { tiles, keys }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.tiles.contains_key(tile_key(coord).as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tiles.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<Coord> {
        self.tiles.get(key).copied()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Generation-ordered key list; the indexable view used for uniform
    /// random sampling.
    pub fn keys(&self) -> &[TileKey] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TileKey, Coord)> {
        self.tiles.iter().map(|(key, &coord)| (key, coord))
    }
}
