#![no_std]

extern crate alloc;

use hashbrown::HashSet;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

pub use area::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod area;
mod error;
mod generator;
mod reveal;
mod session;
mod tile;
mod types;

/// Play-area radius for each board size choice.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    Enormous,
}

impl SizeClass {
    pub const fn radius(self) -> u16 {
        match self {
            Self::Small => 4,
            Self::Medium => 6,
            Self::Large => 8,
            Self::Enormous => 12,
        }
    }
}

/// Target mine density for each difficulty choice.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DifficultyClass {
    Easy,
    Medium,
    Hard,
    Terrifying,
}

impl DifficultyClass {
    pub const fn density(self) -> f64 {
        match self {
            Self::Easy => 0.05,
            Self::Medium => 0.15,
            Self::Hard => 0.20,
            Self::Terrifying => 0.30,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: SizeClass,
    pub difficulty: DifficultyClass,
    pub seed: u64,
}

impl GameConfig {
    pub const fn new(size: SizeClass, difficulty: DifficultyClass, seed: u64) -> Self {
        Self {
            size,
            difficulty,
            seed,
        }
    }

    pub const fn radius(&self) -> u16 {
        self.size.radius()
    }

    pub const fn density(&self) -> f64 {
        self.difficulty.density()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(SizeClass::Small, DifficultyClass::Easy, 0)
    }
}

/// Rejection sampling must give up eventually instead of spinning when no
/// free tile can be found.
const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Mine locations within an area, keyed the same way the area is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Minefield {
    mines: HashSet<TileKey>,
}

impl Minefield {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit layout, mostly for tests and diagnostics. Coordinates must
    /// all lie inside `area`.
    pub fn from_coords(area: &Area, coords: &[Coord]) -> Result<Self> {
        let mut mines = HashSet::new();
        for &coord in coords {
            if !area.contains(coord) {
                return Err(GameError::OutsideArea);
            }
            mines.insert(tile_key(coord));
        }
        Ok(Self { mines })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.mines.contains(key)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.contains_key(tile_key(coord).as_str())
    }

    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mines.is_empty()
    }

    /// How many of `coord`'s six neighbors hold a mine.
    pub fn adjacent_mine_count(&self, coord: Coord) -> u8 {
        neighbors(coord).filter(|&neighbor| self.contains(neighbor)).count() as u8
    }

    /// Place one mine on a uniformly sampled free tile of `area`.
    pub fn place_mine<R: Rng>(&mut self, area: &Area, rng: &mut R) -> Result<()> {
        if self.mines.len() >= area.tile_count() {
            return Err(GameError::PlacementExhausted);
        }
        let keys = area.keys();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let key = &keys[rng.random_range(0..keys.len())];
            if !self.mines.contains(key.as_str()) {
                self.mines.insert(key.clone());
                return Ok(());
            }
        }
        Err(GameError::PlacementExhausted)
    }

    /// Move the mine at `key` somewhere else. The replacement is placed
    /// while `key` still occupies the set, so it can never land back on the
    /// same tile.
    pub fn relocate<R: Rng>(&mut self, key: &str, area: &Area, rng: &mut R) -> Result<()> {
        if !self.mines.contains(key) {
            return Ok(());
        }
        self.place_mine(area, rng)?;
        self.mines.remove(key);
        Ok(())
    }

    /// Add mines until the mine/tile ratio reaches `density`.
    pub fn fill_to_density<R: Rng>(&mut self, area: &Area, density: f64, rng: &mut R) -> Result<()> {
        if area.is_empty() {
            return Ok(());
        }
        let tile_count = area.tile_count() as f64;
        while (self.mines.len() as f64) / tile_count < density {
            self.place_mine(area, rng)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_overshoots_the_density_target_by_at_most_one_mine() {
        let area = Area::generate(2);
        let mut rng = SmallRng::seed_from_u64(11);
        let mut minefield = Minefield::new();

        minefield.fill_to_density(&area, 0.15, &mut rng).unwrap();

        let tiles = area.tile_count() as f64;
        let count = minefield.mine_count() as f64;
        assert!(count / tiles >= 0.15);
        assert!((count - 1.0) / tiles < 0.15);
    }

    #[test]
    fn relocation_vacates_the_old_key_and_keeps_the_count() {
        let area = Area::generate(1);
        let mut rng = SmallRng::seed_from_u64(5);
        let mut minefield = Minefield::from_coords(&area, &[(0, 0)]).unwrap();

        minefield.relocate("0,0", &area, &mut rng).unwrap();

        assert_eq!(minefield.mine_count(), 1);
        assert!(!minefield.contains((0, 0)));
    }

    #[test]
    fn placement_on_a_full_area_fails_instead_of_spinning() {
        let area = Area::generate(0);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut minefield = Minefield::new();

        minefield.place_mine(&area, &mut rng).unwrap();

        assert_eq!(
            minefield.place_mine(&area, &mut rng),
            Err(GameError::PlacementExhausted)
        );
    }

    #[test]
    fn explicit_layouts_reject_out_of_area_coordinates() {
        let area = Area::generate(1);

        assert_eq!(
            Minefield::from_coords(&area, &[(9, 9)]),
            Err(GameError::OutsideArea)
        );
    }

    #[test]
    fn adjacent_counts_come_from_the_six_neighbors() {
        let area = Area::generate(2);
        let minefield = Minefield::from_coords(&area, &[(1, 0), (0, 1), (2, 0)]).unwrap();

        assert_eq!(minefield.adjacent_mine_count((0, 0)), 2);
        assert_eq!(minefield.adjacent_mine_count((1, 0)), 2);
        assert_eq!(minefield.adjacent_mine_count((-1, 0)), 0);
    }
}
