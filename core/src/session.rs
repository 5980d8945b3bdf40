use alloc::vec::Vec;
use hashbrown::HashMap;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Ready,
    Playing,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Ready
    }
}

/// What a single `step` call did to the session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    Ignored,
    Revealed,
    Won,
    Lost,
}

impl StepOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Presentation collaborator. Receives one state change per affected tile
/// plus session lifecycle notifications; every method defaults to a no-op.
pub trait RenderSink {
    fn tile_changed(&mut self, coord: Coord, state: TileState) {
        let _ = (coord, state);
    }

    /// The area exists; one unexplored tile should be materialized per key.
    fn on_init(&mut self, area: &Area) {
        let _ = area;
    }

    fn on_reset(&mut self) {}

    fn on_win(&mut self) {}

    fn on_lose(&mut self) {}
}

/// Headless sink.
impl RenderSink for () {}

/// A single game: configuration, play area, minefield, and the last-known
/// presentation state per tile.
pub struct GameSession<S: RenderSink> {
    config: GameConfig,
    area: Area,
    minefield: Minefield,
    board: HashMap<TileKey, TileState>,
    step_count: u32,
    state: SessionState,
    rng: SmallRng,
    sink: S,
}

impl<S: RenderSink> GameSession<S> {
    /// Build a session from `config`: generate the area, fill the minefield
    /// to the configured density, and notify the sink.
    pub fn new(config: GameConfig, sink: S) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let area = Area::generate(config.radius());
        let minefield =
            RandomMinefieldGenerator::new(config.density()).generate(&area, &mut rng)?;

        let mut session = Self {
            config,
            area,
            minefield,
            board: HashMap::new(),
            step_count: 0,
            state: SessionState::Ready,
            rng,
            sink,
        };
        session.materialize();
        Ok(session)
    }

    /// Session over an explicit area and minefield.
    pub fn with_minefield(config: GameConfig, area: Area, minefield: Minefield, sink: S) -> Self {
        let rng = SmallRng::seed_from_u64(config.seed);
        let mut session = Self {
            config,
            area,
            minefield,
            board: HashMap::new(),
            step_count: 0,
            state: SessionState::Ready,
            rng,
            sink,
        };
        session.materialize();
        session
    }

    fn materialize(&mut self) {
        self.board = self
            .area
            .keys()
            .iter()
            .cloned()
            .map(|key| (key, TileState::Unexplored))
            .collect();
        log::debug!(
            "session ready: {} tiles, {} mines",
            self.area.tile_count(),
            self.minefield.mine_count()
        );
        self.sink.on_init(&self.area);
    }

    /// Discard all progress and start over with a freshly sampled minefield.
    pub fn reset(&mut self) -> Result<()> {
        self.sink.on_reset();
        self.area = Area::generate(self.config.radius());
        self.minefield = RandomMinefieldGenerator::new(self.config.density())
            .generate(&self.area, &mut self.rng)?;
        self.step_count = 0;
        self.state = SessionState::Ready;
        self.materialize();
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn steps(&self) -> u32 {
        self.step_count
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    pub fn mine_count(&self) -> usize {
        self.minefield.mine_count()
    }

    pub fn has_mine_at(&self, coord: Coord) -> bool {
        self.minefield.contains(coord)
    }

    pub fn tile_at(&self, coord: Coord) -> Option<TileState> {
        self.board.get(tile_key(coord).as_str()).copied()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Manual placement trigger; exposed for diagnostics.
    pub fn add_mine(&mut self) -> Result<()> {
        self.minefield.place_mine(&self.area, &mut self.rng)
    }

    /// Step on a tile. Out-of-area coordinates and steps after the game has
    /// ended are no-ops and do not advance the step count.
    pub fn step(&mut self, coord: Coord) -> StepOutcome {
        if self.state.is_finished() || !self.area.contains(coord) {
            return StepOutcome::Ignored;
        }

        self.step_count += 1;

        if self.minefield.contains(coord) {
            if self.step_count == 1 {
                // the very first step is never a loss: move the mine away
                let key = tile_key(coord);
                if let Err(err) = self.minefield.relocate(&key, &self.area, &mut self.rng) {
                    log::error!("mine relocation failed: {err}");
                    return StepOutcome::Ignored;
                }
                log::debug!("first step landed on a mine, relocated");
            } else {
                return self.lose(coord);
            }
        }

        for (tile, outcome) in flood_fill_from(coord, &self.area, &self.minefield) {
            let state = match outcome {
                RevealOutcome::Mine => TileState::Mine,
                RevealOutcome::Revealed(count) => TileState::Revealed(count),
            };
            self.apply(tile, state);
        }

        self.mark_started();

        if self.check_win() {
            self.win()
        } else {
            StepOutcome::Revealed
        }
    }

    /// True when every non-mine tile has been revealed: the number of
    /// unexplored tiles equals the number of mines.
    pub fn check_win(&self) -> bool {
        let unexplored = self
            .board
            .values()
            .filter(|state| state.is_unexplored())
            .count();
        unexplored == self.minefield.mine_count()
    }

    fn win(&mut self) -> StepOutcome {
        let remaining: Vec<Coord> = self
            .board
            .iter()
            .filter(|(_, state)| state.is_unexplored())
            .filter_map(|(key, _)| self.area.get(key))
            .collect();
        for tile in remaining {
            self.apply(tile, TileState::Safe);
        }
        self.state = SessionState::Won;
        self.sink.on_win();
        StepOutcome::Won
    }

    fn lose(&mut self, hit: Coord) -> StepOutcome {
        let mut states: Vec<(Coord, TileState)> = Vec::with_capacity(self.area.tile_count());
        for (_, tile) in self.area.iter() {
            let state = match reveal(tile, &self.area, &self.minefield) {
                Some(RevealOutcome::Mine) => TileState::Mine,
                Some(RevealOutcome::Revealed(count)) => TileState::Revealed(count),
                None => continue,
            };
            states.push((tile, state));
        }
        for (tile, state) in states {
            self.apply(tile, state);
        }
        self.apply(hit, TileState::Hit);
        self.state = SessionState::Lost;
        self.sink.on_lose();
        StepOutcome::Lost
    }

    fn mark_started(&mut self) {
        if matches!(self.state, SessionState::Ready) {
            self.state = SessionState::Playing;
        }
    }

    fn apply(&mut self, coord: Coord, state: TileState) {
        self.board.insert(tile_key(coord), state);
        self.sink.tile_changed(coord, state);
    }
}
