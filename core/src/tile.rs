use serde::{Deserialize, Serialize};

/// Per-tile presentation state reported to the rendering collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TileState {
    Unexplored,
    Revealed(u8),
    Mine,
    Hit,
    Safe,
}

impl TileState {
    pub const fn is_unexplored(self) -> bool {
        matches!(self, Self::Unexplored)
    }
}

impl Default for TileState {
    fn default() -> Self {
        Self::Unexplored
    }
}
