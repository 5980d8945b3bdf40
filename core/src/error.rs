use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the play area")]
    OutsideArea,
    #[error("No free tile found for mine placement")]
    PlacementExhausted,
}

pub type Result<T> = core::result::Result<T, GameError>;
