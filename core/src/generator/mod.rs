use rand::prelude::*;

use crate::*;
pub use random::*;

mod random;

/// Strategy for producing the initial minefield of a session.
pub trait MinefieldGenerator {
    fn generate<R: Rng>(self, area: &Area, rng: &mut R) -> Result<Minefield>;
}
