use super::*;

/// Purely random placement: mines are added one at a time until the
/// configured density is reached.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    density: f64,
}

impl RandomMinefieldGenerator {
    pub fn new(density: f64) -> Self {
        Self { density }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate<R: Rng>(self, area: &Area, rng: &mut R) -> Result<Minefield> {
        let density = self.density.clamp(0.0, 1.0);
        if density != self.density {
            log::warn!("density {} outside [0, 1], clamped to {}", self.density, density);
        }

        let mut minefield = Minefield::new();
        minefield.fill_to_density(area, density, rng)?;
        Ok(minefield)
    }
}
