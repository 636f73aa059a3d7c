use std::error::Error;
use std::fmt;

/// An error type indicating the engine cannot evolve its population.
#[derive(Debug)]
pub enum EvolutionError {
    /// Roulette-wheel selection needs at least two individuals.
    PopulationTooSmall(usize),
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PopulationTooSmall(size) => {
                write!(f, "cannot evolve a population of {} individuals", size)
            }
        }
    }
}

impl Error for EvolutionError {}
