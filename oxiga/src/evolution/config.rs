use serde::{Deserialize, Serialize};

/// Parameter settings for a run of the engine.
///
/// # Note
/// All quantities expressing probabilities should be in the
/// range [0.0, 1.0]. Using values that are not in this bound
/// may result in odd behaviours and/or incorrect programs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Number of individuals in the population. Must be at
    /// least 2; roulette-wheel selection degenerates below 3.
    pub population_size: usize,
    /// Generation ceiling used by the default stopping policy.
    pub max_generations: usize,
    /// Chance that a population slot is filled by crossover
    /// offspring rather than carried over unchanged.
    pub crossover_probability: f64,
    /// Chance that a newly produced individual is mutated.
    pub mutation_probability: f64,
    /// Posterior per-allele mutation rate, threaded through to
    /// [`Individual::mutate`] and not interpreted by the engine.
    ///
    /// [`Individual::mutate`]: crate::Individual::mutate
    pub allele_mutation_probability: f64,
    /// Whether the previous generation's best individual is
    /// reinserted into each new generation.
    pub elitism: bool,
}

impl Default for EvolutionConfig {
    fn default() -> EvolutionConfig {
        EvolutionConfig {
            population_size: 100,
            max_generations: 1000,
            crossover_probability: 0.8,
            mutation_probability: 0.1,
            allele_mutation_probability: 0.1,
            elitism: true,
        }
    }
}
