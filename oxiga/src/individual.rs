use std::fmt;

use rand::rngs::StdRng;

/// The two individuals selected as parents for one
/// crossover, borrowed from the current population.
/// Valid only for the duration of that crossover call.
pub struct CrossoverParents<'a, T> {
    pub parent1: &'a T,
    pub parent2: &'a T,
}

/// An interface for candidate solutions that the engine can evolve.
///
/// The engine never inspects an individual's structure; it only
/// clones individuals, associates them with population slots, and
/// hands them to the operators below. The `Display` bound supplies
/// the diagnostic rendering used when reporting results.
///
/// Fitness follows the maximization convention: larger is better.
/// Implementations whose underlying objective is a minimization
/// should return the negated objective. Fitness must be a pure
/// function of the individual, since the engine re-evaluates it
/// when verifying its own bookkeeping.
pub trait Individual: Clone + fmt::Display {
    /// Representation-specific parameters, opaque to the engine.
    type Config;

    /// Returns a randomized individual.
    fn random(config: &Self::Config, rng: &mut StdRng) -> Self;

    /// Returns the individual's fitness. Larger is better.
    fn fitness(&self, config: &Self::Config) -> f64;

    /// Combines two parents into an offspring. The offspring must
    /// satisfy the same representation validity as its parents
    /// (e.g. remain a permutation).
    fn crossover(parents: CrossoverParents<'_, Self>, config: &Self::Config, rng: &mut StdRng)
        -> Self;

    /// Mutates the individual in place, preserving representation
    /// validity. `allele_mutation_probability` is the engine's
    /// configured per-allele rate, threaded through uninterpreted;
    /// representations without a meaningful notion of alleles are
    /// free to ignore it.
    fn mutate(
        &mut self,
        allele_mutation_probability: f64,
        config: &Self::Config,
        rng: &mut StdRng,
    );
}
