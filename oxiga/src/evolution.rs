//! The generational evolution engine.
//!
//! [`Evolution`] owns the population, the fitness ledger built over
//! it each generation, and the random streams behind every
//! stochastic decision. A call to [`Evolution::run`] executes the
//! generational loop to completion under a stopping policy.
mod config;
mod errors;
mod ledger;
mod selector;
mod stopping;

use crate::individual::{CrossoverParents, Individual};
pub use config::EvolutionConfig;
pub use errors::EvolutionError;
use ledger::FitnessLedger;
use selector::Selector;
pub use stopping::{GenerationLimit, Progress, StoppingPolicy, TargetFitness};

use std::mem;

use log::{debug, error, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One independent random stream per stochastic decision point, so
/// that no decision correlates with another and a whole run is
/// reproducible from a single master seed.
struct EngineRng {
    roulette: StdRng,
    crossover: StdRng,
    mutation: StdRng,
    replacement: StdRng,
    strategy: StdRng,
}

impl EngineRng {
    fn seeded(seed: u64) -> EngineRng {
        EngineRng {
            roulette: StdRng::seed_from_u64(seed),
            crossover: StdRng::seed_from_u64(seed.wrapping_add(1)),
            mutation: StdRng::seed_from_u64(seed.wrapping_add(2)),
            replacement: StdRng::seed_from_u64(seed.wrapping_add(3)),
            strategy: StdRng::seed_from_u64(seed.wrapping_add(4)),
        }
    }

    fn from_entropy() -> EngineRng {
        EngineRng {
            roulette: StdRng::from_entropy(),
            crossover: StdRng::from_entropy(),
            mutation: StdRng::from_entropy(),
            replacement: StdRng::from_entropy(),
            strategy: StdRng::from_entropy(),
        }
    }
}

/// A genetic algorithm over individuals of type `G`.
///
/// The engine maximizes fitness via roulette-wheel parent
/// selection, stochastic crossover and mutation, generational
/// replacement and optional elitism. The representation-specific
/// operators come from the [`Individual`] implementation; the type
/// of `strategy_config` depends on that implementation and is
/// effectively opaque to the engine.
///
/// # Examples
/// ```
/// # use oxiga_encodings::queens::{QueensConfig, QueensPlacement};
/// use oxiga::{Evolution, EvolutionConfig};
///
/// let config = EvolutionConfig {
///     population_size: 50,
///     max_generations: 100,
///     ..EvolutionConfig::default()
/// };
///
/// // With `G` a suitable type implementing `Individual`...
/// let mut evolution = Evolution::<QueensPlacement>::new(config, QueensConfig::new(8));
/// evolution.run().unwrap();
///
/// assert_eq!(evolution.generation(), 100);
/// ```
pub struct Evolution<G: Individual> {
    config: EvolutionConfig,
    strategy_config: G::Config,
    population: Vec<G>,
    scratch: Vec<G>,
    ledger: FitnessLedger,
    generation: usize,
    best_individual: Option<G>,
    best_fitness: f64,
    gen_best: Option<(G, f64)>,
    rng: EngineRng,
}

impl<G: Individual> Evolution<G> {
    /// Creates an engine with entropy-seeded random streams.
    /// Invalid parameter settings are rejected as described in
    /// [`set_parameters`].
    ///
    /// [`set_parameters`]: Evolution::set_parameters
    pub fn new(config: EvolutionConfig, strategy_config: G::Config) -> Evolution<G> {
        Evolution::with_rng(config, strategy_config, EngineRng::from_entropy())
    }

    /// Creates an engine whose random streams all derive from
    /// `seed`, making the run reproducible.
    ///
    /// # Examples
    /// ```
    /// # use oxiga_encodings::queens::{QueensConfig, QueensPlacement};
    /// use oxiga::{Evolution, EvolutionConfig};
    ///
    /// let config = EvolutionConfig {
    ///     population_size: 20,
    ///     max_generations: 10,
    ///     ..EvolutionConfig::default()
    /// };
    ///
    /// let mut first = Evolution::<QueensPlacement>::with_seed(config.clone(), QueensConfig::new(8), 42);
    /// let mut second = Evolution::<QueensPlacement>::with_seed(config, QueensConfig::new(8), 42);
    /// first.run().unwrap();
    /// second.run().unwrap();
    ///
    /// assert_eq!(first.best_fitness(), second.best_fitness());
    /// ```
    pub fn with_seed(config: EvolutionConfig, strategy_config: G::Config, seed: u64) -> Evolution<G> {
        Evolution::with_rng(config, strategy_config, EngineRng::seeded(seed))
    }

    fn with_rng(config: EvolutionConfig, strategy_config: G::Config, rng: EngineRng) -> Evolution<G> {
        let mut evolution = Evolution {
            config: EvolutionConfig::default(),
            strategy_config,
            population: Vec::new(),
            scratch: Vec::new(),
            ledger: FitnessLedger::new(),
            generation: 0,
            best_individual: None,
            best_fitness: f64::NEG_INFINITY,
            gen_best: None,
            rng,
        };
        evolution.set_parameters(config);
        evolution
    }

    /// Replaces the parameter settings.
    ///
    /// A population size below 2 is rejected: an error is logged
    /// and the previous value kept, since the engine cannot select
    /// two parents from fewer individuals. A size of exactly 2 is
    /// accepted with a warning, as roulette-wheel selection does
    /// not work properly below 3 individuals. All other parameters
    /// are stored as given. A size change takes effect when the
    /// population is next initialized (see [`reset`]).
    ///
    /// [`reset`]: Evolution::reset
    pub fn set_parameters(&mut self, config: EvolutionConfig) {
        if config.population_size >= 2 {
            if config.population_size == 2 {
                warn!(
                    "population size 2: roulette-wheel selection does not work properly below 3 individuals"
                );
            }
            self.config.population_size = config.population_size;
        } else {
            error!(
                "population size {} is not allowed (minimum is 2), keeping {}",
                config.population_size, self.config.population_size
            );
        }
        self.config.max_generations = config.max_generations;
        self.config.crossover_probability = config.crossover_probability;
        self.config.mutation_probability = config.mutation_probability;
        self.config.allele_mutation_probability = config.allele_mutation_probability;
        self.config.elitism = config.elitism;
    }

    /// Runs the generational loop until the configured generation
    /// ceiling is reached.
    ///
    /// The first call initializes a random population; further
    /// calls evolve it further from its current state rather than
    /// starting over (use [`reset`] to start over). Consequently a
    /// second call under the same ceiling returns immediately.
    ///
    /// # Errors
    /// Fails fast, without evolving, if the population would hold
    /// fewer than two individuals.
    ///
    /// [`reset`]: Evolution::reset
    pub fn run(&mut self) -> Result<(), EvolutionError> {
        let mut policy = GenerationLimit(self.config.max_generations);
        self.run_with(&mut policy)
    }

    /// Runs the generational loop under a caller-supplied stopping
    /// policy, consulted once per generation boundary. See
    /// [`StoppingPolicy`] for ready-made policies and the closure
    /// shorthand.
    ///
    /// # Errors
    /// Fails fast, without evolving, if the population would hold
    /// fewer than two individuals.
    pub fn run_with<P>(&mut self, policy: &mut P) -> Result<(), EvolutionError>
    where
        P: StoppingPolicy + ?Sized,
    {
        if self.config.population_size < 2 {
            error!("cannot run on a population of fewer than two individuals");
            return Err(EvolutionError::PopulationTooSmall(self.config.population_size));
        }
        if self.population.is_empty() {
            self.initialize();
        }
        while !policy.should_stop(&self.progress()) {
            self.step();
            debug!(
                "generation {}: best fitness {}",
                self.generation, self.best_fitness
            );
        }
        Ok(())
    }

    /// Generates the initial random population and scores it.
    fn initialize(&mut self) {
        let size = self.config.population_size;
        info!("generating {} random individuals", size);
        self.population = (0..size)
            .map(|_| G::random(&self.strategy_config, &mut self.rng.strategy))
            .collect();
        for individual in &self.population {
            trace!("{}", individual);
        }
        self.scratch = Vec::with_capacity(size);
        self.ledger.rescore(&self.population, &self.strategy_config);
        self.ledger.rebuild_cumulative(self.generation);

        let best = self.population[self.ledger.best_slot()].clone();
        self.best_fitness = self.ledger.best_fitness();
        self.best_individual = Some(best.clone());
        self.gen_best = Some((best, self.ledger.best_fitness()));
    }

    /// Evolves one generation.
    fn step(&mut self) {
        let size = self.population.len();
        let (prev_best, prev_best_fitness) =
            self.gen_best.take().expect("stepped before initialization");

        // Fill every slot of the next generation: crossover
        // offspring with the configured probability, otherwise the
        // current occupant unchanged, then stochastic mutation.
        self.scratch.clear();
        for slot in 0..size {
            let mut next = if self.rng.crossover.gen::<f64>() <= self.config.crossover_probability {
                let (first, second) =
                    Selector::new(&self.ledger).select_crossover_parents(&mut self.rng.roulette);
                let parents = CrossoverParents {
                    parent1: &self.population[first],
                    parent2: &self.population[second],
                };
                G::crossover(parents, &self.strategy_config, &mut self.rng.strategy)
            } else {
                self.population[slot].clone()
            };
            if self.rng.mutation.gen::<f64>() <= self.config.mutation_probability {
                next.mutate(
                    self.config.allele_mutation_probability,
                    &self.strategy_config,
                    &mut self.rng.strategy,
                );
            }
            self.scratch.push(next);
        }
        mem::swap(&mut self.population, &mut self.scratch);

        self.ledger.rescore(&self.population, &self.strategy_config);

        // Elite replacement: a uniformly random slot is given to
        // the previous generation's best individual. Displacing the
        // generation's extremum invalidates it, and a new extremum
        // may be exposed anywhere, so those cases re-scan in full.
        if self.config.elitism {
            let slot = self.rng.replacement.gen_range(0..size);
            let displaced = self.ledger.replace(slot, prev_best_fitness);
            self.population[slot] = prev_best;
            if displaced == self.ledger.best_fitness() {
                self.ledger.rescan_best();
            }
            if displaced == self.ledger.min_fitness() {
                self.ledger.rescan_min();
            }
        }

        let gen_best_fitness = self.ledger.best_fitness();
        let gen_best = self.population[self.ledger.best_slot()].clone();
        if gen_best_fitness > self.best_fitness {
            self.best_fitness = gen_best_fitness;
            self.best_individual = Some(gen_best.clone());
        }
        self.gen_best = Some((gen_best, gen_best_fitness));

        self.generation += 1;
        self.ledger.rebuild_cumulative(self.generation);
    }

    fn progress(&self) -> Progress {
        Progress {
            generation: self.generation,
            best_fitness: self.best_fitness,
            average_fitness: self.ledger.average(),
        }
    }

    /// Discards the population and all bookkeeping. The next run
    /// initializes a fresh random population under the current
    /// parameter settings.
    pub fn reset(&mut self) {
        self.population.clear();
        self.scratch.clear();
        self.ledger = FitnessLedger::new();
        self.generation = 0;
        self.best_individual = None;
        self.best_fitness = f64::NEG_INFINITY;
        self.gen_best = None;
    }

    /// Returns the best individual known across the entire run, or
    /// `None` before the first run.
    pub fn best(&self) -> Option<&G> {
        self.best_individual.as_ref()
    }

    /// Returns the best fitness known across the entire run. Never
    /// decreases from one generation to the next.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Returns the number of generations evolved so far.
    ///
    /// # Examples
    /// ```
    /// # use oxiga_encodings::queens::{QueensConfig, QueensPlacement};
    /// use oxiga::{Evolution, EvolutionConfig};
    ///
    /// let evolution = Evolution::<QueensPlacement>::new(
    ///     EvolutionConfig::default(),
    ///     QueensConfig::new(8),
    /// );
    ///
    /// assert_eq!(evolution.generation(), 0);
    /// ```
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Reports the outcome of the run on the diagnostic channel,
    /// re-evaluating the best individual's fitness as a check on
    /// the engine's own bookkeeping. A disagreement between the
    /// stored and the recomputed value indicates a defect in the
    /// bookkeeping, not in the search, and is logged loudly.
    pub fn report_results(&self) {
        let best = match &self.best_individual {
            Some(best) => best,
            None => {
                error!("no results to report: the engine has not run");
                return;
            }
        };
        info!("total number of generations: {}", self.generation);
        let recomputed = best.fitness(&self.strategy_config);
        if recomputed != self.best_fitness {
            error!(
                "best fitness has not been updated correctly: stored {} but the best individual re-evaluates to {}",
                self.best_fitness, recomputed
            );
            error!("best individual: {}", best);
        } else {
            info!("best fitness found: {}", self.best_fitness);
            info!("best individual: {}", best);
        }
    }
}
