//! A real-valued encoding for two-variable function minimization.
use std::fmt;

use oxiga::{CrossoverParents, Individual};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The function being minimized.
pub type Objective = fn(f64, f64) -> f64;

/// Configuration for the two-variable function encoding: the
/// objective and the search bounds of each variable. Mutation
/// steps are drawn from ±10% of each variable's range.
#[derive(Clone, Copy, Debug)]
pub struct FunctionConfig {
    objective: Objective,
    min_values: (f64, f64),
    max_values: (f64, f64),
    increments: (f64, f64),
}

impl FunctionConfig {
    /// Returns a configuration where both variables share the same
    /// bounds.
    pub fn new(objective: Objective, min_value: f64, max_value: f64) -> FunctionConfig {
        FunctionConfig::with_bounds(objective, (min_value, min_value), (max_value, max_value))
    }

    /// Returns a configuration with explicit per-variable bounds,
    /// given as `(x, y)` pairs.
    pub fn with_bounds(
        objective: Objective,
        min_values: (f64, f64),
        max_values: (f64, f64),
    ) -> FunctionConfig {
        let increments = (
            0.1 * (max_values.0 - min_values.0).abs(),
            0.1 * (max_values.1 - min_values.1).abs(),
        );
        FunctionConfig {
            objective,
            min_values,
            max_values,
            increments,
        }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }
}

/// A candidate point `(x, y)` for minimizing a two-variable
/// function. The engine maximizes, so fitness is the negated
/// objective value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionPoint {
    pub x: f64,
    pub y: f64,
}

impl Individual for FunctionPoint {
    type Config = FunctionConfig;

    /// A uniformly random point within the bounds.
    fn random(config: &FunctionConfig, rng: &mut StdRng) -> FunctionPoint {
        FunctionPoint {
            x: rng.gen_range(config.min_values.0..=config.max_values.0),
            y: rng.gen_range(config.min_values.1..=config.max_values.1),
        }
    }

    fn fitness(&self, config: &FunctionConfig) -> f64 {
        -(config.objective)(self.x, self.y)
    }

    /// A randomly weighted average of the parents: a random point
    /// on the line segment joining them.
    fn crossover(
        parents: CrossoverParents<'_, Self>,
        _config: &FunctionConfig,
        rng: &mut StdRng,
    ) -> FunctionPoint {
        let weight = rng.gen::<f64>();
        FunctionPoint {
            x: weight * parents.parent1.x + (1.0 - weight) * parents.parent2.x,
            y: weight * parents.parent1.y + (1.0 - weight) * parents.parent2.y,
        }
    }

    /// Nudges one variable, chosen with equal probability, by a
    /// uniform step within ±10% of its range, clamped back into
    /// bounds. The per-allele rate is not meaningful for a
    /// two-variable point and is ignored.
    fn mutate(
        &mut self,
        _allele_mutation_probability: f64,
        config: &FunctionConfig,
        rng: &mut StdRng,
    ) {
        if rng.gen::<f64>() <= 0.5 {
            self.x += rng.gen_range(-config.increments.0..=config.increments.0);
            self.x = self.x.clamp(config.min_values.0, config.max_values.0);
        } else {
            self.y += rng.gen_range(-config.increments.1..=config.increments.1);
            self.y = self.y.clamp(config.min_values.1, config.max_values.1);
        }
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {}, y = {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use oxiga::{Evolution, EvolutionConfig};
    use rand::SeedableRng;

    fn sphere(x: f64, y: f64) -> f64 {
        (x - 1.0).powi(2) + (y - 2.0).powi(2)
    }

    #[test]
    fn fitness_is_the_negated_objective() {
        let config = FunctionConfig::new(sphere, -10.0, 10.0);
        let point = FunctionPoint { x: 0.0, y: 0.0 };
        assert_eq!(point.fitness(&config), -5.0);
        let optimum = FunctionPoint { x: 1.0, y: 2.0 };
        assert_eq!(optimum.fitness(&config), 0.0);
    }

    #[test]
    fn random_points_respect_the_bounds() {
        let config = FunctionConfig::with_bounds(sphere, (-1.5, -3.0), (4.0, 4.0));
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..100 {
            let point = FunctionPoint::random(&config, &mut rng);
            assert!((-1.5..=4.0).contains(&point.x));
            assert!((-3.0..=4.0).contains(&point.y));
        }
    }

    #[test]
    fn crossover_stays_on_the_segment_between_parents() {
        let config = FunctionConfig::new(sphere, -10.0, 10.0);
        let mut rng = StdRng::seed_from_u64(37);
        let parent1 = FunctionPoint { x: -4.0, y: 6.0 };
        let parent2 = FunctionPoint { x: 2.0, y: -1.0 };
        for _ in 0..100 {
            let child = FunctionPoint::crossover(
                CrossoverParents {
                    parent1: &parent1,
                    parent2: &parent2,
                },
                &config,
                &mut rng,
            );
            assert!((-4.0..=2.0).contains(&child.x));
            assert!((-1.0..=6.0).contains(&child.y));
        }
    }

    #[test]
    fn mutation_clamps_to_the_bounds() {
        let config = FunctionConfig::new(sphere, -1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(41);
        let mut point = FunctionPoint { x: 1.0, y: -1.0 };
        for _ in 0..1000 {
            point.mutate(0.0, &config, &mut rng);
            assert!((-1.0..=1.0).contains(&point.x));
            assert!((-1.0..=1.0).contains(&point.y));
        }
    }

    #[test]
    fn minimizes_the_sphere_function() {
        let config = EvolutionConfig {
            population_size: 100,
            max_generations: 500,
            crossover_probability: 0.8,
            mutation_probability: 0.1,
            allele_mutation_probability: 0.0,
            elitism: true,
        };
        let bounds = FunctionConfig::new(sphere, -10.0, 10.0);
        let mut evolution = Evolution::<FunctionPoint>::with_seed(config, bounds, 53);
        evolution.run().unwrap();

        assert!(
            evolution.best_fitness() > -1e-2,
            "best fitness {}",
            evolution.best_fitness()
        );
        let best = evolution.best().expect("run produced no best individual");
        assert!((best.x - 1.0).abs() < 0.1, "x = {}", best.x);
        assert!((best.y - 2.0).abs() < 0.1, "y = {}", best.y);
    }
}
