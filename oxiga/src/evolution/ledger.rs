use crate::Individual;

use log::warn;

/// Per-generation fitness bookkeeping: one fitness entry and one
/// cumulative normalized-fitness entry per population slot, plus
/// the generation's extremes and sum. Both tables are fully
/// rebuilt every generation; the only partial update is the
/// single-slot overwrite performed by elite replacement.
pub(super) struct FitnessLedger {
    fitness: Vec<f64>,
    cumulative: Vec<f64>,
    best_slot: usize,
    best_fitness: f64,
    min_fitness: f64,
    fitness_sum: f64,
}

impl FitnessLedger {
    pub(super) fn new() -> FitnessLedger {
        FitnessLedger {
            fitness: Vec::new(),
            cumulative: Vec::new(),
            best_slot: 0,
            best_fitness: f64::NEG_INFINITY,
            min_fitness: f64::INFINITY,
            fitness_sum: 0.0,
        }
    }

    /// Re-evaluates every individual and recomputes the
    /// generation's minimum, maximum and sum in the same pass.
    pub(super) fn rescore<G: Individual>(&mut self, population: &[G], config: &G::Config) {
        self.fitness.clear();
        self.best_slot = 0;
        self.best_fitness = f64::NEG_INFINITY;
        self.min_fitness = f64::INFINITY;
        self.fitness_sum = 0.0;
        for (slot, individual) in population.iter().enumerate() {
            let fitness = individual.fitness(config);
            assert!(!fitness.is_nan(), "NaN fitness detected at slot {}", slot);
            self.fitness.push(fitness);
            self.fitness_sum += fitness;
            if fitness <= self.min_fitness {
                self.min_fitness = fitness;
            }
            if fitness >= self.best_fitness {
                self.best_slot = slot;
                self.best_fitness = fitness;
            }
        }
    }

    /// Overwrites one slot's fitness entry, adjusting the sum.
    /// Returns the displaced value. The stored extremes are left
    /// untouched so the caller can decide whether a re-scan is due.
    pub(super) fn replace(&mut self, slot: usize, fitness: f64) -> f64 {
        let displaced = self.fitness[slot];
        self.fitness[slot] = fitness;
        self.fitness_sum += fitness - displaced;
        displaced
    }

    /// Recomputes the maximum over the whole table. Needed after an
    /// elite replacement displaces the maximum individual, since a
    /// new maximum may be exposed anywhere.
    pub(super) fn rescan_best(&mut self) {
        self.best_slot = 0;
        self.best_fitness = f64::NEG_INFINITY;
        for (slot, &fitness) in self.fitness.iter().enumerate() {
            if fitness >= self.best_fitness {
                self.best_slot = slot;
                self.best_fitness = fitness;
            }
        }
    }

    /// Recomputes the minimum over the whole table.
    pub(super) fn rescan_min(&mut self) {
        self.min_fitness = f64::INFINITY;
        for &fitness in &self.fitness {
            if fitness <= self.min_fitness {
                self.min_fitness = fitness;
            }
        }
    }

    /// Rebuilds the cumulative table from the current entries.
    ///
    /// Every fitness is shifted by the generation minimum so the
    /// smallest share is zero, which keeps selection proportional
    /// to fitness even when fitness values are negative. When the
    /// generation has zero fitness range the shift would zero out
    /// every share, so each individual is assigned the equal share
    /// `1 / population_size` instead.
    pub(super) fn rebuild_cumulative(&mut self, generation: usize) {
        let size = self.fitness.len();
        self.cumulative.clear();
        if self.min_fitness == self.best_fitness {
            warn!("generation {}: min and max fitness are equal", generation);
            if self.min_fitness == 0.0 {
                warn!("generation {}: min and max fitness are both zero", generation);
            }
            let equal_share = 1.0 / size as f64;
            let mut cumulative = 0.0;
            for _ in 0..size {
                cumulative += equal_share;
                self.cumulative.push(cumulative);
            }
        } else {
            let total_shifted = self.fitness_sum - size as f64 * self.min_fitness;
            let mut cumulative = 0.0;
            for &fitness in &self.fitness {
                cumulative += (fitness - self.min_fitness) / total_shifted;
                self.cumulative.push(cumulative);
            }
        }
    }

    pub(super) fn len(&self) -> usize {
        self.fitness.len()
    }

    pub(super) fn fitness(&self, slot: usize) -> f64 {
        self.fitness[slot]
    }

    pub(super) fn fitness_values(&self) -> &[f64] {
        &self.fitness
    }

    pub(super) fn cumulative(&self, slot: usize) -> f64 {
        self.cumulative[slot]
    }

    pub(super) fn cumulative_table(&self) -> &[f64] {
        &self.cumulative
    }

    pub(super) fn best_slot(&self) -> usize {
        self.best_slot
    }

    pub(super) fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    pub(super) fn min_fitness(&self) -> f64 {
        self.min_fitness
    }

    pub(super) fn average(&self) -> f64 {
        self.fitness_sum / self.fitness.len() as f64
    }
}
