use super::ledger::FitnessLedger;

use log::error;
use rand::rngs::StdRng;
use rand::Rng;

/// Roulette-wheel parent selection over a generation's
/// cumulative table.
pub(super) struct Selector<'a> {
    ledger: &'a FitnessLedger,
}

impl<'a> Selector<'a> {
    pub(super) fn new(ledger: &'a FitnessLedger) -> Selector<'a> {
        Selector { ledger }
    }

    /// Selects two distinct parents for one crossover. If either
    /// selection comes back empty the engine keeps running on the
    /// first two slots rather than aborting the generation.
    pub(super) fn select_crossover_parents(&self, rng: &mut StdRng) -> (usize, usize) {
        let parent1 = self.select_parent(None, rng);
        let parent2 = match parent1 {
            Some(first) => self.select_parent(Some(first), rng),
            None => None,
        };
        match (parent1, parent2) {
            (Some(first), Some(second)) => (first, second),
            _ => {
                error!("parent selection failed, using the first two individuals for crossover");
                (0, 1)
            }
        }
    }

    /// Spins the wheel once. `exclude` marks an already-selected
    /// slot that must not be returned again.
    pub(super) fn select_parent(&self, exclude: Option<usize>, rng: &mut StdRng) -> Option<usize> {
        self.pick(rng.gen::<f64>(), exclude)
    }

    pub(super) fn pick(&self, draw: f64, exclude: Option<usize>) -> Option<usize> {
        let last = self.ledger.len() - 1;
        // A draw at or beyond the final cumulative value selects the
        // last slot. This covers the case where accumulated rounding
        // leaves the final entry below 1.0.
        if draw >= self.ledger.cumulative(last) {
            return self.resolve(last, exclude);
        }
        for slot in 0..self.ledger.len() {
            // first cumulative value that exceeds the draw
            if self.ledger.cumulative(slot) > draw {
                return self.resolve(slot, exclude);
            }
        }
        None
    }

    fn resolve(&self, slot: usize, exclude: Option<usize>) -> Option<usize> {
        if exclude == Some(slot) {
            self.similar_fit(slot)
        } else {
            Some(slot)
        }
    }

    /// Finds the other individual whose fitness is closest to this
    /// one's, breaking ties in favor of the earlier slot. Used as
    /// the substitute when the wheel lands on the excluded slot, so
    /// the draw never has to be repeated.
    pub(super) fn similar_fit(&self, slot: usize) -> Option<usize> {
        let target = self.ledger.fitness(slot);
        let mut most_similar = None;
        let mut least_difference = f64::INFINITY;
        for other in 0..self.ledger.len() {
            if other == slot {
                continue;
            }
            let difference = (target - self.ledger.fitness(other)).abs();
            if difference < least_difference {
                most_similar = Some(other);
                least_difference = difference;
            }
        }
        most_similar
    }
}
