/// A snapshot of the run handed to the stopping policy at each
/// generation boundary.
#[derive(Clone, Copy, Debug)]
pub struct Progress {
    /// Generations evolved so far.
    pub generation: usize,
    /// Best fitness known across the entire run.
    pub best_fitness: f64,
    /// Average fitness of the current generation.
    pub average_fitness: f64,
}

/// Decides when the generational loop halts.
///
/// The policy is consulted once per generation boundary, including
/// before the first generation is evolved. Any `FnMut(&Progress) ->
/// bool` closure can serve as a policy, so ad-hoc criteria (elapsed
/// time, convergence of average fitness toward the best) need no
/// dedicated type:
///
/// ```
/// # use oxiga_encodings::queens::{QueensConfig, QueensPlacement};
/// use oxiga::{Evolution, EvolutionConfig, Progress};
///
/// let mut evolution =
///     Evolution::<QueensPlacement>::with_seed(EvolutionConfig::default(), QueensConfig::new(8), 7);
/// let mut policy = |progress: &Progress| {
///     progress.best_fitness >= 0.0 || progress.generation >= 200
/// };
/// evolution.run_with(&mut policy).unwrap();
/// ```
pub trait StoppingPolicy {
    /// Returns `true` when the run should halt.
    fn should_stop(&mut self, progress: &Progress) -> bool;
}

impl<F> StoppingPolicy for F
where
    F: FnMut(&Progress) -> bool,
{
    fn should_stop(&mut self, progress: &Progress) -> bool {
        self(progress)
    }
}

/// The default policy: stop once the configured number of
/// generations has been evolved.
pub struct GenerationLimit(pub usize);

impl StoppingPolicy for GenerationLimit {
    fn should_stop(&mut self, progress: &Progress) -> bool {
        progress.generation >= self.0
    }
}

/// Stop once the run-best fitness reaches a target value.
/// Suited to constraint-satisfaction problems that score a
/// candidate by its (negated) violation count.
pub struct TargetFitness(pub f64);

impl StoppingPolicy for TargetFitness {
    fn should_stop(&mut self, progress: &Progress) -> bool {
        progress.best_fitness >= self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(generation: usize, best_fitness: f64) -> Progress {
        Progress {
            generation,
            best_fitness,
            average_fitness: 0.0,
        }
    }

    #[test]
    fn generation_limit_stops_at_ceiling() {
        let mut policy = GenerationLimit(10);
        assert!(!policy.should_stop(&at(0, 0.0)));
        assert!(!policy.should_stop(&at(9, 0.0)));
        assert!(policy.should_stop(&at(10, 0.0)));
        assert!(policy.should_stop(&at(11, 0.0)));
    }

    #[test]
    fn target_fitness_stops_once_reached() {
        let mut policy = TargetFitness(0.0);
        assert!(!policy.should_stop(&at(3, -2.0)));
        assert!(policy.should_stop(&at(3, 0.0)));
        assert!(policy.should_stop(&at(3, 1.5)));
    }

    #[test]
    fn closures_are_policies() {
        let mut calls = 0;
        {
            let mut policy = |progress: &Progress| {
                calls += 1;
                progress.generation >= 1
            };
            assert!(!policy.should_stop(&at(0, 0.0)));
            assert!(policy.should_stop(&at(1, 0.0)));
        }
        assert_eq!(calls, 2);
    }
}
