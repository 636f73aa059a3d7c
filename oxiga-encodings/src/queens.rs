//! A permutation encoding for the N-queens problem.
use std::fmt;

use ahash::AHashSet;
use log::error;
use oxiga::{CrossoverParents, Individual};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const DEFAULT_BOARD_SIZE: usize = 100;

/// Configuration for the N-queens encoding: the board size (and
/// queen count) N.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct QueensConfig {
    board_size: usize,
}

impl QueensConfig {
    /// Returns a configuration for an N-by-N board. Values below 4
    /// are rejected with a logged error, keeping the default of
    /// 100, since no solutions exist for 4 > N > 1.
    pub fn new(board_size: usize) -> QueensConfig {
        if board_size < 4 {
            error!(
                "invalid board size {} (solutions may not exist below 4 queens), keeping default size {}",
                board_size, DEFAULT_BOARD_SIZE
            );
            QueensConfig {
                board_size: DEFAULT_BOARD_SIZE,
            }
        } else {
            QueensConfig { board_size }
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }
}

impl Default for QueensConfig {
    fn default() -> QueensConfig {
        QueensConfig {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

/// A placement of N queens on an N-by-N board, one per column.
///
/// `rows[column]` is the 0-based row of the queen in that column,
/// and every row is used exactly once. All operators preserve the
/// permutation property.
///
/// For N = 4, the placement `2 0 3 1` is the board
/// ```text
/// |   | x |   |   |
/// |   |   |   | x |
/// | x |   |   |   |
/// |   |   | x |   |
/// ```
/// which is conflict-free.
///
/// Fitness is the negated count of attacking pairs, so a valid
/// solution scores 0 and everything else scores below it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensPlacement {
    rows: Vec<usize>,
}

impl QueensPlacement {
    /// Returns the row of the queen in each column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Counts the pairs of queens attacking each other along a row
    /// or a diagonal.
    pub fn conflicts(&self) -> usize {
        let mut conflicts = 0;
        for column in 0..self.rows.len() {
            for other in 0..column {
                if Self::attack(&self.rows, column, other) {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    fn attack(rows: &[usize], column: usize, other: usize) -> bool {
        let distance = (column - other) as isize;
        let row = rows[column] as isize;
        let other_row = rows[other] as isize;
        other_row == row || other_row == row - distance || other_row == row + distance
    }

    /// Columns involved in at least one conflict, one entry per
    /// conflicting pair, so heavily conflicting columns are listed
    /// (and later drawn) more often.
    fn conflicting_columns(&self) -> Vec<usize> {
        let mut columns = Vec::new();
        for column in 0..self.rows.len() {
            for other in 0..column {
                if Self::attack(&self.rows, column, other) {
                    columns.push(column);
                }
            }
        }
        columns
    }

    /// One-point order crossover at the given cut point.
    ///
    /// The head of `parent1` up to `cut` is copied as-is; the
    /// remaining columns take `parent2`'s value where it is not yet
    /// used, and the leftover values of `parent2`, in the order
    /// they appear there, fill the columns that would have repeated
    /// a value. The result is again a permutation.
    ///
    /// ```text
    /// parent1  : a b c | d e f g h i j
    /// parent2  : d g b | a i c j e f h
    /// ---------------------------------
    /// offspring: a b c | d i g j e f h
    /// ```
    fn order_crossover(parent1: &QueensPlacement, parent2: &QueensPlacement, cut: usize) -> QueensPlacement {
        let size = parent1.rows.len();
        let mut rows = vec![0; size];
        let mut assigned = AHashSet::with_capacity(size);
        for column in 0..cut {
            rows[column] = parent1.rows[column];
            assigned.insert(parent1.rows[column]);
        }

        // copy from parent2 with no repetition
        let mut open_columns = Vec::new();
        for column in cut..size {
            let row = parent2.rows[column];
            if assigned.contains(&row) {
                open_columns.push(column);
            } else {
                rows[column] = row;
                assigned.insert(row);
            }
        }

        let leftovers: Vec<usize> = parent2
            .rows
            .iter()
            .copied()
            .filter(|row| !assigned.contains(row))
            .collect();

        if open_columns.len() != leftovers.len() {
            error!(
                "order crossover left {} open columns for {} leftover values, returning a parent unchanged",
                open_columns.len(),
                leftovers.len()
            );
            return parent1.clone();
        }

        for (column, row) in open_columns.into_iter().zip(leftovers) {
            rows[column] = row;
        }
        QueensPlacement { rows }
    }
}

impl Individual for QueensPlacement {
    type Config = QueensConfig;

    /// A uniformly random permutation of the rows.
    fn random(config: &QueensConfig, rng: &mut StdRng) -> QueensPlacement {
        let mut rows: Vec<usize> = (0..config.board_size).collect();
        rows.shuffle(rng);
        QueensPlacement { rows }
    }

    fn fitness(&self, _config: &QueensConfig) -> f64 {
        -(self.conflicts() as f64)
    }

    fn crossover(
        parents: CrossoverParents<'_, Self>,
        config: &QueensConfig,
        rng: &mut StdRng,
    ) -> QueensPlacement {
        // swap the parents half the time to remove the positional
        // bias of always copying the head from the first one
        let (parent1, parent2) = if rng.gen::<f64>() < 0.5 {
            (parents.parent1, parents.parent2)
        } else {
            (parents.parent2, parents.parent1)
        };
        let cut = rng.gen_range(1..config.board_size);
        Self::order_crossover(parent1, parent2, cut)
    }

    /// Swap mutation aimed at conflicts: each column selected by
    /// the per-allele draw is swapped with one of the currently
    /// conflicting columns, which is then struck off the list. Does
    /// nothing on a conflict-free placement.
    fn mutate(
        &mut self,
        allele_mutation_probability: f64,
        _config: &QueensConfig,
        rng: &mut StdRng,
    ) {
        let mut conflicting = self.conflicting_columns();
        for column in 0..self.rows.len() {
            if rng.gen::<f64>() < allele_mutation_probability && !conflicting.is_empty() {
                let drawn = rng.gen_range(0..conflicting.len());
                let conflict_column = conflicting.remove(drawn);
                self.rows.swap(column, conflict_column);
            }
        }
    }
}

impl fmt::Display for QueensPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut columns = self.rows.iter();
        if let Some(row) = columns.next() {
            write!(f, "{}", row)?;
            for row in columns {
                write!(f, " {}", row)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use oxiga::{Evolution, EvolutionConfig, Progress};
    use rand::SeedableRng;

    fn placement(rows: &[usize]) -> QueensPlacement {
        QueensPlacement {
            rows: rows.to_vec(),
        }
    }

    fn is_permutation(rows: &[usize]) -> bool {
        let mut sorted = rows.to_vec();
        sorted.sort_unstable();
        sorted.into_iter().eq(0..rows.len())
    }

    #[test]
    fn conflicts_on_known_boards() {
        // the documented conflict-free 4-queens placement
        assert_eq!(placement(&[2, 0, 3, 1]).conflicts(), 0);
        // the main diagonal: every pair attacks
        assert_eq!(placement(&[0, 1, 2, 3]).conflicts(), 6);
        assert_eq!(placement(&[1, 3, 0, 2]).conflicts(), 0);
        assert_eq!(placement(&[2, 0, 3, 1]).fitness(&QueensConfig::new(4)), 0.0);
        assert_eq!(placement(&[0, 1, 2, 3]).fitness(&QueensConfig::new(4)), -6.0);
    }

    #[test]
    fn small_boards_fall_back_to_the_default_size() {
        assert_eq!(QueensConfig::new(3).board_size(), 100);
        assert_eq!(QueensConfig::new(0).board_size(), 100);
        assert_eq!(QueensConfig::new(4).board_size(), 4);
        assert_eq!(QueensConfig::default().board_size(), 100);
    }

    #[test]
    fn random_placements_are_permutations() {
        let config = QueensConfig::new(20);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let placement = QueensPlacement::random(&config, &mut rng);
            assert!(is_permutation(placement.rows()));
        }
    }

    #[test]
    fn order_crossover_matches_the_documented_example() {
        let parent1 = placement(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let parent2 = placement(&[3, 6, 1, 0, 8, 2, 9, 4, 5, 7]);
        let offspring = QueensPlacement::order_crossover(&parent1, &parent2, 3);
        assert_eq!(offspring.rows(), [0, 1, 2, 3, 8, 6, 9, 4, 5, 7]);
    }

    #[test]
    fn order_crossover_preserves_the_permutation() {
        let config = QueensConfig::new(12);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let parent1 = QueensPlacement::random(&config, &mut rng);
            let parent2 = QueensPlacement::random(&config, &mut rng);
            for cut in 1..12 {
                let offspring = QueensPlacement::order_crossover(&parent1, &parent2, cut);
                assert!(is_permutation(offspring.rows()));
                assert_eq!(offspring.rows()[..cut], parent1.rows()[..cut]);
            }
        }
    }

    #[test]
    fn mutation_preserves_the_permutation() {
        let config = QueensConfig::new(10);
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..100 {
            let mut placement = QueensPlacement::random(&config, &mut rng);
            placement.mutate(1.0, &config, &mut rng);
            assert!(is_permutation(placement.rows()));
        }
    }

    #[test]
    fn mutation_leaves_solutions_alone() {
        let config = QueensConfig::new(4);
        let mut rng = StdRng::seed_from_u64(19);
        let mut solved = placement(&[2, 0, 3, 1]);
        solved.mutate(1.0, &config, &mut rng);
        assert_eq!(solved, placement(&[2, 0, 3, 1]));
    }

    #[test]
    fn displays_as_space_separated_rows() {
        assert_eq!(placement(&[2, 0, 3, 1]).to_string(), "2 0 3 1");
    }

    #[test]
    fn placements_survive_serialization() {
        let placement = placement(&[2, 0, 3, 1]);
        let json = serde_json::to_string(&placement).unwrap();
        assert_eq!(serde_json::from_str::<QueensPlacement>(&json).unwrap(), placement);
    }

    #[test]
    fn solves_eight_queens() {
        let config = EvolutionConfig {
            population_size: 50,
            max_generations: 5000,
            crossover_probability: 0.9,
            mutation_probability: 0.1,
            allele_mutation_probability: 0.1,
            elitism: true,
        };
        let mut evolution =
            Evolution::<QueensPlacement>::with_seed(config, QueensConfig::new(8), 97);
        let mut solved = |progress: &Progress| {
            progress.best_fitness >= 0.0 || progress.generation >= 5000
        };
        evolution.run_with(&mut solved).unwrap();

        assert_eq!(evolution.best_fitness(), 0.0);
        let best = evolution.best().expect("run produced no best individual");
        assert_eq!(best.conflicts(), 0);
        assert!(is_permutation(best.rows()));
    }
}
