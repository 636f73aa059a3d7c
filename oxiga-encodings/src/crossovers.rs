//! Commonly used crossover operators for sequence encodings.
//!
//! Both operators expect two parents of equal length and return a
//! new sequence of the same length. The parents are swapped with
//! probability 1/2 before cutting, to remove the positional bias
//! of always taking the leading segment from the first parent.
//! These operators do not preserve permutation constraints; for a
//! permutation-safe variant see the order crossover used by
//! [`QueensPlacement`].
//!
//! [`QueensPlacement`]: crate::queens::QueensPlacement
use log::error;
use rand::rngs::StdRng;
use rand::Rng;

/// One-point crossover: copies one parent up to a randomly
/// selected point and the other parent from there on.
///
/// Requires equal lengths of at least 2; on a precondition
/// violation an error is logged and the first parent returned
/// unchanged.
pub fn one_point_crossover<T: Clone>(parent1: &[T], parent2: &[T], rng: &mut StdRng) -> Vec<T> {
    if parent1.len() < 2 || parent1.len() != parent2.len() {
        error!(
            "cannot perform one point crossover with sizes {}, {}",
            parent1.len(),
            parent2.len()
        );
        return parent1.to_vec();
    }
    let (parent1, parent2) = shuffle(parent1, parent2, rng);
    let point = rng.gen_range(1..parent1.len());

    let mut offspring = parent1[..point].to_vec();
    offspring.extend_from_slice(&parent2[point..]);
    offspring
}

/// Two-point crossover: copies the middle segment between two
/// randomly selected points from one parent and the rest from the
/// other.
///
/// Requires equal lengths of at least 3; on a precondition
/// violation an error is logged and the first parent returned
/// unchanged.
pub fn two_point_crossover<T: Clone>(parent1: &[T], parent2: &[T], rng: &mut StdRng) -> Vec<T> {
    if parent1.len() < 3 || parent1.len() != parent2.len() {
        error!(
            "cannot perform two point crossover with sizes {}, {}",
            parent1.len(),
            parent2.len()
        );
        return parent1.to_vec();
    }
    let (parent1, parent2) = shuffle(parent1, parent2, rng);
    let length = parent1.len();
    let first = rng.gen_range(1..=length - 2);
    let second = rng.gen_range(2..=length - 1);
    let (first, second) = if first > second {
        (second, first)
    } else {
        (first, second)
    };

    let mut offspring = parent1[..first].to_vec();
    offspring.extend_from_slice(&parent2[first..second]);
    offspring.extend_from_slice(&parent1[second..]);
    offspring
}

fn shuffle<'a, T>(parent1: &'a [T], parent2: &'a [T], rng: &mut StdRng) -> (&'a [T], &'a [T]) {
    if rng.gen::<f64>() < 0.5 {
        (parent1, parent2)
    } else {
        (parent2, parent1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;

    /// True when the sequence consists of at most `segments`
    /// constant runs.
    fn segments_at_most(offspring: &[u8], segments: usize) -> bool {
        let switches = offspring.windows(2).filter(|w| w[0] != w[1]).count();
        switches < segments
    }

    #[test]
    fn one_point_offspring_is_two_segments() {
        let zeros = [0u8; 10];
        let ones = [1u8; 10];
        let mut rng = StdRng::seed_from_u64(61);
        for _ in 0..100 {
            let offspring = one_point_crossover(&zeros, &ones, &mut rng);
            assert_eq!(offspring.len(), 10);
            // one cut in 1..10 always mixes both parents
            assert!(offspring.contains(&0) && offspring.contains(&1));
            assert!(segments_at_most(&offspring, 2));
        }
    }

    #[test]
    fn two_point_offspring_is_at_most_three_segments() {
        let zeros = [0u8; 10];
        let ones = [1u8; 10];
        let mut rng = StdRng::seed_from_u64(67);
        for _ in 0..100 {
            let offspring = two_point_crossover(&zeros, &ones, &mut rng);
            assert_eq!(offspring.len(), 10);
            assert!(segments_at_most(&offspring, 3));
        }
    }

    #[test]
    fn mismatched_parents_are_returned_unchanged() {
        let mut rng = StdRng::seed_from_u64(71);
        let short = [1u8, 2];
        let long = [3u8, 4, 5];
        assert_eq!(one_point_crossover(&short, &long, &mut rng), short);
        assert_eq!(two_point_crossover(&long, &short, &mut rng), long);
        // too short for a cut point
        assert_eq!(one_point_crossover(&[1u8], &[2u8], &mut rng), [1]);
        assert_eq!(two_point_crossover(&short, &short, &mut rng), short);
    }
}
