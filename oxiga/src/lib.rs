//! A simple generic genetic algorithm.
//!
//! The engine evolves a fixed-size population of candidate solutions
//! ("individuals") toward higher fitness via roulette-wheel parent
//! selection, stochastic crossover and mutation, generational
//! replacement and optional elitism. It is generic over the
//! [`Individual`] trait, so any representation can be evolved by
//! supplying its own random-generation, fitness, crossover and
//! mutation operators. Ready-made permutation and real-valued
//! encodings are supplied via the
//! [`oxiga-encodings`](https://crates.io/crates/oxiga-encodings) crate.
//!
//! The engine maximizes fitness. Problems that look for a minimum
//! should negate their objective.
//!
//! All stochastic decisions draw from independent seedable streams,
//! so a run is reproducible given its seed.
//!
//! # Example usage: solving 8-queens with a permutation encoding
//! ```
//! use oxiga::{Evolution, EvolutionConfig, Progress};
//! use oxiga_encodings::queens::{QueensConfig, QueensPlacement};
//!
//! fn main() {
//!     let config = EvolutionConfig {
//!         population_size: 50,
//!         crossover_probability: 0.9,
//!         mutation_probability: 0.1,
//!         allele_mutation_probability: 0.1,
//!         elitism: true,
//!         ..EvolutionConfig::default()
//!     };
//!
//!     let mut evolution = Evolution::<QueensPlacement>::new(config, QueensConfig::new(8));
//!
//!     // Stop as soon as a conflict-free placement is known,
//!     // or give up after 5000 generations.
//!     let mut solved = |progress: &Progress| {
//!         progress.best_fitness >= 0.0 || progress.generation >= 5000
//!     };
//!     if let Err(e) = evolution.run_with(&mut solved) {
//!         eprintln!("{}", e);
//!         return;
//!     }
//!
//!     if evolution.best_fitness() >= 0.0 {
//!         println!(
//!             "solved in {} generations: {}",
//!             evolution.generation(),
//!             evolution.best().unwrap()
//!         );
//!     }
//! }
//! ```

mod evolution;
mod individual;

pub use evolution::*;
pub use individual::*;
