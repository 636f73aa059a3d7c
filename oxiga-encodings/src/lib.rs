//! # OxiGA-encodings
//! Ready-made implementations of the [`OxiGA` crate](https://crates.io/crates/oxiga)'s
//! `Individual` trait:
//! - [`QueensPlacement`]: a permutation-encoded board for the N-queens
//!   problem, scored by its (negated) conflict count.
//! - [`FunctionPoint`]: an `(x, y)` pair for minimizing a two-variable
//!   real function, scored by the negated objective.
//!
//! The [`crossovers`] module additionally provides the classic one-point
//! and two-point crossover operators over arbitrary equal-length
//! sequences, for building further sequence encodings.
//!
//! [`QueensPlacement`]: crate::queens::QueensPlacement
//! [`FunctionPoint`]: crate::function_point::FunctionPoint
//!
//! # Example usage: minimizing the McCormick function
//! ```
//! use oxiga::{Evolution, EvolutionConfig};
//! use oxiga_encodings::function_point::{FunctionConfig, FunctionPoint};
//!
//! fn mccormick(x: f64, y: f64) -> f64 {
//!     (x + y).sin() + (x - y).powi(2) - 1.5 * x + 2.5 * y + 1.0
//! }
//!
//! fn main() {
//!     let config = EvolutionConfig {
//!         population_size: 100,
//!         max_generations: 1000,
//!         crossover_probability: 0.8,
//!         mutation_probability: 0.03,
//!         allele_mutation_probability: 0.0,
//!         elitism: true,
//!     };
//!     let bounds = FunctionConfig::with_bounds(mccormick, (-1.5, -3.0), (4.0, 4.0));
//!
//!     let mut evolution = Evolution::<FunctionPoint>::new(config, bounds);
//!     evolution.run().unwrap();
//!
//!     let best = evolution.best().unwrap();
//!     println!("minimum found at x = {}, y = {}", best.x, best.y);
//! }
//! ```

pub mod crossovers;
pub mod function_point;
pub mod queens;

pub use function_point::{FunctionConfig, FunctionPoint};
pub use queens::{QueensConfig, QueensPlacement};
