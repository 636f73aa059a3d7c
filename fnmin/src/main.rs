use std::f64::consts::PI;

use oxiga::{Evolution, EvolutionConfig};
use oxiga_encodings::function_point::{FunctionConfig, FunctionPoint, Objective};

/// McCormick function:
/// f(x, y) = sin(x + y) + (x − y)² − 1.5x + 2.5y + 1
///
/// Global minimum ≈ −1.9133 at (−0.54719, −1.54719).
fn mccormick(x: f64, y: f64) -> f64 {
    (x + y).sin() + (x - y).powi(2) - 1.5 * x + 2.5 * y + 1.0
}

/// Cross-in-tray function:
/// f(x, y) = −0.0001(|sin(x)sin(y)exp(|100 − √(x² + y²)/π|)| + 1)^0.1
///
/// Four global minima of −2.06261, at (±1.34941, ±1.34941).
fn cross_in_tray(x: f64, y: f64) -> f64 {
    -0.0001
        * ((x.sin() * y.sin() * (100.0 - (x * x + y * y).sqrt() / PI).abs().exp()).abs() + 1.0)
            .powf(0.1)
}

/// Schaffer N.4 function:
/// f(x, y) = 0.5 + (cos²(sin|x² − y²|) − 0.5) / (1 + 0.001(x² + y²))²
///
/// Global minimum ≈ 0.292579 at (0, ±1.25313).
fn schaffer_n4(x: f64, y: f64) -> f64 {
    0.5 + ((x * x - y * y).abs().sin().cos().powi(2) - 0.5)
        / (1.0 + 0.001 * (x * x + y * y)).powi(2)
}

fn main() {
    env_logger::init();

    minimize(
        "McCormick",
        FunctionConfig::with_bounds(mccormick, (-1.5, -3.0), (4.0, 4.0)),
        EvolutionConfig {
            max_generations: 1000,
            crossover_probability: 0.8,
            mutation_probability: 0.03,
            ..defaults()
        },
    );
    minimize(
        "Cross-in-tray",
        FunctionConfig::new(cross_in_tray, -10.0, 10.0),
        EvolutionConfig {
            max_generations: 1000,
            crossover_probability: 0.65,
            mutation_probability: 0.005,
            ..defaults()
        },
    );
    minimize(
        "Schaffer N.4",
        FunctionConfig::new(schaffer_n4, -100.0, 100.0),
        EvolutionConfig {
            max_generations: 2000,
            crossover_probability: 0.75,
            mutation_probability: 0.02,
            ..defaults()
        },
    );
}

fn defaults() -> EvolutionConfig {
    EvolutionConfig {
        population_size: 100,
        allele_mutation_probability: 0.0,
        elitism: true,
        ..EvolutionConfig::default()
    }
}

fn minimize(name: &str, bounds: FunctionConfig, config: EvolutionConfig) {
    let objective: Objective = bounds.objective();

    let mut evolution = Evolution::<FunctionPoint>::new(config, bounds);
    if let Err(e) = evolution.run() {
        eprintln!("{}", e);
        return;
    }
    evolution.report_results();

    let best = evolution.best().expect("the run produced no point");
    println!("====================================");
    println!("{} minimum value was found at", name);
    println!("x = {:.15}, y = {:.15}", best.x, best.y);
    println!("value = {:.15}", objective(best.x, best.y));
}
