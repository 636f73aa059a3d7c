use oxiga::{Evolution, EvolutionConfig, TargetFitness};
use oxiga_encodings::queens::{QueensConfig, QueensPlacement};

/// Solves the N-queens problem for N = 100.
///
/// Tune the parameter settings if you are changing N.
fn main() {
    env_logger::init();

    let config = EvolutionConfig {
        population_size: 100,
        crossover_probability: 0.9,
        mutation_probability: 0.1,
        allele_mutation_probability: 0.03,
        elitism: true,
        ..EvolutionConfig::default()
    };
    println!("{:#?}", config);

    let mut evolution = Evolution::<QueensPlacement>::new(config, QueensConfig::new(100));

    // run until a conflict-free placement is known
    let mut solved = TargetFitness(0.0);
    if let Err(e) = evolution.run_with(&mut solved) {
        eprintln!("{}", e);
        return;
    }
    evolution.report_results();

    let best = evolution.best().expect("the run produced no placement");
    println!(
        "solved in {} generations: {}",
        evolution.generation(),
        best
    );
    println!("{}", serde_json::to_string(best).unwrap());
}
