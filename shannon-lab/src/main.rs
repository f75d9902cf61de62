use std::collections::HashSet;
use std::path::PathBuf;

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use shannon_core::config::Plan;
use shannon_core::model::generator;
use shannon_core::report;

/// Optional run description looked up in the working directory.
const PLAN_FILE: &str = "shannon-lab.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Without a plan file this generates uniform.txt and non_uniform.txt,
    // then analyzes them along with literature.txt (text mode)
    let plan = Plan::load_or_default(PLAN_FILE)?;

    // A fixed seed makes the generated files reproducible
    let mut rng = match plan.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating test files...");
    let mut absent: HashSet<PathBuf> = HashSet::new();
    for spec in &plan.generate {
        if let Err(e) = generator::generate_file(&mut rng, spec) {
            // Whatever sits at this path is stale: do not analyze it
            error!("Generation of {} failed: {}", spec.path.display(), e);
            eprintln!("Failed to generate {}: {}", spec.path.display(), e);
            absent.insert(spec.path.clone());
        }
    }

    println!("\nAnalyzing files...");
    for target in &plan.analyze {
        if absent.contains(&target.path) {
            eprintln!("Skipping {}: generation failed", target.path.display());
            continue;
        }

        match report::analyze_file(&target.path, target.text_mode) {
            Ok(analysis) => {
                if analysis.undersized {
                    println!("File is too small (<10KB), analysis continues anyway");
                }
                println!("\n{}", analysis);
                info!("{}: H1={:.4} H2={:.4}", analysis.name, analysis.entropy_1, analysis.entropy_2);
            }
            Err(e) => eprintln!("Error opening file {}: {}", target.path.display(), e),
        }
    }

    Ok(())
}
