use aos_damper::config::rod::{load_parameters, FixtureRod};
use aos_damper::verify::{evaluate, format_result, load_cases, reference_cases, write_results};
use log::{info, warn};
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

const TOLERANCE: f64 = 1e-6;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    pretty_env_logger::init();

    // Usage: aos-damper [cases.csv] [parameters.csv]
    let args: Vec<String> = env::args().skip(1).collect();

    let params = match args.get(1) {
        Some(path) => load_parameters(path)?,
        None => FixtureRod::parameters(),
    };
    params.debug_print();

    println!("Starting hysteresis rod verification...");

    let mut cases = reference_cases();
    if let Some(path) = args.first() {
        let extra = load_cases(path)?;
        info!("evaluating {} extra cases from {}", extra.len(), path);
        cases.extend(extra);
    }

    let results: Vec<_> = cases.iter().map(|case| evaluate(&params, case)).collect();

    let mut failures = 0;
    for result in &results {
        println!("{}", format_result(result));
        match result.passes(TOLERANCE) {
            Some(true) => info!("{} matches the reference", result.name),
            Some(false) => {
                failures += 1;
                warn!(
                    "{} differs from the reference: got {:.8}, expected {:.8}",
                    result.name,
                    result.dm_dt,
                    result.expected.unwrap_or(f64::NAN)
                );
            }
            None => {}
        }
    }

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("hysteresis_verify.csv");
    write_results(&output_path, &results)?;
    println!("Verification finished. Data saved to {}", output_path.display());

    if failures > 0 {
        eprintln!("{} case(s) did not match the reference", failures);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
