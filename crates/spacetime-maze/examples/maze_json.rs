//! Solves the reference maze and prints the JSON report.
//!
//! Pass a file path to write the report there instead of stdout.

use spacetime::SolverConfig;
use spacetime_maze::solve_reference;
use spacetime_render::Report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let trace = solve_reference(SolverConfig::builder().max_depth(7).uncapped().build())?;
    let report = Report::from_trace(&trace);

    match std::env::args().nth(1) {
        Some(path) => {
            report.write_to(std::fs::File::create(&path)?)?;
            eprintln!(
                "Wrote {} solutions and {} loops to {path}",
                report.statistics.total_solutions, report.statistics.total_loops
            );
        }
        None => println!("{}", report.to_json()?),
    }
    Ok(())
}
