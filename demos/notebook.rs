//! Solves the 12-brick puzzle on a 4x3 grid and prints the placement.
//!
//! Run with `RUST_LOG=debug` to see model sizes.

use u_bricks::bricks::{BricksConfig, BricksProblem, BricksRunner};
use u_bricks::ip::MicroLpSolver;

fn main() {
    env_logger::init();

    let problem = BricksProblem::new(4, 3)
        .with_bricks([
            "a1", "a2", "a3", "b1", "b2", "c1", "c2", "c3", "c4", "d1", "d2", "e1",
        ])
        .with_prefix_pairs();

    for group in problem.color_groups() {
        println!("group: {}", group.members.join(" "));
    }

    match BricksRunner::solve(&problem, &MicroLpSolver::new(), &BricksConfig::default()) {
        Ok(result) => {
            println!(
                "status: optimal, penalty {} ({} vars, {} constraints)",
                result.objective_value, result.var_count, result.constraint_count
            );
            print!("{}", result.placement);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
