//! End-to-end solves through the microlp adapter.

use u_bricks::bricks::{BricksConfig, BricksProblem, BricksRunner, ModelBuilder, Placement};
use u_bricks::ip::{MicroLpSolver, MipSolver, SolveStatus};
use u_bricks::BricksError;

/// 4x3 grid, 12 bricks in five colors: a×3, b×2, c×4, d×2, e×1.
fn notebook_problem() -> BricksProblem {
    BricksProblem::new(4, 3)
        .with_bricks([
            "a1", "a2", "a3", "b1", "b2", "c1", "c2", "c3", "c4", "d1", "d2", "e1",
        ])
        .with_pair("a1", "a2")
        .with_pair("a2", "a3")
        .with_pair("b1", "b2")
        .with_pair("c1", "c2")
        .with_pair("c2", "c3")
        .with_pair("c3", "c4")
        .with_pair("d1", "d2")
}

#[test]
fn test_notebook_scenario() {
    let problem = notebook_problem();
    let config = BricksConfig::default();
    let model = ModelBuilder::build(&problem, &config).unwrap();
    assert_eq!(model.var_count(), 4 * 3 * 12 * 4);

    let outcome = MicroLpSolver::new().solve(model.program());
    assert_eq!(outcome.status, SolveStatus::Optimal);

    let result = BricksRunner::solve_model(&model, &MicroLpSolver::new(), &config).unwrap();
    let placement = &result.placement;
    assert_eq!(placement.placed_count(), 12);

    let c_anchor = placement.anchor_of("c1").unwrap();
    for c in ["c2", "c3", "c4"] {
        assert_eq!(placement.anchor_of(c), Some(c_anchor));
    }

    // Four c bricks cannot all share a 3-high anchor column.
    assert!((result.objective_value - 10.0).abs() < 1e-9);
    assert_eq!(placement.total_penalty(&config), 10);
}

#[test]
fn test_notebook_groups_share_anchor() {
    let problem = notebook_problem();
    let result =
        BricksRunner::solve(&problem, &MicroLpSolver::new(), &BricksConfig::default()).unwrap();

    for group in problem.color_groups() {
        let anchors: Vec<Option<usize>> = group
            .members
            .iter()
            .map(|b| result.placement.anchor_of(b))
            .collect();
        assert!(anchors.iter().all(|a| a.is_some() && *a == anchors[0]));
    }

    for ((x, _), placed) in result.placement.iter() {
        assert!(x <= placed.anchor, "{} at column {x} right of anchor {}", placed.brick, placed.anchor);
    }
}

#[test]
fn test_prefix_pairs_match_explicit() {
    let explicit = notebook_problem();
    let derived = BricksProblem::new(4, 3)
        .with_bricks(explicit.bricks.clone())
        .with_prefix_pairs();
    assert_eq!(derived.same_color_pairs, explicit.same_color_pairs);
}

#[test]
fn test_render_shape() {
    let result = BricksRunner::solve(
        &notebook_problem(),
        &MicroLpSolver::new(),
        &BricksConfig::default(),
    )
    .unwrap();

    let text = result.placement.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let cells: Vec<&str> = line.split('\t').collect();
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.ends_with(']')));
    }
}

#[test]
fn test_spare_cells_left_empty() {
    let problem = BricksProblem::new(3, 2)
        .with_bricks(["x1", "x2", "y1"])
        .with_prefix_pairs();
    let result =
        BricksRunner::solve(&problem, &MicroLpSolver::new(), &BricksConfig::default()).unwrap();

    assert_eq!(result.placement.placed_count(), 3);
    assert_eq!(result.objective_value, 0.0);
    assert_eq!(
        result.placement.anchor_of("x1"),
        result.placement.anchor_of("x2")
    );
}

#[test]
fn test_no_bricks_leaves_grid_empty() {
    let problem = BricksProblem::new(3, 2);
    let result =
        BricksRunner::solve(&problem, &MicroLpSolver::new(), &BricksConfig::default()).unwrap();

    assert_eq!(result.var_count, 0);
    assert_eq!(result.placement.placed_count(), 0);
    assert_eq!(result.objective_value, 0.0);
    assert_eq!(result.placement.render(), "\t\t\n\t\t\n");
}

#[test]
fn test_zero_penalty_scale() {
    let config = BricksConfig::default().with_penalty_scale(0);
    let result = BricksRunner::solve(&notebook_problem(), &MicroLpSolver::new(), &config).unwrap();
    assert_eq!(result.placement.placed_count(), 12);
    assert_eq!(result.objective_value, 0.0);
}

#[test]
fn test_over_capacity_is_invalid_model() {
    let problem = BricksProblem::new(2, 2).with_bricks(["a", "b", "c", "d", "e"]);
    let err =
        BricksRunner::solve(&problem, &MicroLpSolver::new(), &BricksConfig::default()).unwrap_err();
    assert!(matches!(err, BricksError::InvalidModel(_)));
}

#[test]
fn test_over_capacity_without_precheck_is_infeasible() {
    let problem = BricksProblem::new(1, 1).with_bricks(["a", "b"]);
    let config = BricksConfig::default().with_check_capacity(false);
    let err = BricksRunner::solve(&problem, &MicroLpSolver::new(), &config).unwrap_err();
    assert_eq!(err, BricksError::Infeasible);
}

#[test]
fn test_unknown_pair_is_invalid_model() {
    let problem = notebook_problem().with_pair("c4", "f1");
    let err =
        BricksRunner::solve(&problem, &MicroLpSolver::new(), &BricksConfig::default()).unwrap_err();
    assert!(matches!(err, BricksError::InvalidModel(msg) if msg.contains("f1")));
}

#[test]
fn test_extract_twice_is_identical() {
    let config = BricksConfig::default();
    let model = ModelBuilder::build(&notebook_problem(), &config).unwrap();
    let result = BricksRunner::solve_model(&model, &MicroLpSolver::new(), &config).unwrap();

    let again = Placement::extract(&model, &result.assignment).unwrap();
    assert_eq!(again, result.placement);
}
