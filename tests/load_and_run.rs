//! End-to-end tests: problem files on disk through to a finished run.

use std::fs;
use tempfile::TempDir;
use tsp_pso::pso::position_cost;
use tsp_pso::random::create_rng;
use tsp_pso::{DistanceMatrix, PsoConfig, PsoRunner, TspPsoError};

fn write_problem(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_three_cities_no_iterations() {
    let dir = TempDir::new().unwrap();
    let path = write_problem(&dir, "3.txt", "0,1,2\n1,0,3\n2,3,0\n");

    let matrix = DistanceMatrix::load(&path).unwrap();
    let config = PsoConfig::default()
        .with_swarm_size(1)
        .with_max_iterations(0)
        .with_seed(2024);
    let result = PsoRunner::run(&matrix, &config).unwrap();

    assert_eq!(result.cost_history.len(), 1);
    assert_eq!(result.best_cost, 6.0);
    assert_eq!(result.best_tour.len(), 4);
}

#[test]
fn test_four_cities_improves_on_random_tour() {
    let dir = TempDir::new().unwrap();
    // Cities at (0,0), (3,0), (3,2), (0,2) with distances rounded to the
    // nearest tenth; the perimeter tour costs 10.
    let path = write_problem(
        &dir,
        "4.txt",
        "0,3,3.6,2\n3,0,2,3.6\n3.6,2,0,3\n2,3.6,3,0\n",
    );
    let matrix = DistanceMatrix::load(&path).unwrap();

    let mut rng = create_rng(77);
    let baseline: Vec<f64> = (0..4).map(|_| rand::Rng::random(&mut rng)).collect();
    let baseline_cost = position_cost(&baseline, &matrix);

    let config = PsoConfig::default().with_seed(31);
    let result = PsoRunner::run(&matrix, &config).unwrap();

    assert!(result.best_cost <= baseline_cost);
    assert_eq!(result.best_cost, 10.0);
    for window in result.cost_history.windows(2) {
        assert!(window[1] <= window[0]);
    }
}

#[test]
fn test_single_city_file() {
    let dir = TempDir::new().unwrap();
    let path = write_problem(&dir, "1.txt", "0\n");

    let matrix = DistanceMatrix::load(&path).unwrap();
    let config = PsoConfig::default().with_max_iterations(10).with_seed(0);
    let result = PsoRunner::run(&matrix, &config).unwrap();

    assert_eq!(result.best_tour, vec![0, 0]);
    assert_eq!(result.best_cost, 0.0);
    assert!(result.to_string().ends_with("Best found path: 0, 0"));
}

#[test]
fn test_ragged_file_fails_before_run() {
    let dir = TempDir::new().unwrap();
    let path = write_problem(&dir, "bad.txt", "0,1,2\n1,0\n2,3,0\n");

    let err = DistanceMatrix::load(&path).unwrap_err();
    assert!(matches!(err, TspPsoError::RaggedRow { line: 2, .. }));
}

#[test]
fn test_non_numeric_file_fails_before_run() {
    let dir = TempDir::new().unwrap();
    let path = write_problem(&dir, "bad.txt", "0,1\none,0\n");

    let err = DistanceMatrix::load(&path).unwrap_err();
    assert!(err.to_string().contains("invalid distance 'one'"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = DistanceMatrix::load(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, TspPsoError::Io { .. }));
}

#[test]
fn test_bundled_problem_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("problems/48.txt");
    let matrix = DistanceMatrix::load(path).unwrap();
    assert_eq!(matrix.dimension(), 48);

    let config = PsoConfig::default().with_max_iterations(50).with_seed(48);
    let result = PsoRunner::run(&matrix, &config).unwrap();
    assert_eq!(result.best_tour.len(), 49);
    assert!(result.best_cost <= result.cost_history[0]);
}
