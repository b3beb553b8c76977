use std::fs;

use battleships::{
    place, Fleet, GameError, Grid, Orientation, PlacementPlan, Strategy,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fleet(text: &str) -> Fleet {
    Fleet::parse(text).unwrap()
}

fn standard() -> Fleet {
    fleet("Carrier:5\nBattleship:4\nCruiser:3\nSubmarine:3\nDestroyer:2")
}

#[test]
fn test_sequential_places_rows() {
    let fleet = fleet("Destroyer:2");
    let mut grid = Grid::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    place(&mut grid, &fleet, Strategy::Sequential, &mut rng).unwrap();

    assert_eq!(grid.cell(0, 0).unwrap(), Some(0));
    assert_eq!(grid.cell(1, 0).unwrap(), Some(0));
    assert_eq!(grid.cell(2, 0).unwrap(), None);
    for y in 1..3 {
        for x in 0..3 {
            assert_eq!(grid.cell(x, y).unwrap(), None);
        }
    }
}

#[test]
fn test_sequential_one_ship_per_row() {
    let fleet = fleet("A:3\nB:2\nC:1");
    let mut grid = Grid::new(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    place(&mut grid, &fleet, Strategy::Sequential, &mut rng).unwrap();

    assert_eq!(grid.cell(2, 0).unwrap(), Some(0));
    assert_eq!(grid.cell(1, 1).unwrap(), Some(1));
    assert_eq!(grid.cell(0, 2).unwrap(), Some(2));
    assert_eq!(grid.occupied(), 6);
}

#[test]
fn test_sequential_rejects_overflowing_fleet() {
    // three ships need three rows on a two-row board
    let fleet = fleet("A:1\nB:1\nC:1");
    let mut grid = Grid::new(2).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let err = place(&mut grid, &fleet, Strategy::Sequential, &mut rng).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { x: 0, y: 2 });
}

#[test]
fn test_sequential_rejects_too_long_ship() {
    let fleet = fleet("Leviathan:4");
    let mut grid = Grid::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let err = place(&mut grid, &fleet, Strategy::Sequential, &mut rng).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { x: 3, y: 0 });
}

#[test]
fn test_random_fills_exactly_the_fleet() {
    let fleet = standard();
    for seed in 0..20 {
        let mut grid = Grid::new(10).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        place(&mut grid, &fleet, Strategy::Random, &mut rng).unwrap();
        assert_eq!(grid.occupied(), fleet.total_segments());
    }
}

#[test]
fn test_random_board_length_ship_always_fits() {
    // only one row or column fits, but placement must still succeed and stop
    for size in 1..=6 {
        let fleet = Fleet::parse(&format!("Spine:{}", size)).unwrap();
        for seed in 0..10 {
            let mut grid = Grid::new(size).unwrap();
            let mut rng = SmallRng::seed_from_u64(seed);
            place(&mut grid, &fleet, Strategy::Random, &mut rng).unwrap();
            assert_eq!(grid.occupied(), size);
        }
    }
}

#[test]
fn test_random_overfull_board_exhausts() {
    // six segments cannot fit on four cells
    let fleet = fleet("A:2\nB:2\nC:2");
    let mut grid = Grid::new(2).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let err = place(&mut grid, &fleet, Strategy::Random, &mut rng).unwrap_err();
    assert!(matches!(err, GameError::PlacementExhausted { .. }));
}

#[test]
fn test_random_ship_longer_than_board_fails_fast() {
    let fleet = fleet("Leviathan:4");
    let mut grid = Grid::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let err = place(&mut grid, &fleet, Strategy::Random, &mut rng).unwrap_err();
    assert!(matches!(err, GameError::PlacementExhausted { .. }));
    assert!(grid.is_empty());
}

#[test]
fn test_custom_places_from_plan() {
    let fleet = fleet("Destroyer:2\nGunboat:1");
    let mut plan = PlacementPlan::new();
    plan.insert("Destroyer", 1, 1, Orientation::Vertical);
    plan.insert("Gunboat", 0, 0, Orientation::Horizontal);
    let mut grid = Grid::new(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    place(&mut grid, &fleet, Strategy::Custom(&plan), &mut rng).unwrap();

    assert_eq!(grid.cell(1, 1).unwrap(), Some(0));
    assert_eq!(grid.cell(1, 2).unwrap(), Some(0));
    assert_eq!(grid.cell(0, 0).unwrap(), Some(1));
    assert_eq!(grid.occupied(), 3);
}

#[test]
fn test_custom_overlap_is_invalid_placement() {
    let fleet = fleet("Destroyer:2\nGunboat:1");
    let mut plan = PlacementPlan::new();
    plan.insert("Destroyer", 0, 0, Orientation::Horizontal);
    plan.insert("Gunboat", 1, 0, Orientation::Horizontal);
    let mut grid = Grid::new(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let err = place(&mut grid, &fleet, Strategy::Custom(&plan), &mut rng).unwrap_err();
    assert_eq!(err, GameError::InvalidPlacement("Gunboat".into()));

    // the failing ship wrote nothing; the earlier ship remains
    assert_eq!(grid.cell(0, 0).unwrap(), Some(0));
    assert_eq!(grid.cell(1, 0).unwrap(), Some(0));
    assert_eq!(grid.occupied(), 2);
}

#[test]
fn test_custom_missing_entry() {
    let fleet = fleet("Destroyer:2\nGunboat:1");
    let mut plan = PlacementPlan::new();
    plan.insert("Destroyer", 0, 0, Orientation::Horizontal);
    let mut grid = Grid::new(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let err = place(&mut grid, &fleet, Strategy::Custom(&plan), &mut rng).unwrap_err();
    assert_eq!(err, GameError::MissingPlacement("Gunboat".into()));
}

#[test]
fn test_custom_off_grid_is_out_of_bounds() {
    let fleet = fleet("Destroyer:2");
    let mut plan = PlacementPlan::new();
    plan.insert("Destroyer", 2, 0, Orientation::Horizontal);
    let mut grid = Grid::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let err = place(&mut grid, &fleet, Strategy::Custom(&plan), &mut rng).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { x: 3, y: 0 });
    assert!(grid.is_empty());
}

#[test]
fn test_plan_extra_entries_ignored() {
    let fleet = fleet("Gunboat:1");
    let mut plan = PlacementPlan::new();
    plan.insert("Gunboat", 0, 0, Orientation::Horizontal);
    plan.insert("Phantom", 2, 2, Orientation::Vertical);
    let mut grid = Grid::new(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    place(&mut grid, &fleet, Strategy::Custom(&plan), &mut rng).unwrap();
    assert_eq!(grid.occupied(), 1);
}

#[test]
fn test_plan_deserializes_orientation_tokens() {
    let json = r#"{"Destroyer": [2, 3, "h"], "Submarine": [0, 1, "v"]}"#;
    let plan: PlacementPlan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.get("Destroyer"), Some(&(2, 3, Orientation::Horizontal)));
    assert_eq!(plan.get("Submarine"), Some(&(0, 1, Orientation::Vertical)));
}

#[test]
fn test_plan_load_missing_file_is_source_not_found() {
    let err = PlacementPlan::load("/definitely/not/here/placement.json").unwrap_err();
    assert!(matches!(err, GameError::SourceNotFound(_)));
}

#[test]
fn test_plan_load_rejects_malformed_json() {
    let path = std::env::temp_dir().join("battleships_plan_malformed_test.json");
    fs::write(&path, "{\"Destroyer\": [0, 0, \"sideways\"]}").unwrap();
    let err = PlacementPlan::load(&path);
    fs::remove_file(&path).ok();
    assert!(matches!(err.unwrap_err(), GameError::Format(_)));
}

#[test]
fn test_plan_load_reads_record_from_disk() {
    let path = std::env::temp_dir().join("battleships_plan_load_test.json");
    fs::write(&path, "{\"Destroyer\": [1, 2, \"v\"]}").unwrap();
    let plan = PlacementPlan::load(&path);
    fs::remove_file(&path).ok();
    let plan = plan.unwrap();
    assert_eq!(plan.get("Destroyer"), Some(&(1, 2, Orientation::Vertical)));
}
