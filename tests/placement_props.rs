use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use rogue_fleet::placement::{place_ship, random_placement_with_budget};
use rogue_fleet::{
    BoardError, Cell, FleetBoard, Grid, Orientation, Placement, ShipKind, COLS, ROWS, SHIP_KINDS,
    TOTAL_HITS,
};

fn cells_of(grid: &Grid<Cell>, kind: ShipKind) -> BTreeSet<(usize, usize)> {
    grid.iter()
        .filter(|&(_, cell)| cell == Cell::Ship(kind))
        .map(|(pos, _)| pos)
        .collect()
}

/// Cells `kind` would cover at `anchor` in any of its orientations.
fn shape_matches(kind: ShipKind, cells: &BTreeSet<(usize, usize)>) -> bool {
    cells.iter().any(|&(r, c)| {
        kind.orientations().iter().any(|&o| {
            Placement::new(kind, o, r, c)
                .map(|p| p.cells().collect::<BTreeSet<_>>() == *cells)
                .unwrap_or(false)
        })
    })
}

fn is_straight_run(cells: &BTreeSet<(usize, usize)>, len: usize) -> bool {
    let rows: BTreeSet<_> = cells.iter().map(|&(r, _)| r).collect();
    let cols: BTreeSet<_> = cells.iter().map(|&(_, c)| c).collect();
    let span = |set: &BTreeSet<usize>| set.iter().max().unwrap() - set.iter().min().unwrap() + 1;
    cells.len() == len
        && ((rows.len() == 1 && span(&cols) == len) || (cols.len() == 1 && span(&rows) == len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fleet_cells_never_overlap(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = FleetBoard::generate(&mut rng).unwrap();
        let grid = fleet.grid();

        let mut total = 0;
        for kind in SHIP_KINDS {
            prop_assert_eq!(grid.count(kind), kind.size());
            total += kind.size();
        }
        prop_assert_eq!(total, TOTAL_HITS);
        prop_assert_eq!(fleet.ship_map().count_ones(), TOTAL_HITS);
        prop_assert_eq!(grid.iter().filter(|&(_, c)| c != Cell::Empty).count(), TOTAL_HITS);
    }

    #[test]
    fn placements_stay_on_board(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = FleetBoard::generate(&mut rng).unwrap();
        for placement in fleet.placements() {
            for (r, c) in placement.cells() {
                prop_assert!(r < ROWS && c < COLS);
                prop_assert_eq!(fleet.ship_at(r, c).unwrap(), Some(placement.kind()));
            }
        }
    }

    #[test]
    fn ships_keep_their_shape(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = FleetBoard::generate(&mut rng).unwrap();
        let grid = fleet.grid();

        let m = cells_of(grid, ShipKind::Mothership);
        let (r, c) = *m.iter().next().unwrap();
        let expected: BTreeSet<_> = [(r, c), (r, c + 2), (r + 1, c + 1), (r + 2, c), (r + 2, c + 2)]
            .into_iter()
            .collect();
        prop_assert_eq!(m, expected);

        let b = cells_of(grid, ShipKind::Battleship);
        let (r, c) = *b.iter().next().unwrap();
        let square: BTreeSet<_> = [(r, c), (r, c + 1), (r + 1, c), (r + 1, c + 1)].into_iter().collect();
        prop_assert_eq!(b, square);

        prop_assert!(shape_matches(ShipKind::Destroyer, &cells_of(grid, ShipKind::Destroyer)));
        prop_assert!(is_straight_run(&cells_of(grid, ShipKind::StealthShip), 3));
        prop_assert!(is_straight_run(&cells_of(grid, ShipKind::PatrolShip), 2));
    }

    #[test]
    fn placement_rejects_cells_off_board(row in 0..ROWS, col in 0..COLS) {
        for kind in SHIP_KINDS {
            for &o in kind.orientations() {
                match Placement::new(kind, o, row, col) {
                    Ok(p) => prop_assert!(p.cells().all(|(r, c)| r < ROWS && c < COLS)),
                    Err(e) => prop_assert_eq!(e, BoardError::ShipOutOfBounds),
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_fleet() {
    let a = FleetBoard::generate(&mut SmallRng::seed_from_u64(42)).unwrap();
    let b = FleetBoard::generate(&mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_mothership_template() {
    let p = Placement::new(ShipKind::Mothership, Orientation::Fixed, 2, 3).unwrap();
    let cells: Vec<_> = p.cells().collect();
    assert_eq!(cells, vec![(2, 3), (2, 5), (3, 4), (4, 3), (4, 5)]);
    assert_eq!(p.anchor(), (2, 3));
    assert_eq!(p.mask().count_ones(), 5);

    // needs col + 2 < COLS and row + 2 < ROWS
    assert!(Placement::new(ShipKind::Mothership, Orientation::Fixed, 7, 9).is_ok());
    assert_eq!(
        Placement::new(ShipKind::Mothership, Orientation::Fixed, 8, 0).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Placement::new(ShipKind::Mothership, Orientation::Fixed, 0, 10).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}

#[test]
fn test_destroyer_orientations() {
    let cells = |o| {
        Placement::new(ShipKind::Destroyer, o, 5, 5)
            .unwrap()
            .cells()
            .collect::<Vec<_>>()
    };
    assert_eq!(cells(Orientation::Right), vec![(5, 5), (6, 6), (7, 5)]);
    assert_eq!(cells(Orientation::Down), vec![(5, 5), (5, 7), (6, 6)]);
    assert_eq!(cells(Orientation::Left), vec![(5, 5), (6, 4), (7, 5)]);
    assert_eq!(cells(Orientation::Up), vec![(5, 5), (4, 6), (5, 7)]);

    assert_eq!(
        Placement::new(ShipKind::Destroyer, Orientation::Left, 0, 0).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Placement::new(ShipKind::Destroyer, Orientation::Up, 0, 0).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}

#[test]
fn test_unsupported_orientation() {
    assert_eq!(
        Placement::new(ShipKind::Battleship, Orientation::Vertical, 0, 0).unwrap_err(),
        BoardError::UnsupportedOrientation
    );
    assert_eq!(
        Placement::new(ShipKind::PatrolShip, Orientation::Up, 0, 0).unwrap_err(),
        BoardError::UnsupportedOrientation
    );
}

#[test]
fn test_placement_fails_when_budget_runs_out() {
    // Fill every cell so nothing can ever fit.
    let mut grid: Grid<Cell> = Grid::new();
    for r in 0..ROWS {
        for c in 0..COLS {
            grid.set(r, c, Cell::Ship(ShipKind::Mothership)).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(7);
    let err = random_placement_with_budget(&grid, ShipKind::PatrolShip, &mut rng, 50).unwrap_err();
    assert_eq!(
        err,
        BoardError::PlacementFailed {
            kind: ShipKind::PatrolShip,
            attempts: 50
        }
    );
}

#[test]
fn test_place_ship_only_uses_free_cells() {
    // Leave a single horizontal pair free in the bottom-right corner.
    let mut grid: Grid<Cell> = Grid::new();
    for r in 0..ROWS {
        for c in 0..COLS {
            if (r, c) != (9, 10) && (r, c) != (9, 11) {
                grid.set(r, c, Cell::Ship(ShipKind::Mothership)).unwrap();
            }
        }
    }
    let mut rng = SmallRng::seed_from_u64(3);
    let placement = place_ship(&mut grid, ShipKind::PatrolShip, &mut rng).unwrap();
    assert_eq!(placement.anchor(), (9, 10));
    assert_eq!(placement.orientation(), Orientation::Horizontal);
    assert_eq!(grid.count(ShipKind::PatrolShip), 2);
}

#[test]
fn test_from_placements_rejects_overlap_and_duplicates() {
    let m = Placement::new(ShipKind::Mothership, Orientation::Fixed, 0, 0).unwrap();
    let b = Placement::new(ShipKind::Battleship, Orientation::Fixed, 0, 4).unwrap();
    let d = Placement::new(ShipKind::Destroyer, Orientation::Right, 4, 0).unwrap();
    let s = Placement::new(ShipKind::StealthShip, Orientation::Horizontal, 8, 0).unwrap();
    let p = Placement::new(ShipKind::PatrolShip, Orientation::Vertical, 5, 10).unwrap();
    let fleet = FleetBoard::from_placements([p, s, d, b, m]).unwrap();
    assert_eq!(fleet.placements()[0].kind(), ShipKind::Mothership);
    assert_eq!(fleet.placement(ShipKind::PatrolShip).anchor(), (5, 10));

    // Patrol ship on top of the Mothership's centre.
    let clash = Placement::new(ShipKind::PatrolShip, Orientation::Horizontal, 1, 1).unwrap();
    assert_eq!(
        FleetBoard::from_placements([m, b, d, s, clash]).unwrap_err(),
        BoardError::ShipOverlaps
    );

    let s2 = Placement::new(ShipKind::StealthShip, Orientation::Vertical, 6, 6).unwrap();
    assert_eq!(
        FleetBoard::from_placements([m, b, s2, s, p]).unwrap_err(),
        BoardError::DuplicateShip(ShipKind::StealthShip)
    );
}
