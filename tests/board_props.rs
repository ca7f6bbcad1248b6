use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    Board, BoardError, BoardGenerator, Coordinate, GameConfig, ShotOutcome, BOARD_SIZE,
};
use std::collections::HashSet;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    BoardGenerator::new(&GameConfig::default())
        .unwrap()
        .generate(&mut rng)
        .unwrap()
}

fn cells_with_ring(board: &Board, index: usize) -> HashSet<Coordinate> {
    let ship = &board.ships()[index];
    let mut cells = HashSet::new();
    for cell in ship.occupied_cells() {
        cells.insert(cell);
        cells.extend(
            cell.neighbours()
                .filter(|c| !board.is_out_of_bounds(*c)),
        );
    }
    cells
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleet_in_bounds(seed in any::<u64>()) {
        let board = random_board(seed);
        let config = GameConfig::default();
        prop_assert_eq!(board.ships().len(), config.fleet.len());
        prop_assert_eq!(board.ships_remaining(), config.fleet.len());
        for ship in board.ships() {
            for cell in ship.occupied_cells() {
                prop_assert!(cell.row < BOARD_SIZE && cell.col < BOARD_SIZE);
            }
        }
        let occupied = board
            .rows()
            .flatten()
            .filter(|&&cell| cell == sea_battle::Cell::Occupied)
            .count();
        prop_assert_eq!(occupied, config.total_ship_cells());
        prop_assert_eq!(board.busy_cells().count(), 0);
        prop_assert!(board.started());
    }

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        for a in 0..board.ships().len() {
            let zone = cells_with_ring(&board, a);
            for b in (a + 1)..board.ships().len() {
                for cell in board.ships()[b].occupied_cells() {
                    prop_assert!(!zone.contains(&cell), "ships {} and {} touch at {:?}", a, b, cell);
                }
            }
        }
    }

    #[test]
    fn shot_resolves_once(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        let target = Coordinate::new(row, col);
        board.shot(target).unwrap();
        prop_assert!(board.is_busy(target));
        prop_assert_eq!(board.shot(target).unwrap_err(), BoardError::AlreadyTargeted);
    }

    #[test]
    fn ships_remaining_tracks_integrity(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut previous = board.ships_remaining();
        for _ in 0..200 {
            let target = Coordinate::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            match board.shot(target) {
                Ok(outcome) => {
                    let live = board.ships().iter().filter(|s| s.integrity() > 0).count();
                    prop_assert_eq!(board.ships_remaining(), live);
                    prop_assert!(board.ships_remaining() <= previous);
                    if outcome == ShotOutcome::ShipDestroyed {
                        prop_assert_eq!(board.ships_remaining(), previous - 1);
                    } else {
                        prop_assert_eq!(board.ships_remaining(), previous);
                    }
                    previous = board.ships_remaining();
                }
                Err(err) => {
                    prop_assert_eq!(err, BoardError::AlreadyTargeted);
                }
            }
        }
        prop_assert_eq!(
            board.all_destroyed(),
            board.ships().iter().all(|s| s.is_destroyed())
        );
    }
}
