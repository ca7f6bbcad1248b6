use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    AiCombatant, Board, BoardGenerator, Combatant, Coordinate, Game, GameConfig, GameStatus,
    Orientation, Ship, ShotOutcome, Side,
};

fn generated_game(rng: &mut SmallRng) -> Game {
    let generator = BoardGenerator::new(&GameConfig::default()).unwrap();
    let b1 = generator.generate(rng).unwrap();
    let b2 = generator.generate(rng).unwrap();
    Game::new(
        Box::new(AiCombatant::named("AI 1")),
        b1,
        Box::new(AiCombatant::named("AI 2")),
        b2,
    )
}

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = generated_game(&mut rng);

    let mut steps = 0;
    while game.status() == GameStatus::InProgress {
        let side = game.current();
        let report = game.step(&mut rng).unwrap();
        assert_eq!(report.side, side);
        // hits keep the turn, misses pass it
        if report.outcome == ShotOutcome::Miss {
            assert_eq!(game.current(), side.opponent());
        } else {
            assert_eq!(game.current(), side);
        }
        steps += 1;
        // each board has 36 cells, so no side can fire more than that
        assert!(steps <= 72, "game took too many shots");
    }

    let GameStatus::Won(winner) = game.status() else {
        panic!("game should be over");
    };
    assert_eq!(game.board(winner.opponent()).ships_remaining(), 0);
    assert!(game.board(winner).ships_remaining() > 0);
    assert_eq!(game.shots(), steps);
    assert!(game.step(&mut rng).is_err());
}

#[test]
fn test_run_returns_winner() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = generated_game(&mut rng);
        let winner = game.run(&mut rng).unwrap();
        assert_eq!(game.status(), GameStatus::Won(winner));
        assert!(game.board(winner.opponent()).all_destroyed());
    }
}

#[test]
fn test_game_starts_boards_left_in_setup() {
    let mut rng = SmallRng::seed_from_u64(31);
    let mut boards = Vec::new();
    for _ in 0..2 {
        let mut board = Board::new(6).unwrap();
        board
            .add_ship(Ship::new(Coordinate::new(2, 2), 1, Orientation::Horizontal))
            .unwrap();
        assert!(!board.started());
        boards.push(board);
    }
    let second_board = boards.pop().unwrap();
    let first_board = boards.pop().unwrap();

    let mut game = Game::new(
        Box::new(AiCombatant::named("AI 1")),
        first_board,
        Box::new(AiCombatant::named("AI 2")),
        second_board,
    );
    assert!(game.board(Side::First).started());
    assert!(game.board(Side::Second).started());
    assert_eq!(game.board(Side::First).busy_cells().count(), 0);

    let winner = game.run(&mut rng).unwrap();
    assert!(game.board(winner.opponent()).all_destroyed());
    assert!(game.shots() <= 72);
}

#[test]
fn test_game_keeps_shots_on_started_boards() {
    let mut rng = SmallRng::seed_from_u64(32);
    let generator = BoardGenerator::new(&GameConfig::default()).unwrap();
    let first_board = generator.generate(&mut rng).unwrap();
    let mut second_board = generator.generate(&mut rng).unwrap();
    second_board.shot(Coordinate::new(0, 0)).unwrap();

    let game = Game::new(
        Box::new(AiCombatant::new()),
        first_board,
        Box::new(AiCombatant::new()),
        second_board,
    );
    assert!(game.board(Side::Second).is_busy(Coordinate::new(0, 0)));
}

#[test]
fn test_take_turn_retries_until_resolved() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut enemy = Board::new(2).unwrap();
    enemy
        .add_ship(Ship::new(Coordinate::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    enemy.begin();
    // leave a single cell untargeted
    for (r, c) in [(0, 1), (1, 0), (1, 1)] {
        assert_eq!(
            enemy.shot(Coordinate::new(r, c)).unwrap(),
            ShotOutcome::Miss
        );
    }

    let mut ai = AiCombatant::new();
    let (target, outcome) = ai.take_turn(&mut rng, &mut enemy).unwrap();
    assert_eq!(target, Coordinate::new(0, 0));
    assert_eq!(outcome, ShotOutcome::ShipDestroyed);
    assert!(enemy.all_destroyed());
}

#[test]
fn test_ai_targets_stay_on_grid() {
    let mut rng = SmallRng::seed_from_u64(5);
    let board = Board::new(6).unwrap();
    let mut ai = AiCombatant::new();
    for _ in 0..500 {
        let target = ai.select_target(&mut rng, &board).unwrap();
        assert!(!board.is_out_of_bounds(target));
    }
}
