use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{AiCombatant, BoardGenerator, Game, GameConfig, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let generator = BoardGenerator::new(&GameConfig::default())?;
    let b1 = generator.generate(&mut rng1)?;
    let b2 = generator.generate(&mut rng2)?;

    let mut game = Game::new(
        Box::new(AiCombatant::named("player1")),
        b1,
        Box::new(AiCombatant::named("player2")),
        b2,
    );
    // Shots are drawn from the first seed once boards are set.
    let winner = game.run(&mut rng1)?;

    let result = json!({
        "player1": {"ships_remaining": game.board(Side::First).ships_remaining()},
        "player2": {"ships_remaining": game.board(Side::Second).ships_remaining()},
        "shots": game.shots(),
        "winner": game.combatant(winner).name(),
        "winning_side": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
