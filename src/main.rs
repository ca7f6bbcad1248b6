#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging, max_board_size, print_boards, AiCombatant, BoardGenerator, Game, GameConfig,
    GameStatus, HumanCombatant, Side, BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the AI in this terminal (the default).
    Play(GameArgs),
    /// Watch two AIs play each other.
    Sim(GameArgs),
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, default_value_t = BOARD_SIZE, value_parser = parse_size)]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 0, help = "Pause between turns, in milliseconds")]
    delay_ms: u64,
}

#[cfg(feature = "std")]
impl Default for GameArgs {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            seed: None,
            delay_ms: 0,
        }
    }
}

#[cfg(feature = "std")]
impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            delay_ms: self.delay_ms,
            ..GameConfig::default()
        }
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn parse_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw.parse().map_err(|e| format!("{}", e))?;
    let max = max_board_size();
    if size == 0 || size > max {
        return Err(format!("board size must be between 1 and {}", max));
    }
    Ok(size)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play(GameArgs::default())) {
        Commands::Play(args) => play(&args),
        Commands::Sim(args) => simulate(&args),
    }
}

#[cfg(feature = "std")]
fn play(args: &GameArgs) -> anyhow::Result<()> {
    let config = args.config();
    let mut rng = args.rng();
    let generator = BoardGenerator::new(&config)?;
    let player_board = generator.generate(&mut rng)?;
    let mut ai_board = generator.generate(&mut rng)?;
    ai_board.set_hidden(true);

    println!(
        "
-------------------
    Welcome to
the sea battle game
-------------------
input format: x y
 x - row number
 y - column number
"
    );

    let mut game = Game::new(
        Box::new(HumanCombatant::stdio()),
        player_board,
        Box::new(AiCombatant::new()),
        ai_board,
    );
    let winner = run_verbose(&mut game, &mut rng, &config)?;
    println!("{}", "-".repeat(20));
    match winner {
        Side::First => println!("Player win!"),
        Side::Second => println!("AI win!"),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn simulate(args: &GameArgs) -> anyhow::Result<()> {
    let config = args.config();
    let mut rng = args.rng();
    let generator = BoardGenerator::new(&config)?;
    let first_board = generator.generate(&mut rng)?;
    let second_board = generator.generate(&mut rng)?;

    let mut game = Game::new(
        Box::new(AiCombatant::named("AI 1")),
        first_board,
        Box::new(AiCombatant::named("AI 2")),
        second_board,
    );
    let winner = run_verbose(&mut game, &mut rng, &config)?;
    println!("{}", "-".repeat(20));
    println!(
        "{} wins after {} shots",
        game.combatant(winner).name(),
        game.shots()
    );
    Ok(())
}

/// Turn loop with rendering and pacing between moves.
#[cfg(feature = "std")]
fn run_verbose(game: &mut Game, rng: &mut SmallRng, config: &GameConfig) -> anyhow::Result<Side> {
    let delay = Duration::from_millis(config.delay_ms);
    loop {
        print_boards(game);
        if let GameStatus::Won(side) = game.status() {
            return Ok(side);
        }
        std::thread::sleep(delay);

        let name = game.combatant(game.current()).name().to_string();
        println!("\n{}", "-".repeat(20));
        println!("{}'s move!", name);
        let report = game.step(rng)?;
        println!("{} move: {}", name, report.target);
        println!("{}", report.outcome);
        std::thread::sleep(delay);
    }
}
