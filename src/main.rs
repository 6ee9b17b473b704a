//! Mastermind Solver - CLI
//!
//! Plays, solves and benchmarks Mastermind with a colour-discovery solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use mastermind_solver::{
    commands::{
        AssistOutcome, Role, SolveConfig, run_assist, run_benchmark, run_duel, run_play,
        run_test_all, run_versus, solve_pattern,
    },
    core::{DEFAULT_MAX_TURNS, DEFAULT_PALETTE_SIZE, DEFAULT_PATTERN_LENGTH, GameConfig},
    output::{
        print_benchmark_result, print_game_record, print_solve_result, print_test_all_statistics,
    },
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind codebreaker using colour discovery and candidate refinement",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs in a pattern (3-8)
    #[arg(short, long, global = true, default_value_t = DEFAULT_PATTERN_LENGTH)]
    pegs: usize,

    /// Number of colours in play (3-8)
    #[arg(short, long, global = true, default_value_t = DEFAULT_PALETTE_SIZE)]
    colours: usize,

    /// Maximum guesses per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    turns: usize,

    /// Seed for reproducible games (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (default)
    Play {
        /// Which side you take
        #[arg(short, long, value_enum, default_value_t = Role::Breaker)]
        role: Role,
    },

    /// Two players on one terminal, one sets the secret and one guesses
    Versus,

    /// Watch the computer play itself
    Duel,

    /// Get guess suggestions for a game on a physical board
    Assist,

    /// Solve a specific secret
    Solve {
        /// The secret, as colour codes (e.g. rgby)
        secret: String,

        /// Show phases and candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = GameConfig::with_turns(cli.pegs, cli.colours, cli.turns)
        .context("Invalid game configuration")?;
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed {seed}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        role: Role::Breaker,
    });

    match command {
        Commands::Play { role } => run_play_command(config, role, seed),
        Commands::Versus => run_versus_command(config),
        Commands::Duel => run_duel_command(config, seed),
        Commands::Assist => run_assist_command(config, seed),
        Commands::Solve { secret, verbose } => run_solve_command(config, secret, verbose, seed),
        Commands::Benchmark { count } => {
            run_benchmark_command(config, count, seed);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(config, limit, seed);
            Ok(())
        }
    }
}

fn run_solve_command(config: GameConfig, secret: String, verbose: bool, seed: u64) -> Result<()> {
    let solve_config = SolveConfig {
        secret,
        game: config,
        seed: Some(seed),
    };
    let result = solve_pattern(&solve_config)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(config: GameConfig, count: usize, seed: u64) {
    println!("Running benchmark on {count} random secrets (seed {seed})...");

    let result = run_benchmark(config, count, seed);
    print_benchmark_result(&result);
}

fn run_test_all_command(config: GameConfig, limit: Option<usize>, seed: u64) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets",
        limit.map_or(config.pattern_count(), |n| n.min(config.pattern_count()))
    );
    println!();

    let stats = run_test_all(config, limit, seed, true);
    print_test_all_statistics(&stats);
}

fn run_play_command(config: GameConfig, role: Role, seed: u64) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Mastermind - Play Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let stdin = io::stdin();
    let record = run_play(
        config,
        role,
        StdRng::seed_from_u64(seed),
        stdin.lock(),
        io::stdout(),
    )
    .context("Game aborted")?;

    print_game_record(&record);
    Ok(())
}

fn run_versus_command(config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Mastermind - Versus Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let stdin = io::stdin();
    let record = run_versus(config, stdin.lock(), io::stdout()).context("Game aborted")?;

    print_game_record(&record);
    Ok(())
}

fn run_duel_command(config: GameConfig, seed: u64) -> Result<()> {
    println!("{}", "🤖 Computer vs computer".bright_cyan().bold());

    let record = run_duel(config, StdRng::seed_from_u64(seed)).context("Duel aborted")?;
    print_game_record(&record);
    Ok(())
}

fn run_assist_command(config: GameConfig, seed: u64) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Mastermind Solver - Assist Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let stdin = io::stdin();
    let outcome = run_assist(
        config,
        StdRng::seed_from_u64(seed),
        stdin.lock(),
        io::stdout(),
    )?;

    if outcome == AssistOutcome::Quit {
        println!("\n👋 Thanks for playing!\n");
    }
    Ok(())
}
