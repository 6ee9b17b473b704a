//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs, format_pattern};
use crate::commands::{BenchmarkResult, CONVERGENCE_TARGET, SolveResult, TestAllStatistics};
use crate::game::GameRecord;
use colored::Colorize;
use std::collections::HashMap;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", format_pattern(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {:2}: {}  {}",
            turn,
            format_pattern(&step.guess),
            feedback_pegs(step.feedback, length)
        );

        if verbose {
            println!("  Phase:      {}", step.phase);
            match (step.candidates_before, step.candidates_after) {
                (Some(before), Some(after)) => {
                    println!("  Candidates: {before} → {after}");
                }
                (None, Some(after)) => println!("  Candidates: {after}"),
                _ => {}
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print every turn of a finished game
pub fn print_game_record(record: &GameRecord) {
    let length = record.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    for (i, turn) in record.turns.iter().enumerate() {
        let candidates = turn
            .candidates_after
            .map(|n| format!("  ({n} left)").bright_black().to_string())
            .unwrap_or_default();
        println!(
            "{:2}. {}  {}{candidates}",
            i + 1,
            format_pattern(&turn.guess),
            feedback_pegs(turn.feedback, length)
        );
    }
    println!("{}", "─".repeat(60).cyan());

    println!("Secret: {}", format_pattern(&record.secret));
    if record.solved {
        println!(
            "{}",
            format!("🎉 Cracked in {} guesses!", record.guesses())
                .green()
                .bold()
        );
    } else {
        println!("{}", "❌ Out of turns".red().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", format!("{}", result.solved).green());
    if result.failed > 0 {
        println!("   Out of turns:     {}", format!("{}", result.failed).yellow());
    }
    if result.inconsistent > 0 {
        println!(
            "   Inconsistent:     {}",
            format!("{}", result.inconsistent).red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.solved);
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    let config = &stats.config;

    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!(
        "  Game:                {} pegs, {} colours, {} turns",
        config.pattern_length(),
        config.palette_size(),
        config.max_turns()
    );
    println!("  Secrets tested:      {}", stats.total_secrets);
    println!(
        "  Solved in budget:    {} {}",
        stats.solved,
        format!("({:.2}%)", stats.solved_percentage()).green()
    );
    if stats.failed > 0 {
        println!(
            "  Not solved:          {} {}",
            stats.failed,
            format!("({:.2}%)", 100.0 - stats.solved_percentage()).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Best / worst:        {} / {}", stats.min_guesses, stats.max_guesses);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    print_distribution(&stats.guess_distribution, stats.solved);

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({guesses} guesses)", format_pattern(secret));
        }
    }

    if !stats.unsolved_secrets.is_empty() {
        println!("\n⏱  {}", "Out of Turns".yellow().bold());
        for secret in stats.unsolved_secrets.iter().take(10) {
            println!("  {}", format_pattern(secret));
        }
    }

    println!("\n🔍 {}", "Soundness".bright_cyan().bold());
    if stats.inconsistent_secrets.is_empty() {
        println!("  {}", "No secret was ever eliminated".green());
    } else {
        println!(
            "  {}",
            format!(
                "{} secrets rejected true feedback",
                stats.inconsistent_secrets.len()
            )
            .red()
            .bold()
        );
        for secret in stats.inconsistent_secrets.iter().take(10) {
            println!("  {}", format_pattern(secret));
        }
    }

    println!("\n📐 {}", "Convergence".bright_cyan().bold());
    let share = format!("{:.2}%", stats.solved_percentage());
    let share = if stats.meets_target() {
        share.bright_green().bold()
    } else {
        share.red().bold()
    };
    println!(
        "  Solved within {} turns: {share} (target {CONVERGENCE_TARGET:.0}%)",
        config.max_turns()
    );
}

fn print_distribution(distribution: &HashMap<usize, usize>, solved: usize) {
    if solved == 0 {
        return;
    }

    let max_count = distribution.values().copied().max().unwrap_or(1);
    let mut rows: Vec<(usize, usize)> = distribution.iter().map(|(&k, &v)| (k, v)).collect();
    rows.sort_unstable();

    for (guesses, count) in rows {
        let percentage = count as f64 / solved as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses:2} guesses: {} {count:5} ({percentage:5.1}%)",
            bar.green()
        );
    }
}
