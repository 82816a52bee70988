//! Display functions for game output

use super::formatters::{length_badge, letter_count};
use crate::commands::CheckReport;
use crate::core::Outcome;
use crate::engine::GameState;
use colored::Colorize;

/// Print the banner for a new round
pub fn print_round_banner(root_word: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the outcome of a single submission
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Accepted { word, gained } => {
            println!(
                "{} {} {}",
                "✓".green().bold(),
                word.bright_white().bold(),
                format!("+{gained}").green()
            );
        }
        Outcome::Rejected(rejection) => {
            println!(
                "{} {}: {}",
                "✗".red().bold(),
                rejection.title().red().bold(),
                rejection.message()
            );
        }
    }
}

/// Print the used-word list and score for the current round
pub fn print_round_summary(state: GameState<'_>) {
    println!("\nScore: {}", state.score.to_string().bright_cyan().bold());

    if state.used_words.is_empty() {
        println!("{}", "No words yet".bright_black());
        return;
    }

    for word in state.used_words {
        println!(
            "  {} {}",
            length_badge(letter_count(word)).bright_black(),
            word
        );
    }
}

/// Print the report of a `check` run
pub fn print_check_report(report: &CheckReport) {
    print_round_banner(&report.root);

    for (raw, outcome) in &report.outcomes {
        print!("{} → ", raw.bright_white());
        print_outcome(outcome);
    }

    let accepted = report
        .outcomes
        .iter()
        .filter(|(_, outcome)| outcome.is_accepted())
        .count();
    println!(
        "\n{} of {} accepted, score {}",
        accepted.to_string().green().bold(),
        report.outcomes.len(),
        report.score.to_string().bright_cyan().bold()
    );
}
